use crate::commands::{resolve_wordlist, CmdResult};
use crate::config::GenerationConfig;
use crate::entropy::strength_report;
use crate::error::Result;
use crate::random::{RandomSource, UniformSampler};
use crate::wordlist::WordlistStore;

/// Reports the strength a config would produce, without generating anything.
pub fn run<R: RandomSource, I: AsRef<str>>(
    sampler: &mut UniformSampler<R>,
    wordlists: &WordlistStore,
    config: &GenerationConfig,
    extra: &[I],
) -> Result<CmdResult> {
    config.validate()?;
    let wordlist = resolve_wordlist(wordlists, &config.wordlist, extra)?;
    let report = strength_report(wordlist.len(), config.min_words, sampler)?;
    Ok(CmdResult::default().with_strength(report))
}
