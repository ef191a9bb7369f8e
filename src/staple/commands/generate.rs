use crate::commands::{resolve_wordlist, CmdMessage, CmdResult};
use crate::config::GenerationConfig;
use crate::entropy::strength_report;
use crate::error::{Result, StapleError};
use crate::generator::PassphraseGenerator;
use crate::random::RandomSource;
use crate::wordlist::WordlistStore;

/// Entropy below which a passphrase is flagged as weak.
const WEAK_ENTROPY_BITS: u32 = 40;

pub fn run<R: RandomSource, I: AsRef<str>>(
    generator: &mut PassphraseGenerator<R>,
    wordlists: &WordlistStore,
    config: &GenerationConfig,
    extra: &[I],
    count: usize,
) -> Result<CmdResult> {
    if count == 0 {
        return Err(StapleError::Api("Count must be at least 1".to_string()));
    }

    let wordlist = resolve_wordlist(wordlists, &config.wordlist, extra)?;

    let mut passphrases = Vec::with_capacity(count);
    for _ in 0..count {
        passphrases.push(generator.generate(&wordlist, config)?);
    }

    let report = strength_report(wordlist.len(), config.min_words, generator.sampler())?;

    let mut result = CmdResult::default();
    if report.entropy_bits < WEAK_ENTROPY_BITS {
        result.add_message(CmdMessage::warning(format!(
            "Only {} bits of entropy. Consider more words or a larger wordlist.",
            report.entropy_bits
        )));
    }

    Ok(result.with_passphrases(passphrases).with_strength(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::random::testing::SeededSource;
    use crate::wordlist::BUILTIN_ID;

    fn store() -> WordlistStore {
        let mut store = WordlistStore::with_builtin();
        store.put("tiny", "ant,bee,cat,dog");
        store.put("jargon", "grok\nkludge\n");
        store
    }

    fn no_extra() -> &'static [&'static str] {
        &[]
    }

    #[test]
    fn generates_requested_number_of_passphrases() {
        let mut generator = PassphraseGenerator::new(SeededSource::new(1));
        let config = GenerationConfig::default();
        let result = run(&mut generator, &store(), &config, no_extra(), 4).unwrap();

        assert_eq!(result.passphrases.len(), 4);
        for p in &result.passphrases {
            assert_eq!(p.word_count, 3);
            assert_eq!(p.words.len(), 4);
        }
        let report = result.strength.unwrap();
        assert_eq!(report.wordlist_size, crate::wordlist::Wordlist::builtin().len());
    }

    #[test]
    fn uses_selected_wordlist() {
        let mut generator = PassphraseGenerator::new(SeededSource::new(2));
        let config = GenerationConfig {
            wordlist: "tiny".to_string(),
            first_upper: false,
            append_numbers: false,
            ..GenerationConfig::default()
        };
        let result = run(&mut generator, &store(), &config, no_extra(), 1).unwrap();
        for word in &result.passphrases[0].words {
            assert!(["ant", "bee", "cat", "dog"].contains(&word.as_str()));
        }
    }

    #[test]
    fn extra_lists_extend_the_pool() {
        let mut generator = PassphraseGenerator::new(SeededSource::new(3));
        let config = GenerationConfig {
            wordlist: "tiny".to_string(),
            ..GenerationConfig::default()
        };
        let result = run(&mut generator, &store(), &config, &["jargon"], 1).unwrap();
        assert_eq!(result.strength.unwrap().wordlist_size, 6);
    }

    #[test]
    fn warns_about_weak_passphrases() {
        let mut generator = PassphraseGenerator::new(SeededSource::new(4));
        let config = GenerationConfig {
            wordlist: "tiny".to_string(),
            ..GenerationConfig::default()
        };
        let result = run(&mut generator, &store(), &config, no_extra(), 1).unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn unknown_wordlist_fails() {
        let mut generator = PassphraseGenerator::new(SeededSource::new(5));
        let config = GenerationConfig {
            wordlist: "klingon".to_string(),
            ..GenerationConfig::default()
        };
        let err = run(&mut generator, &store(), &config, no_extra(), 1).unwrap_err();
        assert!(matches!(err, StapleError::UnknownWordlist(_)));
    }

    #[test]
    fn empty_wordlist_fails() {
        let mut store = WordlistStore::new();
        store.put(BUILTIN_ID, "");
        let mut generator = PassphraseGenerator::new(SeededSource::new(6));
        let err = run(
            &mut generator,
            &store,
            &GenerationConfig::default(),
            no_extra(),
            1,
        )
        .unwrap_err();
        assert!(matches!(err, StapleError::EmptyWordlist));
    }

    #[test]
    fn zero_count_is_rejected() {
        let mut generator = PassphraseGenerator::new(SeededSource::new(7));
        assert!(run(
            &mut generator,
            &store(),
            &GenerationConfig::default(),
            no_extra(),
            0
        )
        .is_err());
    }
}
