//! # Passphrase Generation
//!
//! [`PassphraseGenerator::generate`] turns a [`Wordlist`] and a
//! [`GenerationConfig`] into a [`PassphraseResult`]:
//!
//! 1. Sample exactly `min_words` words, independently and with replacement.
//! 2. Uppercase the first character of every word if `first_upper` is set.
//! 3. Append a number from `[0, number_pool_size)` if `append_numbers` is set.
//! 4. Join the tokens according to [`JoinMode`]. The last token never gets a
//!    trailing separator.
//!
//! The word count is fixed. There is no "keep adding words until the result is
//! N characters long" mode; a length target is better expressed as more words.
//!
//! The generator owns its random source and is constructed explicitly, so
//! tests can drive it with a scripted source and production code hands it
//! [`OsRandom`](crate::random::OsRandom).

use crate::config::{GenerationConfig, JoinMode};
use crate::entropy;
use crate::error::{Result, StapleError};
use crate::random::{RandomSource, UniformSampler};
use crate::wordlist::Wordlist;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassphraseResult {
    /// Every token in order, including the numeric suffix if one was added.
    pub words: Vec<String>,
    pub joined: String,
    /// Entropy of the dictionary words alone.
    pub entropy_bits: u32,
    /// Number of dictionary words (the suffix is not counted).
    pub word_count: usize,
}

impl PassphraseResult {
    /// The numeric suffix, if one was appended.
    pub fn number(&self) -> Option<&str> {
        if self.words.len() > self.word_count {
            self.words.last().map(String::as_str)
        } else {
            None
        }
    }
}

pub struct PassphraseGenerator<R: RandomSource> {
    sampler: UniformSampler<R>,
}

impl<R: RandomSource> PassphraseGenerator<R> {
    pub fn new(source: R) -> Self {
        Self {
            sampler: UniformSampler::new(source),
        }
    }

    /// The underlying sampler, shared with strength estimation.
    pub fn sampler(&mut self) -> &mut UniformSampler<R> {
        &mut self.sampler
    }

    pub fn generate(
        &mut self,
        wordlist: &Wordlist,
        config: &GenerationConfig,
    ) -> Result<PassphraseResult> {
        if wordlist.is_empty() {
            return Err(StapleError::EmptyWordlist);
        }
        config.validate()?;

        let mut words = Vec::with_capacity(config.min_words.saturating_add(1));
        for _ in 0..config.min_words {
            let word = self.sampler.pick(wordlist.words())?;
            words.push(if config.first_upper {
                capitalize_first(word)
            } else {
                word.clone()
            });
        }

        if config.append_numbers {
            let pool = i64::try_from(config.number_pool_size).map_err(|_| {
                StapleError::InvalidConfig(format!(
                    "number pool size {} is too large",
                    config.number_pool_size
                ))
            })?;
            words.push(self.sampler.next_int(0, pool)?.to_string());
        }

        let joined = self.join(&words, &config.separator, config.join_mode)?;
        let entropy_bits = entropy::entropy_bits(wordlist.len(), config.min_words);

        debug!(
            words = config.min_words,
            wordlist_size = wordlist.len(),
            entropy_bits,
            mode = %config.join_mode,
            "generated passphrase"
        );

        Ok(PassphraseResult {
            words,
            joined,
            entropy_bits,
            word_count: config.min_words,
        })
    }

    /// Joins tokens, filling each gap according to `mode`.
    ///
    /// In [`JoinMode::Random`] the separator is an alphabet: each gap gets one
    /// of its characters, and an empty separator yields no gap at all.
    pub fn join(&mut self, tokens: &[String], separator: &str, mode: JoinMode) -> Result<String> {
        let symbols: Vec<char> = separator.chars().collect();
        let mut joined = String::new();

        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                match mode {
                    JoinMode::Fixed => joined.push_str(separator),
                    JoinMode::Random if !symbols.is_empty() => {
                        joined.push(*self.sampler.pick(&symbols)?)
                    }
                    JoinMode::Random => {}
                }
            }
            joined.push_str(token);
        }

        Ok(joined)
    }
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
