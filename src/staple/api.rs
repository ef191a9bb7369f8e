//! # API Facade
//!
//! [`StapleApi`] is the single entry point clients use. It owns the three
//! pieces of state staple has (the option store, the wordlist cache and the
//! generator with its random source) and dispatches each call to the matching
//! function in `commands/`.
//!
//! The facade does no logic of its own and never prints. It is generic over
//! both the [`ConfigStore`] and the [`RandomSource`]:
//!
//! - Production: `StapleApi<FileConfigStore, OsRandom>`
//! - Testing: `StapleApi<InMemoryConfigStore, SeededSource>`
//!
//! Wordlists are loaded by the caller into [`StapleApi::wordlist_store`]
//! (see [`crate::loader::FileLoader::ensure_loaded`]) before generating from
//! them.

use crate::commands;
use crate::config::GenerationConfig;
use crate::error::Result;
use crate::generator::PassphraseGenerator;
use crate::random::RandomSource;
use crate::store::ConfigStore;
use crate::wordlist::WordlistStore;

pub struct StapleApi<S: ConfigStore, R: RandomSource> {
    store: S,
    wordlists: WordlistStore,
    generator: PassphraseGenerator<R>,
}

impl<S: ConfigStore, R: RandomSource> StapleApi<S, R> {
    pub fn new(store: S, wordlists: WordlistStore, source: R) -> Self {
        Self {
            store,
            wordlists,
            generator: PassphraseGenerator::new(source),
        }
    }

    /// Options to generate with: whatever is stored, else the defaults.
    pub fn options(&self) -> GenerationConfig {
        commands::config::effective(&self.store)
    }

    pub fn wordlist_store(&mut self) -> &mut WordlistStore {
        &mut self.wordlists
    }

    pub fn generate<I: AsRef<str>>(
        &mut self,
        config: &GenerationConfig,
        extra: &[I],
        count: usize,
    ) -> Result<commands::CmdResult> {
        commands::generate::run(&mut self.generator, &self.wordlists, config, extra, count)
    }

    pub fn strength<I: AsRef<str>>(
        &mut self,
        config: &GenerationConfig,
        extra: &[I],
    ) -> Result<commands::CmdResult> {
        commands::strength::run(self.generator.sampler(), &self.wordlists, config, extra)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&mut self.store, action)
    }

    pub fn wordlists(&self, available: &[String]) -> Result<commands::CmdResult> {
        commands::wordlists::run(&self.wordlists, available)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, WordlistInfo};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::SeededSource;
    use crate::store::memory::InMemoryConfigStore;

    fn api() -> StapleApi<InMemoryConfigStore, SeededSource> {
        StapleApi::new(
            InMemoryConfigStore::new(),
            WordlistStore::with_builtin(),
            SeededSource::new(42),
        )
    }

    const NONE: &[&str] = &[];

    #[test]
    fn generate_uses_stored_options() {
        let mut api = api();
        api.config(ConfigAction::Set("words".into(), "6".into()))
            .unwrap();

        let options = api.options();
        let result = api.generate(&options, NONE, 1).unwrap();
        assert_eq!(result.passphrases[0].word_count, 6);
    }

    #[test]
    fn options_default_when_store_empty() {
        assert_eq!(api().options(), GenerationConfig::default());
    }

    #[test]
    fn stored_wordlist_is_used_for_generation() {
        let mut api = api();
        assert!(!api.wordlist_store().contains("pets"));
        api.wordlist_store().put("pets", "cat,dog,");
        assert!(api.wordlist_store().contains("pets"));

        let config = GenerationConfig {
            wordlist: "pets".into(),
            first_upper: false,
            append_numbers: false,
            ..GenerationConfig::default()
        };
        let result = api.generate(&config, NONE, 3).unwrap();
        for p in &result.passphrases {
            assert!(p.words.iter().all(|w| w == "cat" || w == "dog"));
        }
        assert_eq!(result.strength.unwrap().entropy_bits, 3);
    }

    #[test]
    fn strength_dispatches() {
        let mut api = api();
        let result = api.strength(&GenerationConfig::default(), NONE).unwrap();
        assert!(result.strength.is_some());
        assert!(result.passphrases.is_empty());
    }

    #[test]
    fn wordlists_dispatches() {
        let api = api();
        let result = api.wordlists(&[]).unwrap();
        assert_eq!(result.wordlists.len(), 1);
        assert_eq!(result.wordlists[0].id, "en");
    }
}
