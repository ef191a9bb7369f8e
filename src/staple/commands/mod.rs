use crate::config::GenerationConfig;
use crate::entropy::StrengthReport;
use crate::generator::PassphraseResult;
use crate::wordlist::{Wordlist, WordlistStore};

pub mod config;
pub mod generate;
pub mod strength;
pub mod wordlists;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A loaded wordlist as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordlistInfo {
    pub id: String,
    pub size: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub passphrases: Vec<PassphraseResult>,
    pub strength: Option<StrengthReport>,
    pub config: Option<GenerationConfig>,
    pub wordlists: Vec<WordlistInfo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_passphrases(mut self, passphrases: Vec<PassphraseResult>) -> Self {
        self.passphrases = passphrases;
        self
    }

    pub fn with_strength(mut self, report: StrengthReport) -> Self {
        self.strength = Some(report);
        self
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_wordlists(mut self, wordlists: Vec<WordlistInfo>) -> Self {
        self.wordlists = wordlists;
        self
    }
}

/// The list a config selects, merged with any extra lists requested.
pub(crate) fn resolve_wordlist<I: AsRef<str>>(
    store: &WordlistStore,
    primary: &str,
    extra: &[I],
) -> crate::error::Result<Wordlist> {
    let mut ids = vec![primary];
    ids.extend(extra.iter().map(AsRef::as_ref));
    store.combined(&ids[..])
}
