//! # Wordlists
//!
//! A [`Wordlist`] is an ordered, immutable sequence of candidate words. The
//! [`WordlistStore`] caches lists by identifier (a language code or a file
//! name). It does no I/O: a loader elsewhere fetches raw text and hands it to
//! [`WordlistStore::put`].
//!
//! ## Raw Format
//!
//! One word per line or per comma-separated field, UTF-8. Both delimiters may
//! be mixed in one file. Entries are trimmed, so CRLF files and `a, b, c`
//! parse cleanly, and empty entries (such as the one a final delimiter
//! produces) are dropped.

use crate::error::{Result, StapleError};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

/// Identifier of the list compiled into the binary.
pub const BUILTIN_ID: &str = "en";

static BUILTIN_TEXT: &str = include_str!("../../data/wordlist.txt");

static BUILTIN: Lazy<Wordlist> = Lazy::new(|| Wordlist::parse(BUILTIN_TEXT));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    pub fn parse(raw: &str) -> Self {
        let words = raw
            .split([',', '\n'])
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(String::from)
            .collect();
        Self { words }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The English list shipped with staple.
    pub fn builtin() -> &'static Wordlist {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// In-memory cache of parsed wordlists keyed by identifier.
#[derive(Debug, Default)]
pub struct WordlistStore {
    lists: HashMap<String, Wordlist>,
}

impl WordlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with the built-in list registered under [`BUILTIN_ID`].
    pub fn with_builtin() -> Self {
        let mut store = Self::new();
        store.insert(BUILTIN_ID, Wordlist::builtin().clone());
        store
    }

    pub fn get(&self, id: &str) -> Option<&Wordlist> {
        self.lists.get(id)
    }

    /// Whether `id` is already cached, so the caller can skip fetching it.
    pub fn contains(&self, id: &str) -> bool {
        self.lists.contains_key(id)
    }

    /// Parses `raw` and stores it under `id`, replacing any previous entry.
    pub fn put(&mut self, id: &str, raw: &str) -> &Wordlist {
        self.insert(id, Wordlist::parse(raw))
    }

    pub fn insert(&mut self, id: &str, list: Wordlist) -> &Wordlist {
        debug!(id, words = list.len(), "wordlist stored");
        self.lists.insert(id.to_string(), list);
        &self.lists[id]
    }

    /// Loaded identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.lists.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Concatenates several loaded lists in the order given.
    pub fn combined<I: AsRef<str>>(&self, ids: &[I]) -> Result<Wordlist> {
        let mut words = Vec::new();
        for id in ids {
            let list = self
                .get(id.as_ref())
                .ok_or_else(|| StapleError::UnknownWordlist(id.as_ref().to_string()))?;
            words.extend(list.words.iter().cloned());
        }
        Ok(Wordlist { words })
    }
}
