//! Wordlist loading from disk.
//!
//! This is the only place wordlist text is read. The result is handed to
//! [`WordlistStore::put`], which does the parsing. Identifiers resolve in this
//! order:
//!
//! 1. the built-in list (`en`), which needs no fetch
//! 2. an existing file path, used verbatim (`./jargon.txt`)
//! 3. `<dir>/<id>.txt` inside the wordlists directory

use crate::error::{Result, StapleError};
use crate::wordlist::{WordlistStore, BUILTIN_ID};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const WORDLIST_EXT: &str = "txt";

pub struct FileLoader {
    dir: PathBuf,
}

impl FileLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Where `id` would be read from, if anywhere.
    pub fn locate(&self, id: &str) -> Option<PathBuf> {
        let direct = PathBuf::from(id);
        if direct.is_file() {
            return Some(direct);
        }
        let in_dir = self.dir.join(format!("{}.{}", id, WORDLIST_EXT));
        in_dir.is_file().then_some(in_dir)
    }

    pub fn fetch(&self, id: &str) -> Result<String> {
        let path = self
            .locate(id)
            .ok_or_else(|| StapleError::UnknownWordlist(id.to_string()))?;
        debug!(id, path = %path.display(), "reading wordlist");
        fs::read_to_string(&path).map_err(StapleError::Io)
    }

    /// Makes sure `id` is in `store`, reading it from disk only if needed.
    pub fn ensure_loaded(&self, store: &mut WordlistStore, id: &str) -> Result<()> {
        if store.contains(id) {
            return Ok(());
        }
        if id == BUILTIN_ID {
            store.insert(BUILTIN_ID, crate::wordlist::Wordlist::builtin().clone());
            return Ok(());
        }
        let raw = self.fetch(id)?;
        store.put(id, &raw);
        Ok(())
    }

    /// Identifiers of the `.txt` files in the wordlists directory, sorted.
    pub fn available(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(StapleError::Io)? {
            let path = entry.map_err(StapleError::Io)?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(WORDLIST_EXT) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        ids.sort();
        Ok(ids)
    }
}
