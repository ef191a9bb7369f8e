//! # Option Persistence
//!
//! The [`ConfigStore`] trait is how a client remembers the options a user
//! picked between runs. The generation core never touches it: callers load a
//! [`GenerationConfig`], pass it by value into generation, and save it back
//! when the user asks.
//!
//! ## Implementations
//!
//! - [`fs::FileConfigStore`]: `config.json` in a directory (the platform config
//!   dir in production)
//! - [`memory::InMemoryConfigStore`]: no persistence, for tests
//!
//! ## Failure Policy
//!
//! `load` never fails. A missing, unreadable or unparseable file is reported
//! as "nothing stored" and the caller falls back to defaults. `save` and
//! `clear` do surface I/O errors, since the user explicitly asked for them.

use crate::config::GenerationConfig;
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait ConfigStore {
    /// The stored options, or `None` when nothing usable is stored.
    fn load(&self) -> Option<GenerationConfig>;

    fn save(&mut self, config: &GenerationConfig) -> Result<()>;

    /// Removes stored options. Clearing an empty store is not an error.
    fn clear(&mut self) -> Result<()>;
}
