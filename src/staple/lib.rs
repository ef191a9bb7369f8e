//! # Staple Architecture
//!
//! Staple generates memorable passphrases ("Correct-Horse-Battery-7") from
//! wordlists and tells you how strong they are. Like any library-first CLI, the
//! core knows nothing about terminals; the `staple` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, cli/print.rs)                 │
//! │  - Parses arguments, loads wordlist files, prints results   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade owning the option store, wordlist cache and  │
//! │    generator; returns structured `CmdResult`s               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - generate, strength, config, wordlists                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - random: unbiased sampling over a secure source           │
//! │  - wordlist: parsing and the in-memory wordlist cache       │
//! │  - generator: words → passphrase                            │
//! │  - entropy: bits and equivalent-strength passwords          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Randomness
//!
//! All sampling goes through [`random::UniformSampler`], which uses rejection
//! sampling so that no word, separator or digit is favoured. Production code
//! uses [`random::OsRandom`]; if the OS cannot supply secure randomness,
//! generation fails with [`error::StapleError::NoSecureRandomness`] rather
//! than degrading.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each operation
//! - [`random`]: `RandomSource` trait, `OsRandom`, `UniformSampler`
//! - [`wordlist`]: `Wordlist`, `WordlistStore`, the built-in list
//! - [`generator`]: `PassphraseGenerator`, `PassphraseResult`
//! - [`entropy`]: entropy bits, alphabets, strength reports
//! - [`config`]: `GenerationConfig` and lenient option parsing
//! - [`store`]: option persistence (`ConfigStore`)
//! - [`loader`]: reading wordlist files
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod loader;
pub mod random;
pub mod store;
pub mod wordlist;
