//! Terminal-facing pieces of the `staple` binary.

pub mod print;
