//! gitsound CLI library.
//!
//! Command implementations live here so they can be exercised by tests;
//! the binary in `main.rs` only parses arguments and dispatches.

pub mod cli_args;
pub mod commands;
