//! Configuration module for the assignment compiler
//!
//! Compile-time limits live in [`constants`]; user-facing preferences that may
//! be changed per run (environment variables or a TOML file) live in [`runtime`].

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{ConfigError, LexicalPreferences, LoggingPreferences, RuntimePreferences};
