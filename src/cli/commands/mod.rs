//! Subcommand implementations.

/// Interactive shell command handler.
pub mod shell;
