//! The interactive translation shell.
//!
//! Reads one line at a time, dispatches it by command prefix and keeps the
//! session environment between lines.

/// Command parsing and autocomplete.
pub mod command;
mod env;
/// `trf` path handling and file loading.
pub mod file;
mod session;
mod ui;

pub use command::CommandCompleter;
pub use env::{DEFAULT_SOURCE, DEFAULT_TARGET, Environment, SOURCE_KEY, TARGET_KEY};
pub use session::{MAX_TEXT_LENGTH, Shell};
pub use ui::{print_goodbye, print_header};
