//! Errors reported by shell commands.
//!
//! None of these end the session: the dispatcher prints them and reads the
//! next line.

use std::io;
use thiserror::Error;

use crate::shell::MAX_TEXT_LENGTH;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Invalid key=value pair: {0}")]
    MalformedPair(String),

    #[error("Invalid input")]
    UnknownCommand,

    #[error("Expected valid language code for `source`, found '{0}'")]
    InvalidSource(String),

    #[error("Expected valid language code for `target`, found '{0}'")]
    InvalidTarget(String),

    #[error(
        "Maximum text length is {max}, received text has length {0}",
        max = MAX_TEXT_LENGTH
    )]
    TextTooLong(usize),

    #[error("Encountered error during translation: {0:#}")]
    Engine(anyhow::Error),

    #[error("Error opening input file '{path}': {source}")]
    OpenInput { path: String, source: io::Error },

    #[error("Error reading input file '{path}': {source}")]
    ReadInput { path: String, source: io::Error },

    #[error("Input file '{path}' is not valid UTF-8")]
    InputEncoding { path: String },

    #[error("Error when writing file '{path}': {source}")]
    WriteOutput { path: String, source: io::Error },

    #[error("Error occurred when reading input: {0:#}")]
    LineInput(anyhow::Error),

    #[error("Failed to write to the console: {0}")]
    Console(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_too_long_message_names_length() {
        let message = ShellError::TextTooLong(5001).to_string();
        assert_eq!(
            message,
            "Maximum text length is 5000, received text has length 5001"
        );
    }

    #[test]
    fn test_engine_error_includes_context_chain() {
        let cause = anyhow::anyhow!("connection refused").context("Failed to connect");
        let message = ShellError::Engine(cause).to_string();
        assert!(message.contains("Failed to connect"));
        assert!(message.contains("connection refused"));
    }
}
