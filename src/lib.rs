//! # gtrans - Interactive Translation Shell
//!
//! `gtrans` is a line-oriented shell for translating text and whole files
//! through Google Translate. The session keeps a small key/value environment;
//! `source` and `target` pick the language pair.
//!
//! ## Commands
//!
//! ```text
//! > set source=es target=en
//! > get target
//! = en
//! > trt Hola mundo
//! es [spanish] -> en [english]
//! Hello world
//! > trf notes/today.txt
//! > trf notes/today.txt \stdout
//! > help
//! ```
//!
//! `trf` without a destination writes `translated-<name>` next to the source
//! file. End of input (Esc or Ctrl+C at the prompt, or a closed pipe) ends the
//! session.
//!
//! ## Configuration
//!
//! Initial settings may be given in `~/.config/gtrans/config.toml`:
//!
//! ```toml
//! [gtrans]
//! source = "auto"
//! target = "ja"
//! endpoint = "https://translate.googleapis.com"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Startup configuration file handling.
pub mod config;

/// Errors reported by shell commands.
pub mod error;

/// File system utilities.
pub mod fs;

/// Line input and chunked file reading.
pub mod input;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// The interactive shell: environment, dispatch and command handlers.
pub mod shell;

/// Translation engine abstraction, Google client and language registry.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
