use std::borrow::Cow;
use std::fs::File;

use crate::error::ShellError;
use crate::input::read_chunked;

/// Destination meaning "print the translation instead of writing a file".
pub const STDOUT_SENTINEL: &str = r"\stdout";

const TRANSLATED_PREFIX: &str = "translated-";

/// Source and destination of a `trf` command.
#[derive(Debug, PartialEq, Eq)]
pub struct FileTarget<'a> {
    pub source: &'a str,
    pub destination: Cow<'a, str>,
}

impl<'a> FileTarget<'a> {
    /// Splits the `trf` arguments on the first space.
    ///
    /// A missing or empty destination is derived from the source path.
    pub fn parse(args: &'a str) -> Self {
        match args.split_once(' ') {
            Some((source, destination)) if !destination.is_empty() => Self {
                source,
                destination: Cow::Borrowed(destination),
            },
            Some((source, _)) => Self::derived(source),
            None => Self::derived(args),
        }
    }

    fn derived(source: &'a str) -> Self {
        Self {
            source,
            destination: Cow::Owned(derive_destination(source)),
        }
    }

    pub fn to_stdout(&self) -> bool {
        self.destination == STDOUT_SENTINEL
    }
}

/// `dir/name` becomes `dir/translated-name`; a bare name just gets the prefix.
pub fn derive_destination(source: &str) -> String {
    let (dir, name) = source
        .rfind('/')
        .map_or(("", source), |idx| source.split_at(idx + 1));
    format!("{dir}{TRANSLATED_PREFIX}{name}")
}

/// Loads a whole file as UTF-8 text using chunked reads.
///
/// The file handle is closed before this returns, whatever the outcome.
pub fn load_text(path: &str) -> Result<String, ShellError> {
    let mut file = File::open(path).map_err(|source| ShellError::OpenInput {
        path: path.to_string(),
        source,
    })?;

    let bytes = read_chunked(&mut file).map_err(|source| ShellError::ReadInput {
        path: path.to_string(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|_| ShellError::InputEncoding {
        path: path.to_string(),
    })
}
