use std::collections::HashMap;

use crate::error::ShellError;
use crate::translation::{AUTO_DETECT, is_language_code};

/// Key holding the source language code.
pub const SOURCE_KEY: &str = "source";
/// Key holding the target language code.
pub const TARGET_KEY: &str = "target";

pub const DEFAULT_SOURCE: &str = AUTO_DETECT;
pub const DEFAULT_TARGET: &str = "en";

/// Session-scoped key/value settings.
///
/// Any key may be set; `source` and `target` are read by the translation commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Creates an environment seeded with the given language pair.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let mut vars = HashMap::new();
        vars.insert(SOURCE_KEY.to_string(), source.into());
        vars.insert(TARGET_KEY.to_string(), target.into());
        Self { vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Applies one `key=value` token.
    ///
    /// The token is split on its first `=`, so values may contain `=`.
    pub fn set_pair(&mut self, pair: &str) -> Result<(), ShellError> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| ShellError::MalformedPair(pair.to_string()))?;
        self.set(key, value);
        Ok(())
    }

    pub fn source(&self) -> &str {
        self.get(SOURCE_KEY).unwrap_or_default()
    }

    pub fn target(&self) -> &str {
        self.get(TARGET_KEY).unwrap_or_default()
    }

    /// Checks that the configured language pair can be sent to the engine.
    ///
    /// `source` may be `auto`; `target` must be a registry code.
    pub fn validate(&self) -> Result<(), ShellError> {
        let source = self.source();
        if source != AUTO_DETECT && !is_language_code(source) {
            return Err(ShellError::InvalidSource(source.to_string()));
        }

        let target = self.target();
        if !is_language_code(target) {
            return Err(ShellError::InvalidTarget(target.to_string()));
        }

        Ok(())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE, DEFAULT_TARGET)
    }
}
