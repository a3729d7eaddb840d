use anyhow::Result;
use std::future::Future;

/// A single translation request, built fresh for every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    /// Requested source code, possibly `auto`.
    pub source: String,
    pub target: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// What the engine actually did with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResponse {
    /// Source code used by the engine; the detected language when `auto` was requested.
    pub source: String,
    pub target: String,
    pub text: String,
}

/// A service able to translate text between two languages.
pub trait TranslationEngine {
    fn translate(
        &self,
        request: &TranslationRequest,
    ) -> impl Future<Output = Result<TranslationResponse>>;
}
