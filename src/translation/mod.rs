mod client;
mod engine;
mod language;

pub use client::{DEFAULT_ENDPOINT, GoogleTranslateClient};
pub use engine::{TranslationEngine, TranslationRequest, TranslationResponse};
pub use language::{
    AUTO_DETECT, LANGUAGE_CODES, is_language_code, language_name, print_languages,
    validate_language,
};
