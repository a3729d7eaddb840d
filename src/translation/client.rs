use anyhow::{Context, Result, bail};
use reqwest::{Client, Url};
use serde_json::Value;

use super::engine::{TranslationEngine, TranslationRequest, TranslationResponse};

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

/// Client for the public Google Translate web endpoint.
pub struct GoogleTranslateClient {
    client: Client,
    endpoint: String,
}

impl GoogleTranslateClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    fn request_url(&self, request: &TranslationRequest) -> Result<Url> {
        let base = format!(
            "{}/translate_a/single",
            self.endpoint.trim_end_matches('/')
        );

        Url::parse_with_params(
            &base,
            &[
                ("client", "gtx"),
                ("sl", request.source.as_str()),
                ("tl", request.target.as_str()),
                ("dt", "t"),
                ("q", request.text.as_str()),
            ],
        )
        .with_context(|| format!("Invalid translation endpoint: {}", self.endpoint))
    }
}

impl TranslationEngine for GoogleTranslateClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<TranslationResponse> {
        let url = self.request_url(request)?;

        let response = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .with_context(|| format!("Failed to connect to translation endpoint: {}", self.endpoint))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Translation request failed with status {status}: {body}");
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to decode translation response")?;

        parse_response(&body, request)
    }
}

/// Extracts the translation from the service's nested-array payload.
///
/// The payload looks like `[[["Hallo","Hello",...],...],null,"en",...]`: every
/// segment's first element is a piece of the translation and the third
/// top-level element is the detected source language.
fn parse_response(body: &Value, request: &TranslationRequest) -> Result<TranslationResponse> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .context("Unexpected translation response: missing segments")?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    let source = body
        .get(2)
        .and_then(Value::as_str)
        .map_or_else(|| request.source.clone(), str::to_string);

    Ok(TranslationResponse {
        source,
        target: request.target.clone(),
        text,
    })
}
