//! DeepL-compatible HTTP translator

use std::time::Duration;

use async_trait::async_trait;
use debate_core::error::DomainError;
use debate_core::traits::{RepoResult, Translator};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: [&'a str; 1],
    target_lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

/// Calls a DeepL-style `/v2/translate` endpoint
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl HttpTranslator {
    /// Build a translator for `url`
    ///
    /// # Errors
    /// Returns `DomainError::TranslationError` if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| DomainError::TranslationError(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            api_key,
        })
    }
}

/// DeepL language codes are upper case
fn deepl_lang(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[async_trait]
impl Translator for HttpTranslator {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn translate(&self, text: &str, source: Option<&str>, target: &str) -> RepoResult<String> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let body = TranslateRequest {
            text: [text],
            target_lang: deepl_lang(target),
            source_lang: source.map(deepl_lang),
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("DeepL-Auth-Key {key}"));
        }

        let response = request
            .send()
            .await
            .map_err(|e| DomainError::TranslationError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(DomainError::TranslationError(format!(
                "translator returned {status}: {detail}"
            )));
        }

        let parsed: TranslateResponse = response
            .json()
            .await
            .map_err(|e| DomainError::TranslationError(e.to_string()))?;

        debug!(target_lang = %target, "Text translated");

        parsed
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or_else(|| DomainError::TranslationError("empty translation response".to_string()))
    }
}
