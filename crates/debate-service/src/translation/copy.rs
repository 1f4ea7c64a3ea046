//! Copy-through translator used when no endpoint is configured

use async_trait::async_trait;
use debate_core::traits::{RepoResult, Translator};

/// Stores the source text unchanged under every target language
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyTranslator;

#[async_trait]
impl Translator for CopyTranslator {
    fn name(&self) -> &'static str {
        "copy"
    }

    async fn translate(
        &self,
        text: &str,
        _source: Option<&str>,
        _target: &str,
    ) -> RepoResult<String> {
        Ok(text.to_string())
    }
}
