//! Machine translation port

use async_trait::async_trait;

use super::repositories::RepoResult;

/// Translates text between languages
#[async_trait]
pub trait Translator: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Translate `text` into `target`; `source` is a hint and may be ignored
    async fn translate(&self, text: &str, source: Option<&str>, target: &str) -> RepoResult<String>;
}
