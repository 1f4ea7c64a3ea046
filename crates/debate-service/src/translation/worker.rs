//! Queue consumer that translates and stores debates

use std::sync::Arc;

use debate_core::entities::TranslatedDebate;
use debate_core::error::DomainError;
use debate_core::traits::{RepoResult, TranslationRepository, Translator};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use super::queue::TranslationJob;

/// Drains the translation queue one job at a time
pub struct TranslationWorker {
    receiver: mpsc::Receiver<TranslationJob>,
    translator: Arc<dyn Translator>,
    translations: Arc<dyn TranslationRepository>,
}

impl TranslationWorker {
    pub fn new(
        receiver: mpsc::Receiver<TranslationJob>,
        translator: Arc<dyn Translator>,
        translations: Arc<dyn TranslationRepository>,
    ) -> Self {
        Self {
            receiver,
            translator,
            translations,
        }
    }

    /// Run on the tokio runtime until every queue handle is dropped
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    pub async fn run(mut self) {
        info!(translator = self.translator.name(), "Translation worker started");

        while let Some(job) = self.receiver.recv().await {
            if let Err(e) = self.process(&job).await {
                warn!(
                    debate_id = job.debate_id,
                    target = %job.target_language,
                    error = %e,
                    "Translation failed; source text stays in use"
                );
            }
        }

        info!("Translation worker stopped");
    }

    #[instrument(skip(self), fields(translator = self.translator.name()))]
    async fn process(&self, job: &TranslationJob) -> RepoResult<TranslatedDebate> {
        let source = self
            .translations
            .find_source(job.debate_id)
            .await?
            .ok_or(DomainError::DebateNotFound(job.debate_id))?;

        let source_language = Some(job.source_language.as_str());
        let title = self
            .translator
            .translate(&source.title, source_language, &job.target_language)
            .await?;
        let content = self
            .translator
            .translate(&source.content, source_language, &job.target_language)
            .await?;

        let stored = self
            .translations
            .upsert(job.debate_id, &job.target_language, &title, &content)
            .await?;

        info!(
            debate_id = job.debate_id,
            language = %job.target_language,
            "Debate translated"
        );

        Ok(stored)
    }
}
