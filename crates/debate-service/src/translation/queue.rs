//! Bounded in-process translation queue

use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};

use crate::services::{ServiceError, ServiceResult};

/// Translate one debate into one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationJob {
    pub debate_id: i64,
    pub source_language: String,
    pub target_language: String,
}

/// Producer side of the translation queue
#[derive(Debug, Clone)]
pub struct TranslationQueue {
    sender: mpsc::Sender<TranslationJob>,
    languages: Arc<[String]>,
}

impl TranslationQueue {
    /// Create the queue; the receiver goes to a [`TranslationWorker`](super::TranslationWorker)
    pub fn new(
        capacity: usize,
        languages: Vec<String>,
    ) -> (Self, mpsc::Receiver<TranslationJob>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let queue = Self {
            sender,
            languages: languages.into(),
        };
        (queue, receiver)
    }

    /// Supported languages
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Whether `language` is one of the supported languages
    pub fn supports(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    /// Enqueue a job without waiting
    pub fn enqueue(&self, job: TranslationJob) -> ServiceResult<()> {
        self.sender.try_send(job).map_err(|e| match e {
            TrySendError::Full(job) => ServiceError::internal(format!(
                "translation queue is full, dropped debate {} -> {}",
                job.debate_id, job.target_language
            )),
            TrySendError::Closed(_) => ServiceError::internal("translation queue is closed"),
        })
    }

    /// Enqueue a job for every supported language except the source.
    /// Returns the number of jobs accepted.
    pub fn enqueue_all(&self, debate_id: i64, source_language: &str) -> usize {
        let mut queued = 0;
        for target in self.languages.iter().filter(|l| *l != source_language) {
            let job = TranslationJob {
                debate_id,
                source_language: source_language.to_string(),
                target_language: target.clone(),
            };
            match self.enqueue(job) {
                Ok(()) => queued += 1,
                Err(e) => warn!(debate_id, target = %target, error = %e, "Translation job dropped"),
            }
        }
        debug!(debate_id, queued, "Translation jobs enqueued");
        queued
    }
}
