//! Background translation of newly written debates
//!
//! Writing a debate enqueues one job per supported language. A single worker
//! drains the queue, translating the source title/content through a
//! [`Translator`](debate_core::Translator) and storing the result.

mod copy;
mod http;
mod queue;
mod worker;

pub use copy::CopyTranslator;
pub use http::HttpTranslator;
pub use queue::{TranslationJob, TranslationQueue};
pub use worker::TranslationWorker;
