//! Fan-out orchestration: every message of the active collection is enriched
//! concurrently and aggregated back in input order.

use futures::future;

use super::enrich::Enricher;
use crate::inbox::RawMessage;
use crate::model::{EnrichedMessage, Mode, ProcessingStatus, ResumeText};

/// Result of one settled enrichment batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub collection: Vec<EnrichedMessage>,
    pub status: ProcessingStatus,
}

impl BatchResult {
    fn idle() -> Self {
        Self {
            collection: Vec::new(),
            status: ProcessingStatus::Idle,
        }
    }
}

/// Enrich every message of a collection.
///
/// All per-message calls are dispatched without awaiting one another, then
/// the batch suspends once until every call settles. Aggregation preserves
/// the input order of `messages`; completion order never reorders the output.
/// Failed messages are dropped from the collection silently, with the id and
/// cause retained in the log.
///
/// Job-search mode without a résumé returns an empty idle batch without
/// contacting the service at all.
pub async fn run_all(
    enricher: &Enricher,
    messages: &[RawMessage],
    mode: Mode,
    resume: Option<&ResumeText>,
) -> BatchResult {
    if mode == Mode::JobSearch && resume.is_none() {
        tracing::debug!("job-search mode without a résumé, skipping enrichment");
        return BatchResult::idle();
    }

    tracing::info!("Enriching {} messages in {} mode", messages.len(), mode);

    let results = future::join_all(
        messages
            .iter()
            .map(|message| enricher.enrich(message, mode, resume)),
    )
    .await;

    let mut collection = Vec::with_capacity(messages.len());
    for (message, result) in messages.iter().zip(results) {
        match result {
            Ok(enrichment) => collection.push(EnrichedMessage {
                message: message.clone(),
                enrichment,
            }),
            Err(failure) => {
                tracing::warn!(
                    "Dropping message {} from the batch: {}",
                    failure.message_id,
                    failure.cause
                );
            }
        }
    }

    let status = if collection.is_empty() {
        ProcessingStatus::Error
    } else {
        ProcessingStatus::Done
    };

    tracing::info!(
        "Batch complete: {}/{} messages enriched",
        collection.len(),
        messages.len()
    );

    BatchResult { collection, status }
}
