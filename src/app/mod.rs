//! Application state: the active mode and résumé, the enriched collection,
//! selection and filtering, and the batch lifecycle that keeps them
//! consistent.

use crate::ai::pipeline::{self, BatchResult};
use crate::ai::Enricher;
use crate::inbox::{MessageStore, RawMessage};
use crate::model::{
    Category, CategoryFilter, EnrichedMessage, Mode, ProcessingStatus, ResumeText,
};

/// The visible subset of a collection under a category filter, in collection
/// order.
pub fn visible<'a>(
    collection: &'a [EnrichedMessage],
    filter: CategoryFilter,
) -> Vec<&'a EnrichedMessage> {
    collection
        .iter()
        .filter(|message| filter.matches(message.category()))
        .collect()
}

/// One batch to execute: the messages and context frozen at the moment the
/// refresh started, tagged with the generation that created it.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    generation: u64,
    mode: Mode,
    resume: Option<ResumeText>,
    messages: Vec<RawMessage>,
}

impl BatchRequest {
    /// Execute the fan-out and settle into an outcome.
    ///
    /// The outcome carries this request's generation so the [`Assistant`] can
    /// recognize and discard a batch that was superseded while in flight.
    pub async fn run(self, enricher: &Enricher) -> BatchOutcome {
        let result =
            pipeline::run_all(enricher, &self.messages, self.mode, self.resume.as_ref()).await;
        BatchOutcome {
            generation: self.generation,
            result,
        }
    }
}

/// A settled batch, ready to be committed via [`Assistant::apply`].
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    generation: u64,
    result: BatchResult,
}

/// Top-level controller. All state lives here explicitly; operations mutate
/// it through `&mut self` so every transition is atomic with respect to
/// readers of the exposed views.
pub struct Assistant {
    store: MessageStore,
    mode: Mode,
    resume: Option<ResumeText>,
    collection: Vec<EnrichedMessage>,
    status: ProcessingStatus,
    filter: CategoryFilter,
    selected: Option<String>,
    generation: u64,
}

impl Assistant {
    pub fn new(store: MessageStore) -> Self {
        Self {
            store,
            mode: Mode::General,
            resume: None,
            collection: Vec::new(),
            status: ProcessingStatus::Idle,
            filter: CategoryFilter::All,
            selected: None,
            generation: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> ProcessingStatus {
        self.status
    }

    pub fn resume(&self) -> Option<&ResumeText> {
        self.resume.as_ref()
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// The closed category set of the active mode.
    pub fn categories(&self) -> &'static [Category] {
        self.mode.categories()
    }

    /// The enriched collection under the current filter, in collection order.
    pub fn visible(&self) -> Vec<&EnrichedMessage> {
        visible(&self.collection, self.filter)
    }

    /// The focused message, if any.
    pub fn focused(&self) -> Option<&EnrichedMessage> {
        let id = self.selected.as_deref()?;
        self.collection.iter().find(|message| message.id() == id)
    }

    /// Switch the active mode. Resets the category filter and starts a fresh
    /// batch; returns `None` when the new state is blocked (job-search mode
    /// with no résumé yet).
    ///
    /// A stored résumé survives mode switches; the general pipeline simply
    /// ignores it.
    pub fn set_mode(&mut self, mode: Mode) -> Option<BatchRequest> {
        self.mode = mode;
        self.filter = CategoryFilter::All;
        self.begin_refresh()
    }

    /// Supply (or replace) the résumé. Resets the category filter and starts
    /// a fresh batch for the active mode.
    pub fn set_resume(&mut self, resume: ResumeText) -> Option<BatchRequest> {
        self.resume = Some(resume);
        self.filter = CategoryFilter::All;
        self.begin_refresh()
    }

    /// Re-run the identical batch. Keeps the current filter.
    pub fn retry(&mut self) -> Option<BatchRequest> {
        self.begin_refresh()
    }

    /// Discard previous results and stage a new batch.
    ///
    /// The generation advances even on the blocked path so that a batch
    /// still in flight from before the change can no longer commit.
    fn begin_refresh(&mut self) -> Option<BatchRequest> {
        self.collection.clear();
        self.selected = None;
        self.generation += 1;

        if self.mode == Mode::JobSearch && self.resume.is_none() {
            self.status = ProcessingStatus::Idle;
            return None;
        }

        self.status = ProcessingStatus::Processing;
        Some(BatchRequest {
            generation: self.generation,
            mode: self.mode,
            resume: self.resume.clone(),
            messages: self.store.for_mode(self.mode).to_vec(),
        })
    }

    /// Commit a settled batch in one state transition: collection, status,
    /// and focus together. An outcome from a superseded batch is discarded.
    pub fn apply(&mut self, outcome: BatchOutcome) {
        if outcome.generation != self.generation {
            tracing::debug!(
                "Discarding stale batch outcome (generation {}, current {})",
                outcome.generation,
                self.generation
            );
            return;
        }

        self.collection = outcome.result.collection;
        self.status = outcome.result.status;
        let first = visible(&self.collection, self.filter)
            .first()
            .map(|m| m.id().to_string());
        self.selected = first;
    }

    /// Change the category filter and reconcile the selection against the
    /// new visible set in the same step.
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.reselect();
    }

    /// Focus a message by id. The caller is responsible for passing an id
    /// from the current visible set; no validation is performed.
    pub fn select_message(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    /// Keep the selection when it is still visible; otherwise fall back to
    /// the first visible message, or clear when the view is empty.
    fn reselect(&mut self) {
        let visible = visible(&self.collection, self.filter);
        let still_visible = self
            .selected
            .as_deref()
            .is_some_and(|id| visible.iter().any(|m| m.id() == id));

        if !still_visible {
            let fallback = visible.first().map(|m| m.id().to_string());
            self.selected = fallback;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Enrichment, GeneralCategory, ModeDetails, Priority};
    use chrono::Utc;

    fn raw(id: &str) -> RawMessage {
        RawMessage {
            id: id.into(),
            sender: format!("Sender {id} <s{id}@example.com>"),
            subject: format!("Subject {id}"),
            body: "Body".into(),
            timestamp: Utc::now(),
        }
    }

    fn enriched(id: &str, category: GeneralCategory) -> EnrichedMessage {
        EnrichedMessage {
            message: raw(id),
            enrichment: Enrichment {
                summary: format!("Summary {id}"),
                category: Category::General(category),
                priority: Priority::Medium,
                tasks: vec![],
                suggested_actions: vec![],
                details: ModeDetails::General { event: None },
            },
        }
    }

    fn outcome(generation: u64, collection: Vec<EnrichedMessage>) -> BatchOutcome {
        let status = if collection.is_empty() {
            ProcessingStatus::Error
        } else {
            ProcessingStatus::Done
        };
        BatchOutcome {
            generation,
            result: BatchResult { collection, status },
        }
    }

    fn assistant() -> Assistant {
        Assistant::new(MessageStore::new(
            vec![raw("1"), raw("2"), raw("3")],
            vec![raw("job-1"), raw("job-2")],
        ))
    }

    /// Six-message inbox where only message 3 is a newsletter.
    fn newsletter_collection() -> Vec<EnrichedMessage> {
        vec![
            enriched("1", GeneralCategory::Work),
            enriched("2", GeneralCategory::Personal),
            enriched("3", GeneralCategory::Newsletters),
            enriched("4", GeneralCategory::Personal),
            enriched("5", GeneralCategory::Work),
            enriched("6", GeneralCategory::Work),
        ]
    }

    #[test]
    fn test_initial_state() {
        let assistant = assistant();
        assert_eq!(assistant.mode(), Mode::General);
        assert_eq!(assistant.status(), ProcessingStatus::Idle);
        assert_eq!(assistant.filter(), CategoryFilter::All);
        assert!(assistant.focused().is_none());
        assert!(assistant.visible().is_empty());
    }

    #[test]
    fn test_general_refresh_yields_processing_request() {
        let mut assistant = assistant();
        let request = assistant.set_mode(Mode::General).expect("not blocked");
        assert_eq!(assistant.status(), ProcessingStatus::Processing);
        assert_eq!(request.mode, Mode::General);
        assert_eq!(request.messages.len(), 3);
        assert!(request.resume.is_none());
    }

    #[test]
    fn test_job_search_without_resume_is_blocked() {
        let mut assistant = assistant();
        assert!(assistant.set_mode(Mode::JobSearch).is_none());
        assert_eq!(assistant.status(), ProcessingStatus::Idle);
        assert!(assistant.visible().is_empty());

        // retry while blocked stays blocked
        assert!(assistant.retry().is_none());
        assert_eq!(assistant.status(), ProcessingStatus::Idle);
    }

    #[test]
    fn test_set_resume_unblocks_job_search() {
        let mut assistant = assistant();
        assert!(assistant.set_mode(Mode::JobSearch).is_none());

        let resume = ResumeText::new("Rust engineer, five years.").unwrap();
        let request = assistant.set_resume(resume).expect("unblocked");
        assert_eq!(assistant.status(), ProcessingStatus::Processing);
        assert_eq!(request.mode, Mode::JobSearch);
        assert_eq!(request.messages.len(), 2);
        assert!(request.resume.is_some());
    }

    #[test]
    fn test_resume_survives_mode_switches() {
        let mut assistant = assistant();
        let resume = ResumeText::new("Rust engineer.").unwrap();
        assistant.set_resume(resume).expect("general mode runs");

        assistant.set_mode(Mode::General).expect("not blocked");
        let request = assistant
            .set_mode(Mode::JobSearch)
            .expect("résumé was retained");
        assert!(request.resume.is_some());
    }

    #[test]
    fn test_general_mode_request_ignores_stored_resume_messages() {
        let mut assistant = assistant();
        let resume = ResumeText::new("Rust engineer.").unwrap();
        let request = assistant.set_resume(resume).expect("general mode runs");
        assert_eq!(request.mode, Mode::General);
        assert_eq!(request.messages[0].id, "1");
    }

    #[test]
    fn test_apply_commits_collection_status_and_focus() {
        let mut assistant = assistant();
        let request = assistant.set_mode(Mode::General).unwrap();

        assistant.apply(outcome(
            request.generation,
            vec![
                enriched("1", GeneralCategory::Work),
                enriched("2", GeneralCategory::Personal),
            ],
        ));

        assert_eq!(assistant.status(), ProcessingStatus::Done);
        assert_eq!(assistant.visible().len(), 2);
        assert_eq!(assistant.focused().unwrap().id(), "1");
    }

    #[test]
    fn test_apply_empty_batch_is_error_with_no_focus() {
        let mut assistant = assistant();
        let request = assistant.set_mode(Mode::General).unwrap();

        assistant.apply(outcome(request.generation, vec![]));

        assert_eq!(assistant.status(), ProcessingStatus::Error);
        assert!(assistant.focused().is_none());
    }

    #[test]
    fn test_stale_batch_outcome_is_discarded() {
        let mut assistant = assistant();
        let stale = assistant.set_mode(Mode::General).unwrap();
        let current = assistant.retry().unwrap();

        // The newer batch settles first and commits.
        assistant.apply(outcome(
            current.generation,
            vec![enriched("2", GeneralCategory::Personal)],
        ));
        // The abandoned batch settles late; it must not overwrite.
        assistant.apply(outcome(
            stale.generation,
            vec![enriched("1", GeneralCategory::Work)],
        ));

        assert_eq!(assistant.visible().len(), 1);
        assert_eq!(assistant.focused().unwrap().id(), "2");
    }

    #[test]
    fn test_blocked_refresh_also_invalidates_inflight_batch() {
        let mut assistant = assistant();
        let stale = assistant.set_mode(Mode::General).unwrap();

        // Switching to blocked job-search advances the generation.
        assert!(assistant.set_mode(Mode::JobSearch).is_none());
        assistant.apply(outcome(
            stale.generation,
            vec![enriched("1", GeneralCategory::Work)],
        ));

        assert_eq!(assistant.status(), ProcessingStatus::Idle);
        assert!(assistant.visible().is_empty());
    }

    #[test]
    fn test_select_category_narrows_and_refocuses() {
        let mut assistant = assistant();
        let request = assistant.set_mode(Mode::General).unwrap();
        assistant.apply(outcome(request.generation, newsletter_collection()));
        assert_eq!(assistant.focused().unwrap().id(), "1");

        assistant.select_category(CategoryFilter::Only(Category::General(
            GeneralCategory::Newsletters,
        )));

        let visible = assistant.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id(), "3");
        assert_eq!(assistant.focused().unwrap().id(), "3");
    }

    #[test]
    fn test_select_category_with_no_matches_clears_focus() {
        let mut assistant = assistant();
        let request = assistant.set_mode(Mode::General).unwrap();
        assistant.apply(outcome(request.generation, newsletter_collection()));

        assistant.select_category(CategoryFilter::Only(Category::General(
            GeneralCategory::Urgent,
        )));

        assert!(assistant.visible().is_empty());
        assert!(assistant.focused().is_none());
    }

    #[test]
    fn test_select_category_keeps_still_visible_selection() {
        let mut assistant = assistant();
        let request = assistant.set_mode(Mode::General).unwrap();
        assistant.apply(outcome(request.generation, newsletter_collection()));

        assistant.select_message("5");
        assistant.select_category(CategoryFilter::Only(Category::General(
            GeneralCategory::Work,
        )));

        assert_eq!(assistant.focused().unwrap().id(), "5");
    }

    #[test]
    fn test_retry_keeps_filter_and_reconciles_focus_on_commit() {
        let mut assistant = assistant();
        let request = assistant.set_mode(Mode::General).unwrap();
        assistant.apply(outcome(request.generation, newsletter_collection()));

        let work = CategoryFilter::Only(Category::General(GeneralCategory::Work));
        assistant.select_category(work);
        let request = assistant.retry().unwrap();

        assert_eq!(assistant.filter(), work);
        assert_eq!(assistant.status(), ProcessingStatus::Processing);
        assert!(assistant.visible().is_empty());

        assistant.apply(outcome(request.generation, newsletter_collection()));
        // Focus lands on the first element of the filtered view.
        assert_eq!(assistant.focused().unwrap().id(), "1");
        assert_eq!(assistant.visible().len(), 3);
    }

    #[test]
    fn test_mode_switch_resets_filter() {
        let mut assistant = assistant();
        let request = assistant.set_mode(Mode::General).unwrap();
        assistant.apply(outcome(request.generation, newsletter_collection()));
        assistant.select_category(CategoryFilter::Only(Category::General(
            GeneralCategory::Work,
        )));

        assistant.set_mode(Mode::General).unwrap();
        assert_eq!(assistant.filter(), CategoryFilter::All);
    }

    #[test]
    fn test_select_message_is_unconditional() {
        let mut assistant = assistant();
        let request = assistant.set_mode(Mode::General).unwrap();
        assistant.apply(outcome(request.generation, newsletter_collection()));

        assistant.select_message("no-such-id");
        assert!(assistant.focused().is_none());

        assistant.select_message("4");
        assert_eq!(assistant.focused().unwrap().id(), "4");
    }

    #[test]
    fn test_visible_filter_is_idempotent() {
        let collection = newsletter_collection();
        let filter = CategoryFilter::Only(Category::General(GeneralCategory::Work));

        let once: Vec<EnrichedMessage> = visible(&collection, filter)
            .into_iter()
            .cloned()
            .collect();
        let twice = visible(&once, filter);

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice) {
            assert_eq!(a.id(), b.id());
        }
    }

    #[test]
    fn test_visible_all_returns_collection_unchanged() {
        let collection = newsletter_collection();
        let all = visible(&collection, CategoryFilter::All);
        assert_eq!(all.len(), collection.len());
        for (a, b) in collection.iter().zip(all) {
            assert_eq!(a.id(), b.id());
        }
    }
}
