mod message;
mod samples;

pub use message::RawMessage;
pub use samples::{general_inbox, job_search_inbox};

use crate::model::Mode;

/// The fixed input collections, one per mode. Loaded once; never mutated.
#[derive(Debug, Clone)]
pub struct MessageStore {
    general: Vec<RawMessage>,
    job_search: Vec<RawMessage>,
}

impl MessageStore {
    pub fn new(general: Vec<RawMessage>, job_search: Vec<RawMessage>) -> Self {
        Self { general, job_search }
    }

    /// The built-in sample inboxes.
    pub fn samples() -> Self {
        Self::new(general_inbox(), job_search_inbox())
    }

    pub fn for_mode(&self, mode: Mode) -> &[RawMessage] {
        match mode {
            Mode::General => &self.general,
            Mode::JobSearch => &self.job_search,
        }
    }
}
