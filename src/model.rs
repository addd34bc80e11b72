use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::inbox::RawMessage;

/// Which enrichment pipeline is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    General,
    JobSearch,
}

impl Mode {
    /// The closed category set messages of this mode are classified into.
    pub fn categories(self) -> &'static [Category] {
        match self {
            Mode::General => &GENERAL_CATEGORIES,
            Mode::JobSearch => &JOB_CATEGORIES,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::General => write!(f, "general"),
            Mode::JobSearch => write!(f, "job-search"),
        }
    }
}

/// Message priority assigned by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Categories for general (assistant) mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneralCategory {
    Work,
    Personal,
    Promotions,
    Newsletters,
    Urgent,
}

impl GeneralCategory {
    /// Map the category string produced by the model onto the closed set.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Work" => Some(Self::Work),
            "Personal" => Some(Self::Personal),
            "Promotions" => Some(Self::Promotions),
            "Newsletters" => Some(Self::Newsletters),
            "Urgent" => Some(Self::Urgent),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Promotions => "Promotions",
            Self::Newsletters => "Newsletters",
            Self::Urgent => "Urgent",
        }
    }
}

/// Categories for job-search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobCategory {
    JobAlerts,
    RecruiterOutreach,
    ApplicationUpdates,
    Networking,
    Other,
}

impl JobCategory {
    /// Map the category string produced by the model onto the closed set.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Job Alerts" => Some(Self::JobAlerts),
            "Recruiter Outreach" => Some(Self::RecruiterOutreach),
            "Application Updates" => Some(Self::ApplicationUpdates),
            "Networking" => Some(Self::Networking),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::JobAlerts => "Job Alerts",
            Self::RecruiterOutreach => "Recruiter Outreach",
            Self::ApplicationUpdates => "Application Updates",
            Self::Networking => "Networking",
            Self::Other => "Other",
        }
    }
}

/// A message category, tagged by the mode that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    General(GeneralCategory),
    Job(JobCategory),
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::General(c) => c.label(),
            Category::Job(c) => c.label(),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

static GENERAL_CATEGORIES: [Category; 5] = [
    Category::General(GeneralCategory::Work),
    Category::General(GeneralCategory::Personal),
    Category::General(GeneralCategory::Promotions),
    Category::General(GeneralCategory::Newsletters),
    Category::General(GeneralCategory::Urgent),
];

static JOB_CATEGORIES: [Category; 5] = [
    Category::Job(JobCategory::JobAlerts),
    Category::Job(JobCategory::RecruiterOutreach),
    Category::Job(JobCategory::ApplicationUpdates),
    Category::Job(JobCategory::Networking),
    Category::Job(JobCategory::Other),
];

/// Sidebar filter. "All" is a filter, never a category a message carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

/// Calendar event extracted from a message (general mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetails {
    pub title: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM, 24-hour clock
    pub time: String,
    pub description: String,
}

/// Where a job application stands, as classified by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    #[serde(rename = "Interview Request")]
    InterviewRequest,
    Rejection,
    Offer,
    #[serde(rename = "Needs Action")]
    NeedsAction,
}

/// Scheduled interview extracted from a message (job-search mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewDetails {
    pub title: String,
    /// YYYY-MM-DD
    pub date: String,
    /// HH:MM, 24-hour clock
    pub time: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Job-search enrichment fields. Each is present only when the message
/// content warrants it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_status: Option<ApplicationStatus>,
    /// 0-100 match against the supplied résumé.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub good_fit: Option<bool>,
    #[serde(default)]
    pub tailored_resume_points: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter_draft: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview: Option<InterviewDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_research: Option<String>,
}

/// Mode-specific portion of an enrichment. The tagged variants keep
/// general-mode and job-search fields from ever appearing on the same result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeDetails {
    General { event: Option<EventDetails> },
    Job(JobDetails),
}

/// Normalized output of one successful enrichment call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    pub summary: String,
    pub category: Category,
    pub priority: Priority,
    /// Actionable to-do items. Never absent; empty when the message has none.
    pub tasks: Vec<String>,
    /// One-click follow-ups. Never absent; empty when the message has none.
    pub suggested_actions: Vec<String>,
    pub details: ModeDetails,
}

/// A raw message paired with its enrichment. Exists only after a successful
/// enrichment call; failed messages are dropped from the collection entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedMessage {
    pub message: RawMessage,
    pub enrichment: Enrichment,
}

impl EnrichedMessage {
    pub fn id(&self) -> &str {
        &self.message.id
    }

    pub fn category(&self) -> Category {
        self.enrichment.category
    }
}

/// Coarse state of the enrichment fan-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProcessingStatus {
    /// Nothing attempted yet, or job-search mode awaiting a résumé.
    #[default]
    Idle,
    /// Fan-out in flight.
    Processing,
    /// At least one message enriched successfully.
    Done,
    /// A batch completed with zero successes.
    Error,
}

/// Résumé text supplied by the user. Construction rejects empty input;
/// acquisition mechanics (file, upload, paste) are the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeText(String);

/// Rejection of empty résumé input.
#[derive(Debug, Error)]
#[error("résumé text is empty")]
pub struct EmptyResume;

impl ResumeText {
    pub fn new(text: impl Into<String>) -> Result<Self, EmptyResume> {
        let text = text.into();
        if text.trim().is_empty() {
            Err(EmptyResume)
        } else {
            Ok(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
