//! Per-message enrichment: one request to the model, one validated
//! [`Enrichment`] back, or a failure carrying the message id.

use serde::Deserialize;
use thiserror::Error;

use super::gemini::{GeminiClient, GeminiError};
use super::prompts;
use crate::inbox::RawMessage;
use crate::model::{
    ApplicationStatus, Category, Enrichment, EventDetails, GeneralCategory, InterviewDetails,
    JobCategory, JobDetails, Mode, ModeDetails, Priority, ResumeText,
};

/// Why a single enrichment call failed.
#[derive(Error, Debug)]
pub enum EnrichError {
    #[error(transparent)]
    Generate(#[from] GeminiError),
    #[error("payload violates the response schema: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("unrecognized category {0:?}")]
    UnknownCategory(String),
    #[error("relevance score {0} outside 0-100")]
    ScoreOutOfRange(i64),
}

/// Failure of one message's enrichment.
///
/// Carries the originating message's identifier and the diagnostic cause;
/// never raised past this boundary, only returned.
#[derive(Error, Debug)]
#[error("enrichment failed for message {message_id}: {cause}")]
pub struct EnrichFailure {
    pub message_id: String,
    #[source]
    pub cause: EnrichError,
}

/// Mode-aware enrichment client over a [`GeminiClient`].
pub struct Enricher {
    client: GeminiClient,
}

impl Enricher {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Enrich one message.
    ///
    /// The request shape is selected purely from `mode`: general mode ignores
    /// `resume`; job-search mode embeds it, or an explicit no-résumé marker
    /// when absent. No caching, no retry.
    pub async fn enrich(
        &self,
        message: &RawMessage,
        mode: Mode,
        resume: Option<&ResumeText>,
    ) -> Result<Enrichment, EnrichFailure> {
        self.request(message, mode, resume)
            .await
            .map_err(|cause| EnrichFailure {
                message_id: message.id.clone(),
                cause,
            })
    }

    async fn request(
        &self,
        message: &RawMessage,
        mode: Mode,
        resume: Option<&ResumeText>,
    ) -> Result<Enrichment, EnrichError> {
        let (prompt, schema) = match mode {
            Mode::General => (
                prompts::general_analysis_prompt(message),
                prompts::general_response_schema(),
            ),
            Mode::JobSearch => (
                prompts::job_search_analysis_prompt(message, resume.map(ResumeText::as_str)),
                prompts::job_search_response_schema(),
            ),
        };

        let payload = self.client.generate_structured(&prompt, schema).await?;
        parse_enrichment(&payload, mode)
    }
}

/// Wire shape of a general-mode response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneralPayload {
    summary: String,
    category: String,
    priority: Priority,
    event: Option<EventDetails>,
    #[serde(default)]
    tasks: Vec<String>,
    #[serde(default)]
    suggested_actions: Vec<String>,
}

/// Wire shape of a job-search-mode response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobPayload {
    summary: String,
    category: String,
    priority: Priority,
    application_status: Option<ApplicationStatus>,
    relevance_score: Option<i64>,
    good_fit: Option<bool>,
    #[serde(default)]
    tailored_resume_points: Vec<String>,
    cover_letter_draft: Option<String>,
    interview: Option<InterviewDetails>,
    company_research: Option<String>,
    #[serde(default)]
    tasks: Vec<String>,
    #[serde(default)]
    suggested_actions: Vec<String>,
}

/// Parse and validate a response payload against the mode's wire shape.
///
/// Missing `tasks` / `suggestedActions` / `tailoredResumePoints` normalize to
/// empty lists; no other repair is attempted. Category strings outside the
/// mode's closed set and out-of-range relevance scores are failures.
fn parse_enrichment(payload: &str, mode: Mode) -> Result<Enrichment, EnrichError> {
    match mode {
        Mode::General => {
            let parsed: GeneralPayload = serde_json::from_str(payload)?;
            let category = GeneralCategory::from_label(&parsed.category)
                .ok_or_else(|| EnrichError::UnknownCategory(parsed.category.clone()))?;

            Ok(Enrichment {
                summary: parsed.summary,
                category: Category::General(category),
                priority: parsed.priority,
                tasks: parsed.tasks,
                suggested_actions: parsed.suggested_actions,
                details: ModeDetails::General {
                    event: parsed.event,
                },
            })
        }
        Mode::JobSearch => {
            let parsed: JobPayload = serde_json::from_str(payload)?;
            let category = JobCategory::from_label(&parsed.category)
                .ok_or_else(|| EnrichError::UnknownCategory(parsed.category.clone()))?;

            let relevance_score = match parsed.relevance_score {
                None => None,
                Some(score) if (0..=100).contains(&score) => Some(score as u8),
                Some(score) => return Err(EnrichError::ScoreOutOfRange(score)),
            };

            Ok(Enrichment {
                summary: parsed.summary,
                category: Category::Job(category),
                priority: parsed.priority,
                tasks: parsed.tasks,
                suggested_actions: parsed.suggested_actions,
                details: ModeDetails::Job(JobDetails {
                    application_status: parsed.application_status,
                    relevance_score,
                    good_fit: parsed.good_fit,
                    tailored_resume_points: parsed.tailored_resume_points,
                    cover_letter_draft: parsed.cover_letter_draft,
                    interview: parsed.interview,
                    company_research: parsed.company_research,
                }),
            })
        }
    }
}
