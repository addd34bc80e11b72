mod schema;
mod templates;

pub use schema::{general_response_schema, job_search_response_schema};
pub use templates::{general_analysis_prompt, job_search_analysis_prompt, NO_RESUME_MARKER};
