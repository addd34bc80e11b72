pub mod enrich;
pub mod gemini;
pub mod pipeline;
pub mod prompts;

pub use enrich::{EnrichError, EnrichFailure, Enricher};
pub use gemini::GeminiClient;
pub use pipeline::{run_all, BatchResult};
