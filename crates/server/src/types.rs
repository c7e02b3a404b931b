use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use textmorph_common::TextMorphError;
use textmorph_llm::{SummaryLength, DEFAULT_MODEL, DEFAULT_NUM_VARIANTS};

/// Summarize request
#[derive(Debug, Deserialize)]
pub struct SummarizeApiRequest {
    /// Text to summarize
    pub text: String,

    /// Length preset (short, medium, long)
    #[serde(default)]
    pub length: SummaryLength,

    /// Model key
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Summarize response
#[derive(Debug, Serialize)]
pub struct SummarizeApiResponse {
    /// Generated summary
    pub summary: String,

    /// Model key that produced it
    pub model: String,
}

/// Paraphrase request
#[derive(Debug, Deserialize)]
pub struct ParaphraseApiRequest {
    /// Text to paraphrase
    pub text: String,

    /// Number of variants
    #[serde(default = "default_num_variants")]
    pub num_variants: usize,
}

fn default_num_variants() -> usize {
    DEFAULT_NUM_VARIANTS
}

/// Paraphrase response
#[derive(Debug, Serialize)]
pub struct ParaphraseApiResponse {
    /// Distinct paraphrase variants, model order preserved
    pub paraphrases: Vec<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,

    /// Whether retrying the same request may succeed
    pub retryable: bool,
}

/// Map a domain error onto an HTTP response
pub fn error_response(err: &TextMorphError) -> HttpResponse {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    HttpResponse::build(status).json(ErrorResponse {
        error: err.to_string(),
        retryable: err.is_retryable(),
    })
}
