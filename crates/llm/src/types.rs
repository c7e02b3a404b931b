use serde::{Deserialize, Serialize};

use crate::models::{ModelConfig, DEFAULT_MODEL};

/// Default number of paraphrase variants
pub const DEFAULT_NUM_VARIANTS: usize = 3;

/// Summary length preset
///
/// Short and Long map to fixed token bounds regardless of model;
/// Medium defers to the selected model's own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    /// Resolve (min_tokens, max_tokens) bounds for a model
    pub fn resolve(&self, model: &ModelConfig) -> (usize, usize) {
        match self {
            Self::Short => (30, 60),
            Self::Medium => (model.default_min_summary, model.default_max_summary),
            Self::Long => (130, 200),
        }
    }
}

/// Summarization request
#[derive(Debug, Clone)]
pub struct SummarizeRequest {
    /// Text to summarize (must be non-empty after trimming)
    pub text: String,

    /// Length preset
    pub length: SummaryLength,

    /// Model key into the summarization registry
    pub model: String,
}

impl SummarizeRequest {
    /// Create request with default length and model
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            length: SummaryLength::default(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// Paraphrase request
#[derive(Debug, Clone)]
pub struct ParaphraseRequest {
    /// Text to paraphrase (must be non-empty after trimming)
    pub text: String,

    /// Number of variants to request (must be positive)
    pub num_variants: usize,
}

impl ParaphraseRequest {
    /// Create request with the default variant count
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            num_variants: DEFAULT_NUM_VARIANTS,
        }
    }
}

/// Inference request body for the summarization backend
#[derive(Debug, Clone, Serialize)]
pub struct InferenceBody {
    /// Raw input text
    pub inputs: String,

    /// Generation parameters
    pub parameters: InferenceParameters,
}

/// Generation parameters for the summarization backend
#[derive(Debug, Clone, Serialize)]
pub struct InferenceParameters {
    /// Maximum summary length in tokens
    pub max_length: usize,

    /// Minimum summary length in tokens
    pub min_length: usize,

    /// Enable sampling
    pub do_sample: bool,

    /// Sampling temperature
    pub temperature: f32,

    /// Nucleus sampling threshold
    pub top_p: f32,
}

/// One candidate in the inference response list
///
/// The backend is heterogeneous across models: summarization models
/// return `summary_text`, text2text models return `generated_text`.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceCandidate {
    pub summary_text: Option<String>,
    pub generated_text: Option<String>,
}

/// Chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system" | "user" | "assistant"
    pub role: String,

    /// Message content
    pub content: String,
}

/// Chat-completion request body for the paraphrase backend
#[derive(Debug, Clone, Serialize)]
pub struct ChatBody {
    /// Chat model identifier
    pub model: String,

    /// Conversation messages
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum output tokens
    pub max_tokens: u32,
}

/// Chat-completion response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// One choice in a chat-completion response
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::model_config;

    #[test]
    fn test_length_resolution_fixed_bounds() {
        let bart = model_config("bart").unwrap();
        let pegasus = model_config("pegasus").unwrap();

        // Short and Long are model-independent
        assert_eq!(SummaryLength::Short.resolve(bart), (30, 60));
        assert_eq!(SummaryLength::Short.resolve(pegasus), (30, 60));
        assert_eq!(SummaryLength::Long.resolve(bart), (130, 200));
        assert_eq!(SummaryLength::Long.resolve(pegasus), (130, 200));
    }

    #[test]
    fn test_length_resolution_medium_uses_model_defaults() {
        let bart = model_config("bart").unwrap();
        let pegasus = model_config("pegasus").unwrap();

        assert_eq!(SummaryLength::Medium.resolve(bart), (30, 150));
        assert_eq!(SummaryLength::Medium.resolve(pegasus), (20, 120));
    }

    #[test]
    fn test_length_preset_serde() {
        assert_eq!(
            serde_json::from_str::<SummaryLength>("\"short\"").unwrap(),
            SummaryLength::Short
        );
        assert_eq!(
            serde_json::to_string(&SummaryLength::Long).unwrap(),
            "\"long\""
        );
    }

    #[test]
    fn test_request_defaults() {
        let req = SummarizeRequest::new("some text");
        assert_eq!(req.length, SummaryLength::Medium);
        assert_eq!(req.model, "bart");

        let req = ParaphraseRequest::new("some text");
        assert_eq!(req.num_variants, 3);
    }
}
