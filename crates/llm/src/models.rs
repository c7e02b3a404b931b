//! Summarization model registry

use serde::Serialize;

/// Static per-model metadata for the summarization backend
#[derive(Debug, Clone, Serialize)]
pub struct ModelConfig {
    /// Backend model identifier (e.g., "facebook/bart-large-cnn")
    pub name: &'static str,

    /// Maximum input length in tokens
    pub max_length: usize,

    /// Default maximum summary length in tokens
    pub default_max_summary: usize,

    /// Default minimum summary length in tokens
    pub default_min_summary: usize,
}

/// Default model key
pub const DEFAULT_MODEL: &str = "bart";

/// Registered summarization models, indexed by model key
pub const SUMMARIZATION_MODELS: &[(&str, ModelConfig)] = &[
    (
        "bart",
        ModelConfig {
            name: "facebook/bart-large-cnn",
            max_length: 1024,
            default_max_summary: 150,
            default_min_summary: 30,
        },
    ),
    (
        "pegasus",
        ModelConfig {
            name: "google/pegasus-xsum",
            max_length: 1024,
            default_max_summary: 120,
            default_min_summary: 20,
        },
    ),
    (
        "t5",
        ModelConfig {
            name: "t5-base",
            max_length: 512,
            default_max_summary: 110,
            default_min_summary: 30,
        },
    ),
];

/// Look up model configuration by key
///
/// A failed lookup is a configuration error on the caller's side,
/// never a runtime/network error.
pub fn model_config(key: &str) -> Option<&'static ModelConfig> {
    SUMMARIZATION_MODELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, config)| config)
}

/// All registered model keys, in registry order
pub fn model_keys() -> Vec<&'static str> {
    SUMMARIZATION_MODELS.iter().map(|(k, _)| *k).collect()
}
