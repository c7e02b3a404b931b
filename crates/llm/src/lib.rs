//! TextMorph LLM Integration
//!
//! Summarization and paraphrase API clients

mod client;
mod models;
mod parse;
mod prompts;
mod types;

pub use client::{
    build_paraphrase_body, build_summarize_body, parse_summary_response, ParaphraseClient,
    SummarizeClient,
};
pub use models::{model_config, model_keys, ModelConfig, DEFAULT_MODEL, SUMMARIZATION_MODELS};
pub use parse::{clean_paraphrase_line, parse_paraphrases};
pub use prompts::{paraphrase_prompt, PARAPHRASE_SYSTEM_PROMPT};
pub use types::{
    ChatBody, ChatChoice, ChatMessage, ChatResponse, InferenceBody, InferenceCandidate,
    InferenceParameters, ParaphraseRequest, SummarizeRequest, SummaryLength, DEFAULT_NUM_VARIANTS,
};
