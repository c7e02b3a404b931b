use std::time::Duration;

use reqwest::Client;
use textmorph_common::{AppConfig, Result, TextMorphError};
use tracing::debug;

use crate::models::{model_config, ModelConfig};
use crate::parse::parse_paraphrases;
use crate::prompts::{paraphrase_prompt, PARAPHRASE_SYSTEM_PROMPT};
use crate::types::{
    ChatBody, ChatMessage, ChatResponse, InferenceBody, InferenceCandidate, InferenceParameters,
    ParaphraseRequest, SummarizeRequest, SummaryLength,
};

/// Build the inference request body for a summarization call
///
/// Sampling parameters are fixed for varied but controlled output.
pub fn build_summarize_body(
    text: &str,
    length: SummaryLength,
    model: &ModelConfig,
) -> InferenceBody {
    let (min_length, max_length) = length.resolve(model);

    InferenceBody {
        inputs: text.to_string(),
        parameters: InferenceParameters {
            max_length,
            min_length,
            do_sample: true,
            temperature: 0.7,
            top_p: 0.9,
        },
    }
}

/// Normalize the heterogeneous inference response into a summary string
///
/// The response is a list whose first element carries `summary_text`
/// or `generated_text`, checked in that order. Any other shape is a
/// malformed response.
pub fn parse_summary_response(body: &str) -> Result<String> {
    let candidates: Vec<InferenceCandidate> = serde_json::from_str(body)
        .map_err(|e| TextMorphError::malformed(format!("Expected a candidate list: {}", e)))?;

    let first = candidates
        .first()
        .ok_or_else(|| TextMorphError::malformed("Empty candidate list"))?;

    if let Some(text) = &first.summary_text {
        Ok(text.clone())
    } else if let Some(text) = &first.generated_text {
        Ok(text.clone())
    } else {
        Err(TextMorphError::malformed(
            "Candidate has neither summary_text nor generated_text",
        ))
    }
}

/// Build the two-message chat request body for a paraphrase call
pub fn build_paraphrase_body(model: &str, text: &str, num_variants: usize) -> ChatBody {
    ChatBody {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: PARAPHRASE_SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: paraphrase_prompt(text, num_variants),
            },
        ],
        temperature: 0.9,
        max_tokens: 1000,
    }
}

fn build_http_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;
    Ok(client)
}

/// Summarization API client
///
/// Stateless beyond its credential and transport handle. Each call is
/// a single round trip with at-most-once semantics: no internal retry,
/// no caching, no in-flight coalescing.
#[derive(Debug, Clone)]
pub struct SummarizeClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl SummarizeClient {
    /// Create new summarization client
    ///
    /// Credential presence is validated here, not at first call.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.ok_or_else(|| {
            TextMorphError::config("Hugging Face API key is not configured")
        })?;

        Ok(Self {
            base_url: base_url.into(),
            api_key,
            client: build_http_client(timeout)?,
        })
    }

    /// Create client from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.hf_base_url.clone(),
            config.hf_api_key.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Summarize text in a single round trip
    pub async fn summarize(&self, request: SummarizeRequest) -> Result<String> {
        let model = model_config(&request.model).ok_or_else(|| {
            TextMorphError::config(format!(
                "Model {} not found in configuration",
                request.model
            ))
        })?;

        let text = request.text.trim();
        if text.is_empty() {
            return Err(TextMorphError::invalid_input(
                "Text to summarize cannot be empty",
            ));
        }

        let body = build_summarize_body(text, request.length, model);
        let url = format!("{}/models/{}", self.base_url, model.name);

        debug!(
            "Sending summarize request - Model: {}, Length: {:?}, Text length: {}",
            model.name,
            request.length,
            text.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TextMorphError::transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        // 503 means the backend is cold-starting the model; the caller
        // may retry after a delay, this client never does.
        if status.as_u16() == 503 {
            return Err(TextMorphError::model_warming(
                "Model is loading. Please try again in a few moments.",
            ));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TextMorphError::transport_status(status.as_u16(), body));
        }

        let body = response.text().await.map_err(|e| {
            TextMorphError::transport(format!("Failed to read response body: {}", e))
        })?;

        let summary = parse_summary_response(&body)?;
        debug!("Received summary - Length: {}", summary.len());

        Ok(summary)
    }
}

/// Paraphrase API client backed by a chat-completion endpoint
///
/// Same transport contract as the summarization client: one round
/// trip, no internal retry, caller-decided retry policy.
#[derive(Debug, Clone)]
pub struct ParaphraseClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl ParaphraseClient {
    /// Create new paraphrase client
    ///
    /// Credential presence is validated here, not at first call.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key
            .ok_or_else(|| TextMorphError::config("Groq API key is not configured"))?;

        Ok(Self {
            base_url: base_url.into(),
            api_key,
            model: model.into(),
            client: build_http_client(timeout)?,
        })
    }

    /// Create client from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.chat_base_url.clone(),
            config.groq_api_key.clone(),
            config.chat_model.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Paraphrase text in a single round trip
    ///
    /// Returns up to `num_variants` distinct cleaned variants in the
    /// order the model produced them.
    pub async fn paraphrase(&self, request: ParaphraseRequest) -> Result<Vec<String>> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(TextMorphError::invalid_input(
                "Text to paraphrase cannot be empty",
            ));
        }

        if request.num_variants == 0 {
            return Err(TextMorphError::invalid_input(
                "Number of variants must be positive",
            ));
        }

        let body = build_paraphrase_body(&self.model, text, request.num_variants);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(
            "Sending paraphrase request - Model: {}, Variants: {}, Text length: {}",
            self.model,
            request.num_variants,
            text.len()
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TextMorphError::transport(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TextMorphError::transport_status(status.as_u16(), body));
        }

        let chat: ChatResponse = response.json().await.map_err(|e| {
            TextMorphError::malformed(format!("Failed to decode chat response: {}", e))
        })?;

        let content = chat
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| TextMorphError::malformed("Chat response has no choices"))?;

        let variants = parse_paraphrases(content, request.num_variants)?;
        debug!("Parsed {} paraphrase variants", variants.len());

        Ok(variants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summarize_client() -> SummarizeClient {
        SummarizeClient::new(
            "https://api-inference.huggingface.co",
            Some("test-key".to_string()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn paraphrase_client() -> ParaphraseClient {
        ParaphraseClient::new(
            "https://api.groq.com/openai/v1",
            Some("test-key".to_string()),
            "llama-3.1-8b-instant",
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_missing_credential_refused_at_construction() {
        let err = SummarizeClient::new(
            "https://api-inference.huggingface.co",
            None,
            Duration::from_secs(5),
        )
        .unwrap_err();
        assert!(matches!(err, TextMorphError::Config(_)));

        let err = ParaphraseClient::new(
            "https://api.groq.com/openai/v1",
            None,
            "llama-3.1-8b-instant",
            Duration::from_secs(5),
        )
        .unwrap_err();
        assert!(matches!(err, TextMorphError::Config(_)));
    }

    #[test]
    fn test_summarize_body_per_length_preset() {
        let bart = model_config("bart").unwrap();

        let body = build_summarize_body("text", SummaryLength::Short, bart);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["parameters"]["max_length"], 60);
        assert_eq!(value["parameters"]["min_length"], 30);

        let body = build_summarize_body("text", SummaryLength::Medium, bart);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["parameters"]["max_length"], 150);
        assert_eq!(value["parameters"]["min_length"], 30);

        let body = build_summarize_body("text", SummaryLength::Long, bart);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["parameters"]["max_length"], 200);
        assert_eq!(value["parameters"]["min_length"], 130);
    }

    #[test]
    fn test_summarize_body_sampling_constants() {
        let pegasus = model_config("pegasus").unwrap();
        let body = build_summarize_body("input text", SummaryLength::Medium, pegasus);
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["inputs"], "input text");
        assert_eq!(value["parameters"]["do_sample"], true);
        // f32 fields widen to f64 on serialization; compare as f32
        assert_eq!(
            value["parameters"]["temperature"].as_f64().unwrap() as f32,
            0.7
        );
        assert_eq!(value["parameters"]["top_p"].as_f64().unwrap() as f32, 0.9);
    }

    #[test]
    fn test_parse_summary_response_field_order() {
        let summary = parse_summary_response(r#"[{"summary_text": "X"}]"#).unwrap();
        assert_eq!(summary, "X");

        let summary = parse_summary_response(r#"[{"generated_text": "Y"}]"#).unwrap();
        assert_eq!(summary, "Y");

        // summary_text wins when both are present
        let summary =
            parse_summary_response(r#"[{"summary_text": "X", "generated_text": "Y"}]"#).unwrap();
        assert_eq!(summary, "X");
    }

    #[test]
    fn test_parse_summary_response_malformed_shapes() {
        assert!(matches!(
            parse_summary_response("[]").unwrap_err(),
            TextMorphError::MalformedResponse(_)
        ));
        assert!(matches!(
            parse_summary_response("[{}]").unwrap_err(),
            TextMorphError::MalformedResponse(_)
        ));
        assert!(matches!(
            parse_summary_response(r#"{"summary_text": "X"}"#).unwrap_err(),
            TextMorphError::MalformedResponse(_)
        ));
    }

    #[test]
    fn test_paraphrase_body_shape() {
        let body = build_paraphrase_body("llama-3.1-8b-instant", "The cat sat.", 3);
        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["model"], "llama-3.1-8b-instant");
        assert_eq!(value["temperature"].as_f64().unwrap() as f32, 0.9);
        assert_eq!(value["max_tokens"], 1000);

        let messages = value["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], PARAPHRASE_SYSTEM_PROMPT);
        assert_eq!(messages[1]["role"], "user");
        let instruction = messages[1]["content"].as_str().unwrap();
        assert!(instruction.contains("into 3 distinct"));
        assert!(instruction.contains("The cat sat."));
    }

    #[test]
    fn test_chat_response_decode() {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": "Variant one here"}}],
            "usage": {"total_tokens": 42}
        });
        let chat: ChatResponse = serde_json::from_value(body).unwrap();
        assert_eq!(chat.choices[0].message.content, "Variant one here");
    }

    // Validation failures must occur before any network I/O; these
    // calls return without touching the wire.

    #[tokio::test]
    async fn test_summarize_unknown_model_fails_before_send() {
        let client = summarize_client();
        let mut request = SummarizeRequest::new("Some text worth summarizing");
        request.model = "unknown-model".to_string();

        let err = client.summarize(request).await.unwrap_err();
        assert!(matches!(err, TextMorphError::Config(_)));
    }

    #[tokio::test]
    async fn test_summarize_empty_text_fails_before_send() {
        let client = summarize_client();
        let err = client
            .summarize(SummarizeRequest::new("   \n  "))
            .await
            .unwrap_err();
        assert!(matches!(err, TextMorphError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_paraphrase_empty_text_fails_before_send() {
        let client = paraphrase_client();
        let err = client
            .paraphrase(ParaphraseRequest::new(""))
            .await
            .unwrap_err();
        assert!(matches!(err, TextMorphError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_paraphrase_zero_variants_fails_before_send() {
        let client = paraphrase_client();
        let mut request = ParaphraseRequest::new("A perfectly good sentence.");
        request.num_variants = 0;

        let err = client.paraphrase(request).await.unwrap_err();
        assert!(matches!(err, TextMorphError::InvalidInput(_)));
    }
}
