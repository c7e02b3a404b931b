use crate::error::TextMorphError;
use std::path::PathBuf;
use tracing::warn;

/// TextMorph application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Hugging Face inference API token
    pub hf_api_key: Option<String>,

    /// Groq chat-completion API token
    pub groq_api_key: Option<String>,

    /// Hugging Face inference base URL
    pub hf_base_url: String,

    /// Chat-completion base URL
    pub chat_base_url: String,

    /// Chat model used for paraphrasing
    pub chat_model: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hf_api_key: None,
            groq_api_key: None,
            hf_base_url: "https://api-inference.huggingface.co".to_string(),
            chat_base_url: "https://api.groq.com/openai/v1".to_string(),
            chat_model: "llama-3.1-8b-instant".to_string(),
            request_timeout_secs: 120,
            server_host: "127.0.0.1".to_string(),
            server_port: 8000,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, TextMorphError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            hf_api_key: Self::get_env_secret("HF_API_KEY"),
            groq_api_key: Self::get_env_secret("GROQ_API_KEY"),
            hf_base_url: std::env::var("HF_BASE_URL")
                .unwrap_or_else(|_| "https://api-inference.huggingface.co".to_string()),
            chat_base_url: std::env::var("CHAT_BASE_URL")
                .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string()),
            chat_model: std::env::var("CHAT_MODEL")
                .unwrap_or_else(|_| "llama-3.1-8b-instant".to_string()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(120),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            log_dir: std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        // Missing credentials are a warning at startup, not a crash.
        // Clients constructed without their credential fail with Config.
        if config.hf_api_key.is_none() {
            warn!("HF_API_KEY is not set; summarization calls will fail");
        }
        if config.groq_api_key.is_none() {
            warn!("GROQ_API_KEY is not set; paraphrase calls will fail");
        }

        Ok(config)
    }

    /// Get non-empty secret from environment variable
    fn get_env_secret(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.trim().is_empty())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), TextMorphError> {
        if !self.hf_base_url.starts_with("http://") && !self.hf_base_url.starts_with("https://") {
            return Err(TextMorphError::config(
                "Inference base URL must start with http:// or https://",
            ));
        }

        if !self.chat_base_url.starts_with("http://")
            && !self.chat_base_url.starts_with("https://")
        {
            return Err(TextMorphError::config(
                "Chat base URL must start with http:// or https://",
            ));
        }

        if self.chat_model.is_empty() {
            return Err(TextMorphError::config("Chat model name cannot be empty"));
        }

        if self.request_timeout_secs == 0 {
            return Err(TextMorphError::config("Request timeout cannot be 0"));
        }

        if self.server_port == 0 {
            return Err(TextMorphError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
