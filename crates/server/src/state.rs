use textmorph_common::{AppConfig, Result};
use textmorph_llm::{ParaphraseClient, SummarizeClient};
use tracing::warn;

/// Shared application state
///
/// Clients are constructed once at startup. A missing credential
/// leaves the corresponding client absent; the route answers with a
/// configuration error per call while the server keeps running.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Summarization client, absent without HF_API_KEY
    pub summarizer: Option<SummarizeClient>,

    /// Paraphrase client, absent without GROQ_API_KEY
    pub paraphraser: Option<ParaphraseClient>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: AppConfig) -> Result<Self> {
        let summarizer = match SummarizeClient::from_config(&config) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("Summarization client unavailable: {}", e);
                None
            }
        };

        let paraphraser = match ParaphraseClient::from_config(&config) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("Paraphrase client unavailable: {}", e);
                None
            }
        };

        Ok(Self {
            config,
            summarizer,
            paraphraser,
        })
    }
}
