use actix_web::{post, web, HttpResponse};
use textmorph_common::TextMorphError;
use textmorph_llm::SummarizeRequest;
use tracing::info;

use crate::state::AppState;
use crate::types::{error_response, SummarizeApiRequest, SummarizeApiResponse};

/// POST /summarize - Summarize text with the configured backend
#[post("/summarize")]
pub async fn summarize(
    req: web::Json<SummarizeApiRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> HttpResponse {
    let summarizer = match &state.summarizer {
        Some(client) => client,
        None => {
            return error_response(&TextMorphError::config(
                "Hugging Face API key is not configured",
            ))
        }
    };

    let req = req.into_inner();
    let request = SummarizeRequest {
        text: req.text,
        length: req.length,
        model: req.model.clone(),
    };

    match summarizer.summarize(request).await {
        Ok(summary) => {
            info!("Summarize completed - Model: {}", req.model);
            HttpResponse::Ok().json(SummarizeApiResponse {
                summary,
                model: req.model,
            })
        }
        Err(e) => error_response(&e),
    }
}
