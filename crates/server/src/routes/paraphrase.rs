use actix_web::{post, web, HttpResponse};
use textmorph_common::TextMorphError;
use textmorph_llm::ParaphraseRequest;
use tracing::info;

use crate::state::AppState;
use crate::types::{error_response, ParaphraseApiRequest, ParaphraseApiResponse};

/// POST /paraphrase - Generate paraphrase variants
#[post("/paraphrase")]
pub async fn paraphrase(
    req: web::Json<ParaphraseApiRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> HttpResponse {
    let paraphraser = match &state.paraphraser {
        Some(client) => client,
        None => {
            return error_response(&TextMorphError::config(
                "Groq API key is not configured",
            ))
        }
    };

    let req = req.into_inner();
    let request = ParaphraseRequest {
        text: req.text,
        num_variants: req.num_variants,
    };

    match paraphraser.paraphrase(request).await {
        Ok(paraphrases) => {
            info!("Paraphrase completed - Variants: {}", paraphrases.len());
            HttpResponse::Ok().json(ParaphraseApiResponse { paraphrases })
        }
        Err(e) => error_response(&e),
    }
}
