use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    summarization_ready: bool,
    paraphrase_ready: bool,
}

/// GET /health - Liveness and credential presence
#[get("/health")]
pub async fn health(state: web::Data<std::sync::Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        summarization_ready: state.summarizer.is_some(),
        paraphrase_ready: state.paraphraser.is_some(),
    })
}
