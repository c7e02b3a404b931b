use actix_web::{get, web, HttpResponse};
use serde::Serialize;
use textmorph_llm::{SUMMARIZATION_MODELS, DEFAULT_MODEL};

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ModelInfo {
    key: &'static str,
    name: &'static str,
    max_length: usize,
    default_max_summary: usize,
    default_min_summary: usize,
}

#[derive(Debug, Serialize)]
struct DefaultModels {
    summarize: &'static str,
    chat: String,
}

#[derive(Debug, Serialize)]
struct ModelsResponse {
    models: Vec<ModelInfo>,
    default: DefaultModels,
}

/// GET /models - List registered summarization models
#[get("/models")]
pub async fn get_models(state: web::Data<std::sync::Arc<AppState>>) -> HttpResponse {
    let models = SUMMARIZATION_MODELS
        .iter()
        .map(|(key, config)| ModelInfo {
            key: *key,
            name: config.name,
            max_length: config.max_length,
            default_max_summary: config.default_max_summary,
            default_min_summary: config.default_min_summary,
        })
        .collect();

    HttpResponse::Ok().json(ModelsResponse {
        models,
        default: DefaultModels {
            summarize: DEFAULT_MODEL,
            chat: state.config.chat_model.clone(),
        },
    })
}
