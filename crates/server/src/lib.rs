//! TextMorph HTTP Server
//!
//! Actix-web REST API in front of the summarization and paraphrase
//! clients. The frontend is a separate SPA origin, hence CORS.

pub mod routes;
pub mod state;
pub mod types;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use textmorph_common::{AppConfig, Result};
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::state::AppState;

/// Start the HTTP server, blocking until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_address = config.server_bind_address();
    let state = Arc::new(AppState::new(config)?);
    let data = web::Data::new(state);

    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .service(
                web::scope("/api")
                    .service(routes::summarize::summarize)
                    .service(routes::paraphrase::paraphrase)
                    .service(routes::models::get_models)
                    .service(routes::system::health),
            )
    })
    .bind(&bind_address)
    .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", bind_address, e))?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
