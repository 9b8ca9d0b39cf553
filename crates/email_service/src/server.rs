use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{error::JsonPayloadError, web, App, HttpRequest, HttpServer};
use anyhow::{anyhow, Context};
use gemini_client::{GeminiClient, GeminiConfig, TextGenerator};
use log::{error, info, warn};

use crate::config::ServerConfig;
use crate::controllers::{email_controller, system_controller};
use crate::error::AppError;
use crate::middleware::TracingMiddleware;

pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

/// Unparseable bodies are reported as internal errors, not 400s.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::InternalError(anyhow!(err.to_string())).into()
}

/// The browser client is served from a different origin, so any origin is allowed.
pub fn cors() -> Cors {
    Cors::permissive()
}

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(email_controller::config)
        .configure(system_controller::config);
}

pub async fn run(server_config: ServerConfig, gemini_config: GeminiConfig) -> anyhow::Result<()> {
    info!("Starting email service...");

    if gemini_config.credential().is_none() {
        warn!("Gemini API key is not configured; generation requests will return an error");
    }
    info!(
        "Using Gemini model '{}' at {}",
        gemini_config.model, gemini_config.api_base
    );

    let generator: Arc<dyn TextGenerator> =
        Arc::new(GeminiClient::new(gemini_config).context("Failed to build Gemini client")?);
    let app_state = web::Data::new(AppState::new(generator));

    let bind_address = server_config.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(cors())
            .wrap(TracingMiddleware)
            .configure(app_config)
    })
    .workers(server_config.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind server to {bind_address}"))?
    .run();

    info!("Email service listening on http://{bind_address}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
