use crate::ai::client::OllamaClient;
use crate::catalog::{Catalog, FieldValues, Template};
use crate::config::RelayConfig;
use crate::error::{AppError, CatalogError, ConfigError, GenerationError};
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// The only failure text a caller ever sees for a relayed generation.
pub const GENERATION_FAILED: &str =
    "Failed to generate content. Make sure the relay and Ollama are running.";

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    client: OllamaClient,
}

impl AppState {
    pub fn new(catalog: Catalog, client: OllamaClient) -> Self {
        Self {
            catalog: Arc::new(catalog),
            client,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Catalog(e @ CatalogError::TemplateNotFound(_)) => {
                (StatusCode::NOT_FOUND, e.to_string())
            }
            ApiError::Catalog(e @ CatalogError::MissingFields(_)) => {
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            ApiError::Generation(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED.to_string())
            }
        };
        log::warn!("{} -> {}", self, status);
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[derive(Deserialize)]
struct GenerateRequest {
    prompt: String,
}

#[derive(Deserialize)]
struct ValuesRequest {
    #[serde(default)]
    values: FieldValues,
}

#[derive(Serialize)]
struct GenerateResponse {
    output: String,
}

#[derive(Serialize)]
struct RenderResponse {
    prompt: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    model: String,
}

pub fn router(state: AppState, allowed_origin: &str) -> Result<Router, ConfigError> {
    let origin: HeaderValue = allowed_origin
        .parse()
        .map_err(|_| ConfigError::InvalidOrigin(allowed_origin.to_string()))?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Ok(Router::new()
        .route("/health", get(health))
        .route("/generate", post(generate))
        .route("/templates", get(list_templates))
        .route("/templates/{id}", get(get_template))
        .route("/templates/{id}/render", post(render_template))
        .route("/templates/{id}/generate", post(generate_from_template))
        .layer(cors)
        .with_state(state))
}

pub async fn serve(config: &RelayConfig, catalog: Catalog) -> Result<(), AppError> {
    let addr = config.bind_addr()?;
    let state = AppState::new(catalog, OllamaClient::new(config)?);
    let app = router(state, &config.allowed_origin)?;

    let listener = TcpListener::bind(addr).await?;
    log::info!("🚀 Relay running on http://{addr}");
    log::info!("   -> Backend: {} ({})", config.generate_url(), config.model);
    log::info!("   -> Allowed origin: {}", config.allowed_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        model: state.client.model().to_string(),
    })
}

async fn generate(
    State(state): State<AppState>,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let output = state.client.generate(&body.prompt).await?;
    Ok(Json(GenerateResponse { output }))
}

async fn list_templates(State(state): State<AppState>) -> Json<Vec<Template>> {
    Json(state.catalog.list().to_vec())
}

async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Template>, ApiError> {
    Ok(Json(*state.catalog.find(&id)?))
}

async fn render_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ValuesRequest>,
) -> Result<Json<RenderResponse>, ApiError> {
    let prompt = state.catalog.find(&id)?.render_validated(&body.values)?;
    Ok(Json(RenderResponse { prompt }))
}

async fn generate_from_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ValuesRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let prompt = state.catalog.find(&id)?.render_validated(&body.values)?;
    log::info!("📝 Generating '{id}'");
    let output = state.client.generate(&prompt).await?;
    Ok(Json(GenerateResponse { output }))
}
