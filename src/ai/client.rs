use crate::config::RelayConfig;
use crate::error::{ConfigError, GenerationError};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Single-attempt client for the Ollama `/api/generate` endpoint.
///
/// Holds no per-call state; clones share reqwest's connection pool.
#[derive(Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: &RelayConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(config.timeout()).build()?,
            url: config.generate_url(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request_id = Uuid::new_v4();
        log::info!("[{request_id}] ➡️  Forwarding prompt ({} bytes) to {}", prompt.len(), self.model);

        let payload = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        let res = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| classify_send_error(request_id, e))?;

        if res.status() != StatusCode::OK {
            let status = res.status();
            let err_text = res.text().await.unwrap_or_default();
            log::error!("[{request_id}] BackendRejected: status {status}, body: {err_text}");
            return Err(GenerationError::BackendRejected {
                status: status.as_u16(),
            });
        }

        let status = res.status().as_u16();
        let body: GenerateResponse = res.json().await.map_err(|e| {
            log::error!("[{request_id}] BackendRejected: unusable response body: {e}");
            GenerationError::BackendRejected { status }
        })?;

        log::info!("[{request_id}] ✅ Received {} bytes", body.response.len());
        Ok(body.response)
    }
}

fn classify_send_error(request_id: Uuid, e: reqwest::Error) -> GenerationError {
    if e.is_connect() || e.is_timeout() {
        log::error!("[{request_id}] BackendUnreachable: {e}");
        GenerationError::BackendUnreachable
    } else {
        log::error!("[{request_id}] InternalError: {e}");
        GenerationError::InternalError
    }
}
