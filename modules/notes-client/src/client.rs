//! Typed HTTP client for the notes backend API.

use notes_client_types::{ApiInfo, HealthStatus};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ai::AiApi;
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::notes::NotesApi;
use crate::search::SearchApi;

/// Entry point for every backend call. Cloning is cheap and clones share
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NotesClient {
    config: ClientConfig,
    client: reqwest::Client,
}

// ── Construction ────────────────────────────────────

impl NotesClient {
    /// Build a client with its own transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| ApiError::Transport {
                operation: "build HTTP client".to_string(),
                source,
            })?;

        Ok(Self::with_http_client(config, client))
    }

    /// Build a client around an existing transport handle
    pub fn with_http_client(config: ClientConfig, client: reqwest::Client) -> Self {
        log::debug!("[NotesClient] Using backend at {}", config.base_url);
        Self { config, client }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Note CRUD under `/api/notes/`
    pub fn notes(&self) -> NotesApi<'_> {
        NotesApi::new(self)
    }

    /// AI helpers under `/api/ai/`
    pub fn ai(&self) -> AiApi<'_> {
        AiApi::new(self)
    }

    /// Semantic and keyword search under `/api/search/`
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Check backend health (`GET /health`)
    pub async fn health(&self) -> Result<HealthStatus> {
        let request = self.request(Method::GET, "/health");
        self.fetch_json(request, "check backend health".to_string())
            .await
    }

    /// Service banner (`GET /`)
    pub async fn info(&self) -> Result<ApiInfo> {
        let request = self.request(Method::GET, "/");
        self.fetch_json(request, "fetch API info".to_string()).await
    }
}

// ── Request plumbing ────────────────────────────────

impl NotesClient {
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("[NotesClient] {} {}", method, url);
        self.client
            .request(method, url)
            .timeout(self.config.timeout)
    }

    /// Request with a JSON body; reqwest sets `Content-Type: application/json`
    pub(crate) fn request_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> RequestBuilder {
        self.request(method, path).json(body)
    }

    /// Send and decode a JSON body of type `T`
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        operation: String,
    ) -> Result<T> {
        let response = self.send(request, &operation).await?;

        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Transport {
                operation: operation.clone(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| ApiError::Decode { operation, source })
    }

    /// Send and ignore whatever body comes back
    pub(crate) async fn fetch_empty(&self, request: RequestBuilder, operation: String) -> Result<()> {
        self.send(request, &operation).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder, operation: &str) -> Result<Response> {
        let response = request.send().await.map_err(|source| ApiError::Transport {
            operation: operation.to_string(),
            source,
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let body = response.text().await.unwrap_or_default();
        log::warn!(
            "[NotesClient] Failed to {}: HTTP {} {}",
            operation,
            status.as_u16(),
            body
        );

        Err(ApiError::from_status(
            operation.to_string(),
            status.as_u16(),
            status_text,
            error_detail(&body),
        ))
    }
}

/// Pull a readable message out of an error body. Handles both
/// `{"detail": "..."}` and the list form used for field validation
/// (`{"detail": [{"loc": [...], "msg": "..."}]}`).
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| {
                    let msg = item.get("msg")?.as_str()?;
                    let field = item
                        .get("loc")
                        .and_then(|loc| loc.as_array())
                        .map(|loc| {
                            loc.iter()
                                .filter_map(|part| match part {
                                    serde_json::Value::String(s) if s != "body" => Some(s.clone()),
                                    serde_json::Value::Number(n) => Some(n.to_string()),
                                    _ => None,
                                })
                                .collect::<Vec<_>>()
                                .join(".")
                        })
                        .unwrap_or_default();
                    if field.is_empty() {
                        Some(msg.to_string())
                    } else {
                        Some(format!("{}: {}", field, msg))
                    }
                })
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}
