// src/integrations/swapi/client.rs
//
// SWAPI HTTP access.
//
// - One GET per call, no retries, no pagination
// - A fresh HTTP client per call
// - Returns the raw body; decoding belongs to the services layer

use async_trait::async_trait;
use reqwest::{header, Client, Url};

use crate::error::{AppError, AppResult};

/// Default API root
pub const DEFAULT_BASE_ADDRESS: &str = "https://swapi.dev/api/";

/// Default resource path, relative to the API root
pub const DEFAULT_RESOURCE: &str = "planets";

/// Reads a JSON document from `base_address` + `path`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JsonReader: Send + Sync {
    async fn read(&self, base_address: &str, path: &str) -> AppResult<String>;
}

/// reqwest-backed reader
#[derive(Debug, Default, Clone)]
pub struct HttpJsonReader;

impl HttpJsonReader {
    pub fn new() -> Self {
        Self
    }
}

/// Resolve `path` against `base_address` (RFC 3986 reference resolution).
/// A base without a trailing slash loses its last segment.
pub fn join_url(base_address: &str, path: &str) -> AppResult<Url> {
    let base = Url::parse(base_address)
        .map_err(|e| AppError::Fetch(format!("Invalid base address {:?}: {}", base_address, e)))?;
    base.join(path)
        .map_err(|e| AppError::Fetch(format!("Invalid request path {:?}: {}", path, e)))
}

#[async_trait]
impl JsonReader for HttpJsonReader {
    async fn read(&self, base_address: &str, path: &str) -> AppResult<String> {
        let url = join_url(base_address, path)?;
        let http_client = Client::builder().build()?;

        log::debug!("GET {}", url);
        let response = http_client
            .get(url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::Fetch(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch(format!(
                "Response status code does not indicate success: {} ({})",
                status, url
            )));
        }

        let body = response.text().await?;
        log::debug!("{} returned {} bytes", url, body.len());
        Ok(body)
    }
}
