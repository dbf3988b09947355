//! HTTP client for the advocate directory endpoint.
//!
//! The endpoint is a single read: a GET returning `{"data": [...]}` with the
//! full record set. No query parameters, pagination, or server-side filtering
//! exist; narrowing happens entirely client-side.

use thiserror::Error;

use crate::model::{Advocate, AdvocatesResponse};

/// Errors surfaced while fetching the advocate list.
///
/// Both variants collapse to the same user-facing load failure at the store
/// boundary; the distinction only matters for logs and tests.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the read-only directory endpoint.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    url: String,
}

impl DirectoryClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the full advocate list in server order.
    pub async fn fetch_advocates(&self) -> Result<Vec<Advocate>, LoadError> {
        tracing::debug!(url = %self.url, "fetch_advocates");

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "directory endpoint returned non-success");
            return Err(LoadError::Status(status));
        }

        let body: AdvocatesResponse = response.json().await?;
        tracing::info!(count = body.data.len(), "advocates fetched");
        Ok(body.data)
    }
}
