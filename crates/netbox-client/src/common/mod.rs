//! Common utilities for NetBox API client
//!
//! Provides the authenticated HTTP wrapper shared by every endpoint.

pub mod query;

use crate::error::NetBoxError;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Paginated response wrapper from NetBox API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Total matches across all pages
    pub count: u64,
    /// Absolute URL of the next page
    pub next: Option<String>,
    /// Absolute URL of the previous page
    pub previous: Option<String>,
    /// Objects on this page
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    /// Total number of objects matching the query on the server
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Whether more pages follow this one
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// A decoded response together with the HTTP status it arrived with
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Decoded body
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Numeric HTTP status
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Drop the status and keep the payload
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// HTTP client wrapper with authentication
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: String,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a new HTTP client wrapper
    pub fn new(client: Client, base_url: String, token: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path; absolute URLs (pagination links) pass through
    pub fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Token {}", self.token)
    }

    /// Make a GET request and decode a 2xx body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, NetBoxError> {
        let url = self.build_url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(NetBoxError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(NetBoxError::Http)?;
        debug!("GET {} -> {}", url, status);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(NetBoxError::Authentication(format!(
                "GET {} rejected: {} - {}",
                path, status, body
            )));
        }

        if status == StatusCode::NOT_FOUND {
            return Err(NetBoxError::NotFound(format!(
                "Resource not found: {} - {}",
                path, body
            )));
        }

        if !status.is_success() {
            return Err(NetBoxError::Api(format!(
                "GET {} failed: {} - {}",
                path, status, body
            )));
        }

        if body.trim().is_empty() {
            return Err(NetBoxError::EmptyBody(status.as_u16()));
        }

        let data = decode_body(&body)?;
        Ok(ApiResponse { status, data })
    }

    /// Fetch all pages of a paginated response, following `next` links
    pub async fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, NetBoxError> {
        let mut all_results = Vec::new();
        let mut next = Some(path.to_string());

        while let Some(page_path) = next.take() {
            debug!("Fetching page: {}", page_path);
            let page: PaginatedResponse<T> = self.get(&page_path).await?.into_inner();
            all_results.extend(page.results);
            next = page.next;
        }

        Ok(all_results)
    }

    /// Build query string from filters
    pub fn build_query_string(&self, filters: &[(&str, &str)]) -> String {
        filters
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Decode a JSON body, keeping a prefix of it in the error for diagnosis
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, NetBoxError> {
    serde_json::from_str(body).map_err(|e| {
        NetBoxError::Decode(format!(
            "error decoding response body: {} - Response (first 500 chars): {}",
            e,
            body.chars().take(500).collect::<String>()
        ))
    })
}
