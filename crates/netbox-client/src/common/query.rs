//! Query utilities for NetBox API
//!
//! Provides helpers for building endpoint paths and handling pagination.

use crate::common::{ApiResponse, HttpClient, PaginatedResponse};
use crate::error::NetBoxError;
use serde::de::DeserializeOwned;

/// Path of a collection endpoint, with an optional query string
pub fn collection_path(http: &HttpClient, endpoint: &str, filters: &[(&str, &str)]) -> String {
    let path = format!("/api/{}/", endpoint.trim_matches('/'));
    if filters.is_empty() {
        path
    } else {
        format!("{}?{}", path, http.build_query_string(filters))
    }
}

/// Path of a single object endpoint
pub fn object_path(endpoint: &str, id: u64) -> String {
    format!("/api/{}/{}/", endpoint.trim_matches('/'), id)
}

/// Fetch the first page of a collection
pub async fn list_resources<T: DeserializeOwned>(
    http: &HttpClient,
    endpoint: &str,
    filters: &[(&str, &str)],
) -> Result<ApiResponse<PaginatedResponse<T>>, NetBoxError> {
    http.get(&collection_path(http, endpoint, filters)).await
}

/// Fetch every page of a collection
pub async fn query_resources<T: DeserializeOwned>(
    http: &HttpClient,
    endpoint: &str,
    filters: &[(&str, &str)],
) -> Result<Vec<T>, NetBoxError> {
    http.fetch_all_pages(&collection_path(http, endpoint, filters)).await
}
