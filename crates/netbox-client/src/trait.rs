//! NetBoxClient trait for mocking
//!
//! This trait abstracts the NetBoxClient to enable mocking in unit tests.
//! The concrete NetBoxClient implements this trait, and tests can use mock implementations.

use crate::common::{ApiResponse, PaginatedResponse};
use crate::error::NetBoxError;
use crate::models::*;

/// Result of a single-page list call
pub type ListResult<T> = Result<ApiResponse<PaginatedResponse<T>>, NetBoxError>;

/// Trait for NetBox API client operations
///
/// Every list operation returns the first page only; `filters` are passed
/// through as query parameters. All async methods must be `Send` to work
/// with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait NetBoxClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Validate the API token against an endpoint that always requires one
    async fn validate_token(&self) -> Result<(), NetBoxError>;

    /// `GET /api/status/`. Served without authentication.
    async fn status(&self) -> Result<ApiResponse<SystemStatus>, NetBoxError>;

    // Tenancy
    async fn list_tenants(&self, filters: &[(&str, &str)]) -> ListResult<Tenant>;

    // DCIM
    async fn list_sites(&self, filters: &[(&str, &str)]) -> ListResult<Site>;

    // IPAM
    async fn list_prefixes(&self, filters: &[(&str, &str)]) -> ListResult<Prefix>;

    // Virtualization
    async fn list_clusters(&self, filters: &[(&str, &str)]) -> ListResult<Cluster>;

    // Circuits
    async fn list_circuits(&self, filters: &[(&str, &str)]) -> ListResult<Circuit>;

    // Extras
    async fn list_tags(&self, filters: &[(&str, &str)]) -> ListResult<Tag>;

    // Users
    async fn list_users(&self, filters: &[(&str, &str)]) -> ListResult<User>;

    // VPN
    async fn list_tunnels(&self, filters: &[(&str, &str)]) -> ListResult<Tunnel>;

    // Wireless
    async fn list_wireless_lans(&self, filters: &[(&str, &str)]) -> ListResult<WirelessLan>;

    // Core
    async fn list_data_sources(&self, filters: &[(&str, &str)]) -> ListResult<DataSource>;
}
