//! NetBox API client
//!
//! Read-only client for the NetBox REST API: the status endpoint plus
//! list/retrieve over any type implementing [`Resource`].

use crate::common::query::{self, object_path};
use crate::common::{ApiResponse, HttpClient};
use crate::config::Configuration;
use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::{ListResult, NetBoxClientTrait};
use reqwest::Client;
use tracing::debug;

const STATUS_PATH: &str = "/api/status/";
// Requires an authenticated user; the status endpoint does not.
const TOKEN_CHECK_PATH: &str = "/api/users/config/";

/// NetBox API client
#[derive(Debug, Clone)]
pub struct NetBoxClient {
    http: HttpClient,
}

impl NetBoxClient {
    /// Create a new NetBox client
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL (e.g., "http://localhost:8000")
    /// * `token` - API token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, NetBoxError> {
        Self::from_config(&Configuration::new(base_url, token))
    }

    /// Create a client from a resolved [`Configuration`]
    ///
    /// The URL is not validated here; a malformed one fails on the first request.
    pub fn from_config(config: &Configuration) -> Result<Self, NetBoxError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(NetBoxError::Http)?;

        debug!("NetBox client bound to {}", config.server_url);
        Ok(Self {
            http: HttpClient::new(client, config.server_url.clone(), config.api_token.clone()),
        })
    }

    /// Create a client from `NETBOX_URL` / `NETBOX_API_TOKEN`
    pub fn from_env() -> Result<Self, NetBoxError> {
        Self::from_config(&Configuration::from_env())
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Fetch the server status (versions, installed apps, workers)
    pub async fn status(&self) -> Result<ApiResponse<SystemStatus>, NetBoxError> {
        debug!("Fetching NetBox status");
        self.http.get(STATUS_PATH).await
    }

    /// Validate the API token by making a simple authenticated request.
    ///
    /// # Returns
    /// * `Ok(())` - Token is valid and NetBox is reachable
    /// * `Err(NetBoxError::Authentication)` - Token was rejected
    /// * `Err(NetBoxError)` - NetBox is unreachable or misbehaving
    pub async fn validate_token(&self) -> Result<(), NetBoxError> {
        debug!("Validating NetBox token and connectivity");
        let _: ApiResponse<serde_json::Value> = self.http.get(TOKEN_CHECK_PATH).await?;
        debug!("Token validated successfully");
        Ok(())
    }

    /// Fetch the first page of `R`
    pub async fn list<R: Resource>(&self, filters: &[(&str, &str)]) -> ListResult<R> {
        debug!("Listing {} with filters: {:?}", R::ENDPOINT, filters);
        query::list_resources(&self.http, R::ENDPOINT, filters).await
    }

    /// Fetch every page of `R`
    pub async fn list_all<R: Resource>(&self, filters: &[(&str, &str)]) -> Result<Vec<R>, NetBoxError> {
        debug!("Listing all {} with filters: {:?}", R::ENDPOINT, filters);
        query::query_resources(&self.http, R::ENDPOINT, filters).await
    }

    /// Fetch a single `R` by ID
    pub async fn retrieve<R: Resource>(&self, id: u64) -> Result<ApiResponse<R>, NetBoxError> {
        debug!("Fetching {} {}", R::ENDPOINT, id);
        self.http.get(&object_path(R::ENDPOINT, id)).await
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for NetBoxClient {
    fn base_url(&self) -> &str {
        self.http.base_url()
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        NetBoxClient::validate_token(self).await
    }

    async fn status(&self) -> Result<ApiResponse<SystemStatus>, NetBoxError> {
        NetBoxClient::status(self).await
    }

    async fn list_tenants(&self, filters: &[(&str, &str)]) -> ListResult<Tenant> {
        self.list(filters).await
    }

    async fn list_sites(&self, filters: &[(&str, &str)]) -> ListResult<Site> {
        self.list(filters).await
    }

    async fn list_prefixes(&self, filters: &[(&str, &str)]) -> ListResult<Prefix> {
        self.list(filters).await
    }

    async fn list_clusters(&self, filters: &[(&str, &str)]) -> ListResult<Cluster> {
        self.list(filters).await
    }

    async fn list_circuits(&self, filters: &[(&str, &str)]) -> ListResult<Circuit> {
        self.list(filters).await
    }

    async fn list_tags(&self, filters: &[(&str, &str)]) -> ListResult<Tag> {
        self.list(filters).await
    }

    async fn list_users(&self, filters: &[(&str, &str)]) -> ListResult<User> {
        self.list(filters).await
    }

    async fn list_tunnels(&self, filters: &[(&str, &str)]) -> ListResult<Tunnel> {
        self.list(filters).await
    }

    async fn list_wireless_lans(&self, filters: &[(&str, &str)]) -> ListResult<WirelessLan> {
        self.list(filters).await
    }

    async fn list_data_sources(&self, filters: &[(&str, &str)]) -> ListResult<DataSource> {
        self.list(filters).await
    }
}
