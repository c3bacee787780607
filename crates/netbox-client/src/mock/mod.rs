//! Mock NetBoxClient for unit testing
//!
//! This module provides a mock implementation of NetBoxClientTrait that can be used
//! in unit tests without requiring a running NetBox instance.
//!
//! - `fixtures.rs` - Builders for minimal resource models

pub mod fixtures;

use crate::common::{ApiResponse, PaginatedResponse};
use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::{ListResult, NetBoxClientTrait};
use reqwest::StatusCode;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Store<T> = Arc<Mutex<HashMap<u64, T>>>;

/// Mock NetBoxClient for testing
///
/// This mock stores resources in memory and can be configured to reject
/// the token or report an unexpected status code. Clones share state.
#[derive(Debug, Clone)]
pub struct MockNetBoxClient {
    base_url: String,
    system_status: Arc<Mutex<SystemStatus>>,
    status_code: Arc<Mutex<StatusCode>>,
    token_rejected: Arc<AtomicBool>,
    // In-memory storage for resources
    tenants: Store<Tenant>,
    sites: Store<Site>,
    prefixes: Store<Prefix>,
    clusters: Store<Cluster>,
    circuits: Store<Circuit>,
    tags: Store<Tag>,
    users: Store<User>,
    tunnels: Store<Tunnel>,
    wireless_lans: Store<WirelessLan>,
    data_sources: Store<DataSource>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn insert<R: Resource>(store: &Store<R>, resource: R) {
    lock(store).insert(resource.id(), resource);
}

/// Status payload of a stock NetBox 4.1 install
fn default_system_status() -> SystemStatus {
    let Value::Object(map) = json!({
        "django-version": "5.0.9",
        "installed-apps": {
            "django_filters": "24.3",
            "django_prometheus": "2.3.1",
            "rest_framework": "3.15.2"
        },
        "netbox-version": "4.1.6",
        "netbox-full-version": "4.1.6",
        "plugins": {},
        "python-version": "3.12.3",
        "rq-workers-running": 1
    }) else {
        return SystemStatus(Map::new());
    };
    SystemStatus(map)
}

impl MockNetBoxClient {
    /// Create a new mock client with empty stores and a valid token
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            system_status: Arc::new(Mutex::new(default_system_status())),
            status_code: Arc::new(Mutex::new(StatusCode::OK)),
            token_rejected: Arc::new(AtomicBool::new(false)),
            tenants: Store::default(),
            sites: Store::default(),
            prefixes: Store::default(),
            clusters: Store::default(),
            circuits: Store::default(),
            tags: Store::default(),
            users: Store::default(),
            tunnels: Store::default(),
            wireless_lans: Store::default(),
            data_sources: Store::default(),
        }
    }

    /// Reject the token on every authenticated call; status keeps working
    pub fn reject_token(&self) {
        self.token_rejected.store(true, Ordering::SeqCst);
    }

    /// Report `code` on successful calls instead of 200
    pub fn set_status_code(&self, code: StatusCode) {
        *lock(&self.status_code) = code;
    }

    /// Replace the status payload
    pub fn set_system_status(&self, status: SystemStatus) {
        *lock(&self.system_status) = status;
    }

    /// Drop one key from the status payload
    pub fn remove_status_key(&self, key: &str) {
        lock(&self.system_status).0.remove(key);
    }

    pub fn add_tenant(&self, tenant: Tenant) {
        insert(&self.tenants, tenant);
    }

    pub fn add_site(&self, site: Site) {
        insert(&self.sites, site);
    }

    pub fn add_prefix(&self, prefix: Prefix) {
        insert(&self.prefixes, prefix);
    }

    pub fn add_cluster(&self, cluster: Cluster) {
        insert(&self.clusters, cluster);
    }

    pub fn add_circuit(&self, circuit: Circuit) {
        insert(&self.circuits, circuit);
    }

    pub fn add_tag(&self, tag: Tag) {
        insert(&self.tags, tag);
    }

    pub fn add_user(&self, user: User) {
        insert(&self.users, user);
    }

    pub fn add_tunnel(&self, tunnel: Tunnel) {
        insert(&self.tunnels, tunnel);
    }

    pub fn add_wireless_lan(&self, wireless_lan: WirelessLan) {
        insert(&self.wireless_lans, wireless_lan);
    }

    pub fn add_data_source(&self, data_source: DataSource) {
        insert(&self.data_sources, data_source);
    }

    fn authorize(&self, path: &str) -> Result<(), NetBoxError> {
        if self.token_rejected.load(Ordering::SeqCst) {
            return Err(NetBoxError::Authentication(format!(
                "GET {} rejected: 403 Forbidden - {{\"detail\":\"Invalid token\"}}",
                path
            )));
        }
        Ok(())
    }

    fn page<R: Resource>(&self, store: &Store<R>) -> ListResult<R> {
        self.authorize(&format!("/api/{}/", R::ENDPOINT))?;

        let mut results: Vec<R> = lock(store).values().cloned().collect();
        results.sort_by_key(|r| r.id());

        Ok(ApiResponse {
            status: *lock(&self.status_code),
            data: PaginatedResponse {
                count: u64::try_from(results.len()).unwrap_or(u64::MAX),
                next: None,
                previous: None,
                results,
            },
        })
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for MockNetBoxClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        self.authorize("/api/users/config/")
    }

    async fn status(&self) -> Result<ApiResponse<SystemStatus>, NetBoxError> {
        Ok(ApiResponse {
            status: *lock(&self.status_code),
            data: lock(&self.system_status).clone(),
        })
    }

    async fn list_tenants(&self, _filters: &[(&str, &str)]) -> ListResult<Tenant> {
        self.page(&self.tenants)
    }

    async fn list_sites(&self, _filters: &[(&str, &str)]) -> ListResult<Site> {
        self.page(&self.sites)
    }

    async fn list_prefixes(&self, _filters: &[(&str, &str)]) -> ListResult<Prefix> {
        self.page(&self.prefixes)
    }

    async fn list_clusters(&self, _filters: &[(&str, &str)]) -> ListResult<Cluster> {
        self.page(&self.clusters)
    }

    async fn list_circuits(&self, _filters: &[(&str, &str)]) -> ListResult<Circuit> {
        self.page(&self.circuits)
    }

    async fn list_tags(&self, _filters: &[(&str, &str)]) -> ListResult<Tag> {
        self.page(&self.tags)
    }

    async fn list_users(&self, _filters: &[(&str, &str)]) -> ListResult<User> {
        self.page(&self.users)
    }

    async fn list_tunnels(&self, _filters: &[(&str, &str)]) -> ListResult<Tunnel> {
        self.page(&self.tunnels)
    }

    async fn list_wireless_lans(&self, _filters: &[(&str, &str)]) -> ListResult<WirelessLan> {
        self.page(&self.wireless_lans)
    }

    async fn list_data_sources(&self, _filters: &[(&str, &str)]) -> ListResult<DataSource> {
        self.page(&self.data_sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_state() {
        let client = MockNetBoxClient::new("http://test-netbox");
        let clone = client.clone();
        clone.add_user(fixtures::user(1, "admin"));

        let page = client.list_users(&[]).await.expect("users list").into_inner();
        assert_eq!(page.count(), 1);
        assert_eq!(page.results[0].username, "admin");
    }

    #[tokio::test]
    async fn test_results_are_ordered_by_id() {
        let client = MockNetBoxClient::new("http://test-netbox");
        client.add_circuit(fixtures::circuit(7, "CID-7"));
        client.add_circuit(fixtures::circuit(3, "CID-3"));

        let page = client.list_circuits(&[]).await.expect("circuits list").into_inner();
        let ids: Vec<u64> = page.results.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 7]);
    }

    #[tokio::test]
    async fn test_rejected_token_fails_validation() {
        let client = MockNetBoxClient::new("http://test-netbox");
        assert!(client.validate_token().await.is_ok());

        client.reject_token();
        assert!(matches!(
            client.validate_token().await,
            Err(NetBoxError::Authentication(_))
        ));
        assert!(client.status().await.is_ok());
    }
}
