//! NetBox REST API Client
//!
//! A read-only Rust client for the NetBox REST API, plus the smoke checks
//! used to verify that a live NetBox instance answers on every resource
//! category this workspace cares about.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::{Configuration, NetBoxClient, Tenant};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // NETBOX_URL / NETBOX_API_TOKEN, with local defaults
//! let client = NetBoxClient::from_config(&Configuration::from_env())?;
//!
//! // The status endpoint answers without a valid token
//! let status = client.status().await?;
//! println!("NetBox {}", status.data.netbox_version().unwrap_or("unknown"));
//!
//! // Everything else needs one
//! let tenants = client.list::<Tenant>(&[]).await?;
//! println!("Found {} tenants", tenants.data.count());
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Status**: server, Django and Python versions
//! - **Listing**: tenants, sites, prefixes, clusters, circuits, tags, users,
//!   tunnels, wireless LANs and data sources, single page or all pages
//! - **Smoke checks**: [`smoke::run_check`] / [`smoke::run_all`]
//! - **Mocking**: `MockNetBoxClient` behind the `test-util` feature

pub mod client;
pub mod common;
pub mod config;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod netbox_trait;
pub mod smoke;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::NetBoxClient;
pub use common::{ApiResponse, HttpClient, PaginatedResponse};
pub use config::Configuration;
pub use error::{NetBoxError, SmokeFailure};
pub use models::*;
pub use netbox_trait::{ListResult, NetBoxClientTrait};
pub use smoke::{ResourceCategory, SmokeDetail, SmokeReport};
#[cfg(any(test, feature = "test-util"))]
pub use mock::MockNetBoxClient;
