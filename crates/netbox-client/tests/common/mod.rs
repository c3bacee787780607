//! Shared setup for integration tests

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::sync::Once;

use netbox_client::{Configuration, NetBoxClient};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Filter used when `RUST_LOG` is unset; covers the test binaries' own targets
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install a test-friendly subscriber once per binary (`RUST_LOG` respected)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Client for the live server named by `NETBOX_URL` / `NETBOX_API_TOKEN`
pub fn test_client() -> NetBoxClient {
    init_tracing();
    let config = Configuration::from_env();
    NetBoxClient::from_config(&config).expect("Failed to create client")
}

/// Client bound to an arbitrary server, e.g. a wiremock instance
pub fn client_for(base_url: &str, token: &str) -> NetBoxClient {
    init_tracing();
    NetBoxClient::new(base_url.to_string(), token.to_string()).expect("Failed to create client")
}
