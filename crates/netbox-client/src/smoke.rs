//! Live-server smoke checks
//!
//! One call per resource category, then the same three checks every time:
//! the call succeeded, the status is 200, and the payload carries what the
//! category promises (version keys for status, a count for lists).

use std::fmt;

use reqwest::StatusCode;
use tracing::{info, warn};

use crate::common::{ApiResponse, PaginatedResponse};
use crate::error::{NetBoxError, SmokeFailure};
use crate::models::SystemStatus;
use crate::netbox_trait::NetBoxClientTrait;

/// Resource categories covered by the smoke suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    /// `GET /api/status/`
    Status,
    /// `tenancy/tenants`
    Tenants,
    /// `dcim/sites`
    Sites,
    /// `ipam/prefixes`
    Prefixes,
    /// `virtualization/clusters`
    Clusters,
    /// `circuits/circuits`
    Circuits,
    /// `extras/tags`
    Tags,
    /// `users/users`
    Users,
    /// `vpn/tunnels`
    Tunnels,
    /// `wireless/wireless-lans`
    WirelessLans,
    /// `core/data-sources`
    DataSources,
}

impl ResourceCategory {
    /// Every category, in the order `run_all` checks them
    pub const ALL: [Self; 11] = [
        Self::Status,
        Self::Tenants,
        Self::Sites,
        Self::Prefixes,
        Self::Clusters,
        Self::Circuits,
        Self::Tags,
        Self::Users,
        Self::Tunnels,
        Self::WirelessLans,
        Self::DataSources,
    ];

    /// Human-readable plural used in log lines
    pub fn label(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Tenants => "tenants",
            Self::Sites => "sites",
            Self::Prefixes => "prefixes",
            Self::Clusters => "clusters",
            Self::Circuits => "circuits",
            Self::Tags => "tags",
            Self::Users => "users",
            Self::Tunnels => "tunnels",
            Self::WirelessLans => "wireless LANs",
            Self::DataSources => "data sources",
        }
    }

    /// Whether the server demands a valid token for this category.
    ///
    /// Status is served to anonymous clients; every list endpoint is not.
    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::Status)
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a passing check observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmokeDetail {
    /// Status endpoint versions
    Versions {
        /// `netbox-version`
        netbox: String,
        /// `django-version`
        django: String,
        /// `python-version`
        python: String,
    },
    /// Object count reported by a list endpoint
    Count(u64),
}

/// A passing smoke check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmokeReport {
    /// Category that was checked
    pub category: ResourceCategory,
    /// HTTP status observed
    pub status: u16,
    /// Versions or count
    pub detail: SmokeDetail,
}

impl SmokeReport {
    /// Count for list categories, `None` for status
    pub fn count(&self) -> Option<u64> {
        match self.detail {
            SmokeDetail::Count(count) => Some(count),
            SmokeDetail::Versions { .. } => None,
        }
    }
}

/// Run the check for one category
pub async fn run_check<C>(client: &C, category: ResourceCategory) -> Result<SmokeReport, SmokeFailure>
where
    C: NetBoxClientTrait + ?Sized,
{
    let filters: &[(&str, &str)] = &[];
    let request = |source| request_failure(category, source);

    let report = match category {
        ResourceCategory::Status => check_status(client.status().await.map_err(request)?)?,
        ResourceCategory::Tenants => check_list(category, client.list_tenants(filters).await)?,
        ResourceCategory::Sites => check_list(category, client.list_sites(filters).await)?,
        ResourceCategory::Prefixes => check_list(category, client.list_prefixes(filters).await)?,
        ResourceCategory::Clusters => check_list(category, client.list_clusters(filters).await)?,
        ResourceCategory::Circuits => check_list(category, client.list_circuits(filters).await)?,
        ResourceCategory::Tags => check_list(category, client.list_tags(filters).await)?,
        ResourceCategory::Users => check_list(category, client.list_users(filters).await)?,
        ResourceCategory::Tunnels => check_list(category, client.list_tunnels(filters).await)?,
        ResourceCategory::WirelessLans => {
            check_list(category, client.list_wireless_lans(filters).await)?
        }
        ResourceCategory::DataSources => {
            check_list(category, client.list_data_sources(filters).await)?
        }
    };

    match &report.detail {
        SmokeDetail::Versions { netbox, django, python } => {
            info!("NetBox version: {}", netbox);
            info!("Django version: {}", django);
            info!("Python version: {}", python);
        }
        SmokeDetail::Count(count) => info!("Found {} {}", count, category),
    }

    Ok(report)
}

/// Run every category in order. A failure is recorded and the run continues.
pub async fn run_all<C>(client: &C) -> Vec<(ResourceCategory, Result<SmokeReport, SmokeFailure>)>
where
    C: NetBoxClientTrait + ?Sized,
{
    let mut outcomes = Vec::with_capacity(ResourceCategory::ALL.len());
    for category in ResourceCategory::ALL {
        let outcome = run_check(client, category).await;
        if let Err(failure) = &outcome {
            warn!("Smoke check failed: {}", failure);
        }
        outcomes.push((category, outcome));
    }
    outcomes
}

// A bodiless 2xx is a status mismatch, not a broken request.
fn request_failure(category: ResourceCategory, source: NetBoxError) -> SmokeFailure {
    match source {
        NetBoxError::EmptyBody(actual) if actual != StatusCode::OK.as_u16() => {
            SmokeFailure::UnexpectedStatus { category, actual }
        }
        source => SmokeFailure::Request { category, source },
    }
}

fn expect_ok(category: ResourceCategory, status: StatusCode) -> Result<(), SmokeFailure> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(SmokeFailure::UnexpectedStatus {
            category,
            actual: status.as_u16(),
        })
    }
}

fn check_status(response: ApiResponse<SystemStatus>) -> Result<SmokeReport, SmokeFailure> {
    let category = ResourceCategory::Status;
    expect_ok(category, response.status)?;

    if let Some(field) = response.data.missing_version_keys().into_iter().next() {
        return Err(SmokeFailure::MissingField { category, field });
    }

    // Presence is what matters; non-string values are rendered as JSON.
    let render = |key: &str| {
        response
            .data
            .get(key)
            .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string))
            .unwrap_or_default()
    };

    Ok(SmokeReport {
        category,
        status: response.status_code(),
        detail: SmokeDetail::Versions {
            netbox: render(crate::models::NETBOX_VERSION_KEY),
            django: render(crate::models::DJANGO_VERSION_KEY),
            python: render(crate::models::PYTHON_VERSION_KEY),
        },
    })
}

fn check_list<T>(
    category: ResourceCategory,
    result: Result<ApiResponse<PaginatedResponse<T>>, NetBoxError>,
) -> Result<SmokeReport, SmokeFailure> {
    let response = result.map_err(|source| request_failure(category, source))?;
    expect_ok(category, response.status)?;

    Ok(SmokeReport {
        category,
        status: response.status_code(),
        detail: SmokeDetail::Count(response.data.count()),
    })
}
