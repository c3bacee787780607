//! Tenancy models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NestedObject, NestedTag, Resource, null_as_default};

/// Tenant model matching NetBox TenantSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub group: Option<NestedObject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Resource for Tenant {
    const ENDPOINT: &'static str = "tenancy/tenants";

    fn id(&self) -> u64 {
        self.id
    }
}
