//! Virtualization models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChoiceField, NestedObject, NestedTag, Resource, null_as_default};

/// Cluster model matching NetBox ClusterSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub cluster_type: Option<NestedObject>,
    #[serde(default)]
    pub group: Option<NestedObject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ChoiceField,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub device_count: Option<u64>,
    #[serde(default)]
    pub virtualmachine_count: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Resource for Cluster {
    const ENDPOINT: &'static str = "virtualization/clusters";

    fn id(&self) -> u64 {
        self.id
    }
}
