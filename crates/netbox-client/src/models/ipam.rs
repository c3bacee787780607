//! IPAM models
//! See: netbox/netbox/ipam/api/serializers_/ip.py

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChoiceField, NestedObject, NestedTag, Resource, null_as_default};

/// Prefix model matching NetBox PrefixSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prefix {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub family: ChoiceField, // value 4 or 6
    pub prefix: String, // e.g., "192.168.1.0/24"
    #[serde(default)]
    pub vrf: Option<NestedObject>,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub vlan: Option<NestedObject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ChoiceField,
    #[serde(default)]
    pub role: Option<NestedObject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_pool: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mark_utilized: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub children: Option<u64>,
    #[serde(default, rename = "_depth")]
    pub depth: Option<u64>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Resource for Prefix {
    const ENDPOINT: &'static str = "ipam/prefixes";

    fn id(&self) -> u64 {
        self.id
    }
}
