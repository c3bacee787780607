//! VPN models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChoiceField, NestedObject, NestedTag, Resource, null_as_default};

/// Tunnel model matching NetBox TunnelSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tunnel {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ChoiceField,
    #[serde(default)]
    pub group: Option<NestedObject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub encapsulation: ChoiceField,
    #[serde(default)]
    pub ipsec_profile: Option<NestedObject>,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub tunnel_id: Option<u64>,
    #[serde(default)]
    pub terminations_count: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Resource for Tunnel {
    const ENDPOINT: &'static str = "vpn/tunnels";

    fn id(&self) -> u64 {
        self.id
    }
}
