//! Wireless models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChoiceField, NestedObject, NestedTag, Resource, null_as_default};

/// Wireless LAN model matching NetBox WirelessLANSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WirelessLan {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    pub ssid: String,
    #[serde(default)]
    pub group: Option<NestedObject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ChoiceField,
    #[serde(default)]
    pub vlan: Option<NestedObject>,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    /// Absent or null when the LAN is open
    #[serde(default)]
    pub auth_type: Option<ChoiceField>,
    #[serde(default)]
    pub auth_cipher: Option<ChoiceField>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Resource for WirelessLan {
    const ENDPOINT: &'static str = "wireless/wireless-lans";

    fn id(&self) -> u64 {
        self.id
    }
}
