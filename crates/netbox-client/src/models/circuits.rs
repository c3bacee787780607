//! Circuit models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{ChoiceField, NestedObject, NestedTag, Resource, null_as_default};

/// Circuit model matching NetBox CircuitSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    /// Provider-assigned circuit ID
    pub cid: String,
    #[serde(default)]
    pub provider: Option<NestedObject>,
    #[serde(default, rename = "type")]
    pub circuit_type: Option<NestedObject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ChoiceField,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default)]
    pub install_date: Option<NaiveDate>,
    #[serde(default)]
    pub commit_rate: Option<u64>, // Kbps
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Resource for Circuit {
    const ENDPOINT: &'static str = "circuits/circuits";

    fn id(&self) -> u64 {
        self.id
    }
}
