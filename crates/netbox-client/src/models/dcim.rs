//! DCIM models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChoiceField, NestedObject, NestedTag, Resource, null_as_default};

/// Site model matching NetBox SiteSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ChoiceField,
    #[serde(default)]
    pub region: Option<NestedObject>,
    #[serde(default)]
    pub group: Option<NestedObject>,
    #[serde(default)]
    pub tenant: Option<NestedObject>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub facility: String,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Resource for Site {
    const ENDPOINT: &'static str = "dcim/sites";

    fn id(&self) -> u64 {
        self.id
    }
}
