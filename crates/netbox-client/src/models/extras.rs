//! Extras models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Resource, null_as_default};

/// Tag model matching NetBox TagSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String, // hex without '#'
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub tagged_items: Option<u64>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Resource for Tag {
    const ENDPOINT: &'static str = "extras/tags";

    fn id(&self) -> u64 {
        self.id
    }
}
