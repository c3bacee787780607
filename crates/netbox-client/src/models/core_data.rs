//! Core app models (data sources)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChoiceField, Resource, null_as_default};

/// Data source model matching NetBox DataSourceSerializer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    pub name: String,
    /// Backend kind (`local`, `git`, `amazon-s3`); a plain string on older releases
    #[serde(default, deserialize_with = "null_as_default", rename = "type")]
    pub source_type: serde_json::Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ChoiceField,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub file_count: Option<u64>,
    #[serde(default)]
    pub last_synced: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Resource for DataSource {
    const ENDPOINT: &'static str = "core/data-sources";

    fn id(&self) -> u64 {
        self.id
    }
}
