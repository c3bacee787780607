//! User models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{NestedObject, Resource, null_as_default};

/// User model matching NetBox UserSerializer (password is write-only)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_staff: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<NestedObject>,
}

impl Resource for User {
    const ENDPOINT: &'static str = "users/users";

    fn id(&self) -> u64 {
        self.id
    }
}
