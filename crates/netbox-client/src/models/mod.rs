//! NetBox API models
//!
//! These models match the NetBox REST API serializers closely enough to
//! decode list and detail responses. Only identity fields are required;
//! everything else defaults so that minor NetBox releases keep decoding.

mod circuits;
mod core_data;
mod dcim;
mod extras;
mod ipam;
mod tenancy;
mod users;
mod virtualization;
mod vpn;
mod wireless;

pub use circuits::Circuit;
pub use core_data::DataSource;
pub use dcim::Site;
pub use extras::Tag;
pub use ipam::Prefix;
pub use tenancy::Tenant;
pub use users::User;
pub use virtualization::Cluster;
pub use vpn::Tunnel;
pub use wireless::WirelessLan;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A NetBox object type reachable under `/api/<ENDPOINT>/`
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Endpoint relative to `/api/`, e.g. `tenancy/tenants`
    const ENDPOINT: &'static str;

    /// NetBox primary key
    fn id(&self) -> u64;
}

/// Decode an explicit `null` as `T::default()`.
///
/// `#[serde(default)]` alone only covers a missing key; NetBox sends `null`
/// for unset strings and choices on some releases.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// NetBox choice field: `{"value": "active", "label": "Active"}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceField {
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
}

impl ChoiceField {
    /// Build a choice from a string value
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: Value::String(value.to_string()),
            label: label.to_string(),
        }
    }

    /// The value when it is a string (most choice sets)
    pub fn value_str(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// Brief representation of a related object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedObject {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedTag {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// Key holding the Django version in the status payload
pub const DJANGO_VERSION_KEY: &str = "django-version";
/// Key holding the Python version in the status payload
pub const PYTHON_VERSION_KEY: &str = "python-version";
/// Key holding the NetBox version in the status payload
pub const NETBOX_VERSION_KEY: &str = "netbox-version";

/// Payload of `GET /api/status/`.
///
/// NetBox returns a loosely structured object (installed apps, plugins,
/// worker counts), so it is kept as a JSON map with accessors for the
/// version keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemStatus(pub Map<String, Value>);

impl SystemStatus {
    /// Version keys every NetBox release reports
    pub const VERSION_KEYS: [&'static str; 3] =
        [DJANGO_VERSION_KEY, PYTHON_VERSION_KEY, NETBOX_VERSION_KEY];

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String value of `key`, if present and a string
    pub fn version(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn netbox_version(&self) -> Option<&str> {
        self.version(NETBOX_VERSION_KEY)
    }

    pub fn django_version(&self) -> Option<&str> {
        self.version(DJANGO_VERSION_KEY)
    }

    pub fn python_version(&self) -> Option<&str> {
        self.version(PYTHON_VERSION_KEY)
    }

    /// Version keys absent from this payload, in `VERSION_KEYS` order
    pub fn missing_version_keys(&self) -> Vec<&'static str> {
        Self::VERSION_KEYS
            .into_iter()
            .filter(|key| !self.contains_key(key))
            .collect()
    }
}
