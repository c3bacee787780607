//! Minimal resource models for seeding the mock

use crate::models::*;

fn object_url<R: Resource>(id: u64) -> String {
    format!("/api/{}/{}/", R::ENDPOINT, id)
}

fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

pub fn tenant(id: u64, name: &str) -> Tenant {
    Tenant {
        id,
        url: object_url::<Tenant>(id),
        display: name.to_string(),
        name: name.to_string(),
        slug: slugify(name),
        ..Default::default()
    }
}

pub fn site(id: u64, name: &str) -> Site {
    Site {
        id,
        url: object_url::<Site>(id),
        display: name.to_string(),
        name: name.to_string(),
        slug: slugify(name),
        status: ChoiceField::new("active", "Active"),
        ..Default::default()
    }
}

/// `prefix` in CIDR form, e.g. `10.0.0.0/24`
pub fn prefix(id: u64, prefix: &str) -> Prefix {
    let (value, label) = if prefix.contains(':') { (6, "IPv6") } else { (4, "IPv4") };
    Prefix {
        id,
        url: object_url::<Prefix>(id),
        display: prefix.to_string(),
        family: ChoiceField {
            value: value.into(),
            label: label.to_string(),
        },
        prefix: prefix.to_string(),
        status: ChoiceField::new("active", "Active"),
        ..Default::default()
    }
}

pub fn cluster(id: u64, name: &str) -> Cluster {
    Cluster {
        id,
        url: object_url::<Cluster>(id),
        display: name.to_string(),
        name: name.to_string(),
        status: ChoiceField::new("active", "Active"),
        ..Default::default()
    }
}

pub fn circuit(id: u64, cid: &str) -> Circuit {
    Circuit {
        id,
        url: object_url::<Circuit>(id),
        display: cid.to_string(),
        cid: cid.to_string(),
        status: ChoiceField::new("active", "Active"),
        ..Default::default()
    }
}

pub fn tag(id: u64, name: &str) -> Tag {
    Tag {
        id,
        url: object_url::<Tag>(id),
        display: name.to_string(),
        name: name.to_string(),
        slug: slugify(name),
        color: "9e9e9e".to_string(),
        ..Default::default()
    }
}

pub fn user(id: u64, username: &str) -> User {
    User {
        id,
        url: object_url::<User>(id),
        display: username.to_string(),
        username: username.to_string(),
        is_active: true,
        ..Default::default()
    }
}

pub fn tunnel(id: u64, name: &str) -> Tunnel {
    Tunnel {
        id,
        url: object_url::<Tunnel>(id),
        display: name.to_string(),
        name: name.to_string(),
        status: ChoiceField::new("active", "Active"),
        encapsulation: ChoiceField::new("ipsec-tunnel", "IPsec - Tunnel"),
        ..Default::default()
    }
}

pub fn wireless_lan(id: u64, ssid: &str) -> WirelessLan {
    WirelessLan {
        id,
        url: object_url::<WirelessLan>(id),
        display: ssid.to_string(),
        ssid: ssid.to_string(),
        status: ChoiceField::new("active", "Active"),
        ..Default::default()
    }
}

pub fn data_source(id: u64, name: &str) -> DataSource {
    DataSource {
        id,
        url: object_url::<DataSource>(id),
        display: name.to_string(),
        name: name.to_string(),
        source_type: "local".into(),
        source_url: "file:///opt/netbox/data".to_string(),
        enabled: true,
        status: ChoiceField::new("new", "New"),
        ..Default::default()
    }
}
