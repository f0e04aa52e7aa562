//! Process configuration read from the environment once at startup.

use std::net::SocketAddr;

use wms_auth::StaticAuthenticator;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Load the demo records on startup.
    pub seed_data: bool,
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            seed_data: true,
            admin_username: StaticAuthenticator::DEMO_USERNAME.to_string(),
            admin_password: StaticAuthenticator::DEMO_PASSWORD.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparsable values fall
    /// back to the defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = match lookup("WMS_BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "WMS_BIND_ADDR is not a socket address; using {DEFAULT_BIND_ADDR}");
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let seed_data = match lookup("WMS_SEED_DATA") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "WMS_SEED_DATA is not a boolean; seeding demo data");
                defaults.seed_data
            }),
            None => defaults.seed_data,
        };

        let admin_username = lookup("WMS_ADMIN_USERNAME").unwrap_or(defaults.admin_username);
        let admin_password = lookup("WMS_ADMIN_PASSWORD").unwrap_or_else(|| {
            tracing::warn!("WMS_ADMIN_PASSWORD not set; using the demo password");
            defaults.admin_password
        });

        Self {
            bind_addr,
            seed_data,
            admin_username,
            admin_password,
        }
    }

    pub fn authenticator(&self) -> StaticAuthenticator {
        StaticAuthenticator::new(&self.admin_username, &self.admin_password)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(AppConfig::from_lookup(lookup(&[])), AppConfig::default());
    }

    #[test]
    fn values_are_read() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("WMS_BIND_ADDR", "127.0.0.1:9000"),
            ("WMS_SEED_DATA", "false"),
            ("WMS_ADMIN_USERNAME", "ops"),
            ("WMS_ADMIN_PASSWORD", "s3cret"),
        ]));
        assert_eq!(cfg.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert!(!cfg.seed_data);
        assert_eq!(cfg.admin_username, "ops");
        assert_eq!(cfg.admin_password, "s3cret");
    }

    #[test]
    fn bad_values_fall_back() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("WMS_BIND_ADDR", "not-an-addr"),
            ("WMS_SEED_DATA", "maybe"),
        ]));
        assert_eq!(cfg.bind_addr, AppConfig::default().bind_addr);
        assert!(cfg.seed_data);
    }
}
