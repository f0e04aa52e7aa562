//! Demo session tokens.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Opaque token handed to the client after login.
///
/// Tokens are not signed or stored; they only carry the issue time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn issue(now: DateTime<Utc>) -> Self {
        Self(format!("demo-jwt-token-{}", now.timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
