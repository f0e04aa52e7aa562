//! Credential check against a single configured account.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wms_core::RecordId;

/// Login request body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Profile returned to the client after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: RecordId,
    pub username: String,
    pub role: String,
    pub name: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Credential verification seam.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> Result<UserProfile, AuthError>;
}

/// Accepts exactly one username/password pair.
#[derive(Debug, Clone)]
pub struct StaticAuthenticator {
    username: String,
    password: String,
}

impl StaticAuthenticator {
    pub const DEMO_USERNAME: &'static str = "admin";
    pub const DEMO_PASSWORD: &'static str = "admin123";

    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The demo account (`admin` / `admin123`).
    pub fn demo() -> Self {
        Self::new(Self::DEMO_USERNAME, Self::DEMO_PASSWORD)
    }

    fn profile(&self) -> UserProfile {
        UserProfile {
            id: RecordId::new(1),
            username: self.username.clone(),
            role: "admin".to_string(),
            name: "System Administrator".to_string(),
        }
    }
}

impl Default for StaticAuthenticator {
    fn default() -> Self {
        Self::demo()
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> Result<UserProfile, AuthError> {
        let user_ok = constant_time_eq(credentials.username.as_bytes(), self.username.as_bytes());
        let pass_ok = constant_time_eq(credentials.password.as_bytes(), self.password.as_bytes());

        if user_ok && pass_ok {
            Ok(self.profile())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
