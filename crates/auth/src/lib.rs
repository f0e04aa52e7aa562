//! `wms-auth`: demo login boundary.
//!
//! A single configured username/password pair is accepted; there is no
//! session store and no route requires the issued token.
//!
//! This crate is intentionally decoupled from HTTP.

pub mod credentials;
pub mod session;

pub use credentials::{AuthError, Authenticator, Credentials, StaticAuthenticator, UserProfile};
pub use session::SessionToken;
