//! `wms-core`: shared building blocks for the warehouse domain crates.
//!
//! This crate contains **pure domain** primitives (no HTTP or storage concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod nullable;
pub mod number;
pub mod priority;
pub mod validate;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use money::{apply_rate, checked_sum, line_total, round_money};
pub use number::DocumentNumber;
pub use priority::Priority;
