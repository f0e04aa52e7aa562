//! Entity trait: identity + continuity across state changes.

use crate::RecordId;

/// Entity marker + minimal interface.
///
/// Every warehouse record is addressed by a collection-assigned numeric id.
pub trait Entity {
    /// Returns the record identifier.
    fn id(&self) -> RecordId;

    /// Human-readable resource name used in messages ("Order", "Task", ...).
    const RESOURCE: &'static str;
}
