//! Human-facing document numbers (`ORD-2024-001`, `ASN-2024-002`, ...).

use chrono::{DateTime, Datelike, Utc};

use crate::RecordId;

/// Document number builder: `<PREFIX>-<YEAR>-<SEQ padded to 3>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DocumentNumber {
    prefix: &'static str,
}

impl DocumentNumber {
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// Format the number for a record created at `at`, using its id as sequence.
    pub fn format(&self, id: RecordId, at: DateTime<Utc>) -> String {
        format!("{}-{}-{:03}", self.prefix, at.year(), id.get())
    }
}
