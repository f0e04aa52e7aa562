//! Record collections.
//!
//! Every resource lives in its own collection keyed by a numeric id assigned
//! on insert. Collections are independent: nothing here enforces references
//! between them.

mod record_store;

pub use record_store::{InMemoryRecordStore, RecordStore, StoreError};
