//! Infrastructure layer: record storage and demo data.

pub mod seed;
pub mod store;

pub use seed::{SeedData, SeedError};
pub use store::{InMemoryRecordStore, RecordStore, StoreError};
