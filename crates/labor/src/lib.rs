//! Labor management: workers, shift rosters and daily productivity records.

pub mod productivity;
pub mod shift;
pub mod worker;

pub use productivity::{
    NewProductivityRecord, ProductivityFilter, ProductivityPatch, ProductivityRecord,
};
pub use shift::{NewShift, Shift, ShiftFilter, ShiftPatch, ShiftStatus};
pub use worker::{NewWorker, ShiftPattern, Worker, WorkerFilter, WorkerPatch, WorkerRole, WorkerStatus};
