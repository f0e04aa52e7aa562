//! Quality-control inspections.

pub mod check;

pub use check::{
    CHECK_NUMBER, CheckStatus, CheckType, ItemCondition, NewQualityCheck, NewQualityItem,
    QualityCheck, QualityFilter, QualityItem, QualityPatch,
};
