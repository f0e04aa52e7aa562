use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wms_core::{DocumentNumber, DomainResult, Entity, RecordId, validate};

pub const CHECK_NUMBER: DocumentNumber = DocumentNumber::new("QC");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckType {
    #[default]
    Inbound,
    Outbound,
    CycleCount,
    DamageInspection,
    ExpiryCheck,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    #[default]
    Pending,
    InProgress,
    Passed,
    Failed,
    Quarantine,
}

impl CheckStatus {
    /// Statuses that conclude an inspection.
    pub fn is_final(self) -> bool {
        matches!(
            self,
            CheckStatus::Passed | CheckStatus::Failed | CheckStatus::Quarantine
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCondition {
    #[default]
    Good,
    Damaged,
    Expired,
    Contaminated,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityItem {
    pub id: RecordId,
    pub sku: String,
    pub name: String,
    pub expected_quantity: u32,
    pub actual_quantity: u32,
    pub condition: ItemCondition,
    /// 0..=100.
    pub quality_score: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQualityItem {
    pub sku: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub expected_quantity: u32,
    #[serde(default)]
    pub actual_quantity: u32,
    #[serde(default)]
    pub condition: ItemCondition,
    #[serde(default)]
    pub quality_score: f64,
    #[serde(default)]
    pub notes: String,
}

impl QualityItem {
    pub fn from_lines(lines: Vec<NewQualityItem>) -> DomainResult<Vec<QualityItem>> {
        lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| {
                validate::require_non_empty("item sku", &line.sku)?;
                validate::require_percent("qualityScore", line.quality_score)?;
                Ok(QualityItem {
                    id: RecordId::new(idx as u64 + 1),
                    sku: line.sku,
                    name: line.name,
                    expected_quantity: line.expected_quantity,
                    actual_quantity: line.actual_quantity,
                    condition: line.condition,
                    quality_score: line.quality_score,
                    notes: line.notes,
                })
            })
            .collect()
    }

    /// Counted quantity minus expected quantity.
    pub fn variance(&self) -> i64 {
        i64::from(self.actual_quantity) - i64::from(self.expected_quantity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityCheck {
    pub id: RecordId,
    pub check_number: String,
    #[serde(rename = "type")]
    pub check_type: CheckType,
    pub status: CheckStatus,
    pub warehouse_id: RecordId,
    pub location: String,
    pub inspector: String,
    pub items: Vec<QualityItem>,
    pub total_items: u32,
    pub passed_items: u32,
    pub failed_items: u32,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Entity for QualityCheck {
    const RESOURCE: &'static str = "Quality check";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQualityCheck {
    #[serde(rename = "type", default)]
    pub check_type: CheckType,
    pub warehouse_id: RecordId,
    #[serde(default)]
    pub location: String,
    pub inspector: String,
    #[serde(default)]
    pub items: Vec<NewQualityItem>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityPatch {
    #[serde(rename = "type")]
    pub check_type: Option<CheckType>,
    pub status: Option<CheckStatus>,
    pub warehouse_id: Option<RecordId>,
    pub location: Option<String>,
    pub inspector: Option<String>,
    pub items: Option<Vec<NewQualityItem>>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct QualityFilter {
    pub status: Option<CheckStatus>,
    pub check_type: Option<CheckType>,
    pub warehouse_id: Option<RecordId>,
}

impl QualityFilter {
    pub fn matches(&self, check: &QualityCheck) -> bool {
        self.status.is_none_or(|s| check.status == s)
            && self.check_type.is_none_or(|t| check.check_type == t)
            && self.warehouse_id.is_none_or(|w| check.warehouse_id == w)
    }
}

impl QualityCheck {
    /// Open a new inspection in `pending`.
    pub fn create(id: RecordId, new: NewQualityCheck, now: DateTime<Utc>) -> DomainResult<Self> {
        validate::require_non_empty("inspector", &new.inspector)?;
        let mut check = Self {
            id,
            check_number: CHECK_NUMBER.format(id, now),
            check_type: new.check_type,
            status: CheckStatus::Pending,
            warehouse_id: new.warehouse_id,
            location: new.location,
            inspector: new.inspector,
            items: QualityItem::from_lines(new.items)?,
            total_items: 0,
            passed_items: 0,
            failed_items: 0,
            notes: new.notes,
            created_at: now,
            completed_at: None,
        };
        check.recompute_counts();
        Ok(check)
    }

    pub fn apply_patch(&mut self, patch: QualityPatch, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(v) = patch.check_type {
            self.check_type = v;
        }
        if let Some(v) = patch.warehouse_id {
            self.warehouse_id = v;
        }
        if let Some(v) = patch.location {
            self.location = v;
        }
        if let Some(v) = patch.inspector {
            validate::require_non_empty("inspector", &v)?;
            self.inspector = v;
        }
        if let Some(items) = patch.items {
            self.items = QualityItem::from_lines(items)?;
            self.recompute_counts();
        }
        if let Some(v) = patch.notes {
            self.notes = v;
        }
        if let Some(status) = patch.status {
            self.transition(status, now);
        }
        Ok(())
    }

    /// Concluding statuses stamp `completed_at` once.
    fn transition(&mut self, status: CheckStatus, now: DateTime<Utc>) {
        if status.is_final() {
            self.completed_at.get_or_insert(now);
        }
        self.status = status;
    }

    fn recompute_counts(&mut self) {
        let passed = self
            .items
            .iter()
            .filter(|i| i.condition == ItemCondition::Good)
            .count() as u32;
        self.total_items = self.items.len() as u32;
        self.passed_items = passed;
        self.failed_items = self.total_items - passed;
    }

    /// Mean item quality score; `None` for an empty check.
    pub fn average_score(&self) -> Option<f64> {
        if self.items.is_empty() {
            return None;
        }
        let sum: f64 = self.items.iter().map(|i| i.quality_score).sum();
        Some(sum / self.items.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;
    use wms_core::DomainError;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap()
    }

    fn item(sku: &str, condition: ItemCondition, score: f64) -> NewQualityItem {
        NewQualityItem {
            sku: sku.to_string(),
            name: String::new(),
            expected_quantity: 100,
            actual_quantity: 98,
            condition,
            quality_score: score,
            notes: String::new(),
        }
    }

    fn inbound(items: Vec<NewQualityItem>) -> QualityCheck {
        QualityCheck::create(
            RecordId::new(3),
            NewQualityCheck {
                check_type: CheckType::Inbound,
                warehouse_id: RecordId::new(1),
                location: "Receiving Dock A".to_string(),
                inspector: "Sarah Johnson".to_string(),
                items,
                notes: String::new(),
            },
            t0(),
        )
        .unwrap()
    }

    #[test]
    fn counts_follow_item_conditions() {
        let check = inbound(vec![
            item("SKU001", ItemCondition::Good, 95.0),
            item("SKU002", ItemCondition::Damaged, 40.0),
            item("SKU003", ItemCondition::Expired, 10.0),
        ]);
        assert_eq!(check.check_number, "QC-2024-003");
        assert_eq!(check.status, CheckStatus::Pending);
        assert_eq!(
            (check.total_items, check.passed_items, check.failed_items),
            (3, 1, 2)
        );
        let avg = check.average_score().unwrap();
        assert!((avg - 145.0 / 3.0).abs() < 1e-9);
        assert_eq!(check.items[0].variance(), -2);
    }

    #[test]
    fn concluding_stamps_completed_at_once() {
        let mut check = inbound(vec![item("SKU001", ItemCondition::Good, 95.0)]);
        check
            .apply_patch(
                QualityPatch {
                    status: Some(CheckStatus::InProgress),
                    ..Default::default()
                },
                t0(),
            )
            .unwrap();
        assert_eq!(check.completed_at, None);

        let done = t0() + Duration::hours(2);
        check
            .apply_patch(
                QualityPatch {
                    status: Some(CheckStatus::Passed),
                    ..Default::default()
                },
                done,
            )
            .unwrap();
        assert_eq!(check.completed_at, Some(done));

        check
            .apply_patch(
                QualityPatch {
                    status: Some(CheckStatus::Quarantine),
                    ..Default::default()
                },
                done + Duration::hours(1),
            )
            .unwrap();
        assert_eq!(check.completed_at, Some(done));
    }

    #[test]
    fn score_out_of_range_is_rejected() {
        let err = QualityCheck::create(
            RecordId::new(1),
            NewQualityCheck {
                check_type: CheckType::Outbound,
                warehouse_id: RecordId::new(1),
                location: String::new(),
                inspector: "Mike Davis".to_string(),
                items: vec![item("SKU002", ItemCondition::Good, 101.0)],
                notes: String::new(),
            },
            t0(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: passed + failed == total == number of items.
        #[test]
        fn counts_partition_items(conditions in prop::collection::vec(0u8..4, 0..20)) {
            let items = conditions
                .iter()
                .map(|c| {
                    let condition = match c {
                        0 => ItemCondition::Good,
                        1 => ItemCondition::Damaged,
                        2 => ItemCondition::Expired,
                        _ => ItemCondition::Contaminated,
                    };
                    item("SKU", condition, 50.0)
                })
                .collect::<Vec<_>>();
            let check = inbound(items);
            let good = conditions.iter().filter(|c| **c == 0).count() as u32;
            prop_assert_eq!(check.total_items as usize, conditions.len());
            prop_assert_eq!(check.passed_items, good);
            prop_assert_eq!(check.passed_items + check.failed_items, check.total_items);
        }
    }
}
