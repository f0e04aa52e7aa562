use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wms_core::{DocumentNumber, DomainError, DomainResult, Entity, RecordId, nullable, validate};

pub const ASN_NUMBER: DocumentNumber = DocumentNumber::new("ASN");

/// Inbound shipment lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceivingStatus {
    #[default]
    Scheduled,
    InTransit,
    Received,
    PutawayComplete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivingItem {
    pub id: RecordId,
    pub sku: String,
    pub name: String,
    pub expected_quantity: u32,
    pub received_quantity: u32,
    pub damaged_quantity: u32,
    /// Putaway location.
    pub location: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReceivingItem {
    pub sku: String,
    #[serde(default)]
    pub name: String,
    pub expected_quantity: u32,
    #[serde(default)]
    pub received_quantity: u32,
    #[serde(default)]
    pub damaged_quantity: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub notes: String,
}

/// An ASN: expected inbound goods for one purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivingOrder {
    pub id: RecordId,
    pub asn_number: String,
    pub po_number: String,
    pub supplier: String,
    pub expected_arrival: DateTime<Utc>,
    pub actual_arrival: Option<DateTime<Utc>>,
    pub status: ReceivingStatus,
    pub warehouse_id: RecordId,
    pub dock_number: String,
    pub carrier: String,
    pub items: Vec<ReceivingItem>,
    pub total_items: u64,
    pub received_items: u64,
    pub damaged_items: u64,
    pub received_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for ReceivingOrder {
    const RESOURCE: &'static str = "Receiving order";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReceivingOrder {
    #[serde(default)]
    pub po_number: String,
    pub supplier: String,
    pub expected_arrival: DateTime<Utc>,
    pub warehouse_id: RecordId,
    #[serde(default)]
    pub dock_number: String,
    #[serde(default)]
    pub carrier: String,
    #[serde(default)]
    pub items: Vec<NewReceivingItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivingOrderPatch {
    pub po_number: Option<String>,
    pub supplier: Option<String>,
    pub expected_arrival: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub actual_arrival: Option<Option<DateTime<Utc>>>,
    pub status: Option<ReceivingStatus>,
    pub warehouse_id: Option<RecordId>,
    pub dock_number: Option<String>,
    pub carrier: Option<String>,
    pub items: Option<Vec<NewReceivingItem>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub received_by: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct ReceivingFilter {
    pub status: Option<ReceivingStatus>,
    pub warehouse_id: Option<RecordId>,
}

impl ReceivingFilter {
    pub fn matches(&self, order: &ReceivingOrder) -> bool {
        self.status.is_none_or(|s| order.status == s)
            && self.warehouse_id.is_none_or(|w| order.warehouse_id == w)
    }
}

impl ReceivingItem {
    pub fn from_lines(lines: Vec<NewReceivingItem>) -> DomainResult<Vec<ReceivingItem>> {
        lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| {
                validate::require_non_empty("item sku", &line.sku)?;
                if line.damaged_quantity > line.received_quantity {
                    return Err(DomainError::validation(format!(
                        "item {}: damagedQuantity cannot exceed receivedQuantity",
                        line.sku
                    )));
                }
                Ok(ReceivingItem {
                    id: RecordId::new(idx as u64 + 1),
                    sku: line.sku,
                    name: line.name,
                    expected_quantity: line.expected_quantity,
                    received_quantity: line.received_quantity,
                    damaged_quantity: line.damaged_quantity,
                    location: line.location,
                    notes: line.notes,
                })
            })
            .collect()
    }
}

impl ReceivingOrder {
    /// Register a new ASN. It always starts `scheduled`, not yet arrived.
    pub fn create(id: RecordId, new: NewReceivingOrder, now: DateTime<Utc>) -> DomainResult<Self> {
        validate::require_non_empty("supplier", &new.supplier)?;
        let items = ReceivingItem::from_lines(new.items)?;

        let mut order = Self {
            id,
            asn_number: ASN_NUMBER.format(id, now),
            po_number: new.po_number,
            supplier: new.supplier,
            expected_arrival: new.expected_arrival,
            actual_arrival: None,
            status: ReceivingStatus::Scheduled,
            warehouse_id: new.warehouse_id,
            dock_number: new.dock_number,
            carrier: new.carrier,
            items,
            total_items: 0,
            received_items: 0,
            damaged_items: 0,
            received_by: None,
            created_at: now,
            updated_at: now,
        };
        order.recompute_totals();
        Ok(order)
    }

    pub fn apply_patch(&mut self, patch: ReceivingOrderPatch, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(v) = patch.po_number {
            self.po_number = v;
        }
        if let Some(v) = patch.supplier {
            validate::require_non_empty("supplier", &v)?;
            self.supplier = v;
        }
        if let Some(v) = patch.expected_arrival {
            self.expected_arrival = v;
        }
        if let Some(v) = patch.actual_arrival {
            self.actual_arrival = v;
        }
        if let Some(v) = patch.warehouse_id {
            self.warehouse_id = v;
        }
        if let Some(v) = patch.dock_number {
            self.dock_number = v;
        }
        if let Some(v) = patch.carrier {
            self.carrier = v;
        }
        if let Some(lines) = patch.items {
            self.items = ReceivingItem::from_lines(lines)?;
            self.recompute_totals();
        }
        if let Some(v) = patch.received_by {
            self.received_by = v;
        }
        if let Some(status) = patch.status {
            self.transition(status, now);
        }
        self.updated_at = now;
        Ok(())
    }

    /// Move to `status`; arriving at `received` stamps the arrival time once.
    fn transition(&mut self, status: ReceivingStatus, now: DateTime<Utc>) {
        if status == ReceivingStatus::Received && self.actual_arrival.is_none() {
            self.actual_arrival = Some(now);
        }
        self.status = status;
    }

    fn recompute_totals(&mut self) {
        self.total_items = self.items.iter().map(|i| u64::from(i.expected_quantity)).sum();
        self.received_items = self.items.iter().map(|i| u64::from(i.received_quantity)).sum();
        self.damaged_items = self.items.iter().map(|i| u64::from(i.damaged_quantity)).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 21, 14, 0, 0).unwrap()
    }

    fn line(expected: u32, received: u32, damaged: u32) -> NewReceivingItem {
        NewReceivingItem {
            sku: "SKU-001".to_string(),
            name: "Laptop Computer".to_string(),
            expected_quantity: expected,
            received_quantity: received,
            damaged_quantity: damaged,
            location: "A1-B2-C3".to_string(),
            notes: String::new(),
        }
    }

    fn new_asn(items: Vec<NewReceivingItem>) -> NewReceivingOrder {
        NewReceivingOrder {
            po_number: "PO-2024-003".to_string(),
            supplier: "TechCorp Inc.".to_string(),
            expected_arrival: t0() + chrono::Duration::days(2),
            warehouse_id: RecordId::new(1),
            dock_number: "DOCK-03".to_string(),
            carrier: "FastFreight Logistics".to_string(),
            items,
        }
    }

    #[test]
    fn create_starts_scheduled_with_no_arrival() {
        let asn = ReceivingOrder::create(RecordId::new(3), new_asn(vec![line(100, 0, 0)]), t0()).unwrap();
        assert_eq!(asn.asn_number, "ASN-2024-003");
        assert_eq!(asn.status, ReceivingStatus::Scheduled);
        assert_eq!(asn.actual_arrival, None);
        assert_eq!(asn.received_by, None);
        assert_eq!(asn.total_items, 100);
    }

    #[test]
    fn damaged_cannot_exceed_received() {
        let err = ReceivingOrder::create(RecordId::new(1), new_asn(vec![line(10, 2, 3)]), t0())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn receiving_stamps_arrival_once() {
        let mut asn = ReceivingOrder::create(RecordId::new(1), new_asn(vec![line(10, 0, 0)]), t0()).unwrap();
        let arrival = t0() + chrono::Duration::days(2);

        let patch: ReceivingOrderPatch = serde_json::from_value(serde_json::json!({
            "status": "received",
            "receivedBy": "John Receiver",
            "items": [{ "sku": "SKU-001", "expectedQuantity": 10, "receivedQuantity": 9, "damagedQuantity": 1 }]
        }))
        .unwrap();
        asn.apply_patch(patch, arrival).unwrap();

        assert_eq!(asn.actual_arrival, Some(arrival));
        assert_eq!(asn.received_items, 9);
        assert_eq!(asn.damaged_items, 1);
        assert_eq!(asn.received_by.as_deref(), Some("John Receiver"));

        let later = arrival + chrono::Duration::hours(3);
        let patch = ReceivingOrderPatch {
            status: Some(ReceivingStatus::PutawayComplete),
            ..Default::default()
        };
        asn.apply_patch(patch, later).unwrap();
        assert_eq!(asn.actual_arrival, Some(arrival));
        assert_eq!(asn.updated_at, later);
    }

    #[test]
    fn explicit_arrival_is_kept_when_receiving() {
        let mut asn = ReceivingOrder::create(RecordId::new(1), new_asn(vec![]), t0()).unwrap();
        let reported = t0() + chrono::Duration::hours(30);
        let patch = ReceivingOrderPatch {
            actual_arrival: Some(Some(reported)),
            status: Some(ReceivingStatus::Received),
            ..Default::default()
        };
        asn.apply_patch(patch, t0() + chrono::Duration::hours(31)).unwrap();
        assert_eq!(asn.actual_arrival, Some(reported));
    }

    proptest! {
        /// Property: header counters equal the sums over the item lines.
        #[test]
        fn counters_are_item_sums(
            lines in prop::collection::vec((0u32..10_000, 0u32..10_000), 0..10)
        ) {
            let submitted: Vec<NewReceivingItem> = lines
                .iter()
                .map(|(expected, received)| line(*expected, *received, received / 10))
                .collect();

            let asn = ReceivingOrder::create(RecordId::new(1), new_asn(submitted), t0()).unwrap();

            let expected_total: u64 = lines.iter().map(|(e, _)| u64::from(*e)).sum();
            let received_total: u64 = lines.iter().map(|(_, r)| u64::from(*r)).sum();
            let damaged_total: u64 = lines.iter().map(|(_, r)| u64::from(r / 10)).sum();
            prop_assert_eq!(asn.total_items, expected_total);
            prop_assert_eq!(asn.received_items, received_total);
            prop_assert_eq!(asn.damaged_items, damaged_total);
        }
    }
}
