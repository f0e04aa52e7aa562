use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use wms_core::{
    DocumentNumber, DomainError, DomainResult, Entity, RecordId, apply_rate, checked_sum, line_total,
    validate,
};

pub const INVOICE_NUMBER: DocumentNumber = DocumentNumber::new("INV");

/// Flat sales tax applied to the subtotal.
pub const TAX_RATE: Decimal = dec!(0.10);

/// Default gap between invoice date and due date.
pub const PAYMENT_TERMS_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingStatus {
    #[default]
    Pending,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingCategory {
    Storage,
    Handling,
    ValueAdded,
    Equipment,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingItem {
    pub id: RecordId,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub category: BillingCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBillingItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    #[serde(default)]
    pub category: BillingCategory,
}

impl BillingItem {
    /// Number submitted lines 1..=n and price them.
    pub fn from_lines(lines: Vec<NewBillingItem>) -> DomainResult<Vec<BillingItem>> {
        lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| {
                validate::require_non_empty("item description", &line.description)?;
                if line.unit_price.is_sign_negative() {
                    return Err(DomainError::validation(format!(
                        "item {}: unitPrice cannot be negative",
                        idx + 1
                    )));
                }
                Ok(BillingItem {
                    id: RecordId::new(idx as u64 + 1),
                    total_price: line_total(line.quantity, line.unit_price)?,
                    description: line.description,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    category: line.category,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRecord {
    pub id: RecordId,
    pub invoice_number: String,
    pub customer_name: String,
    pub customer_id: String,
    /// Free text, e.g. `2024-01-01 to 2024-01-31`.
    pub billing_period: String,
    pub invoice_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub status: BillingStatus,
    pub warehouse_id: RecordId,
    pub items: Vec<BillingItem>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for BillingRecord {
    const RESOURCE: &'static str = "Billing record";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBillingRecord {
    pub customer_name: String,
    pub customer_id: String,
    #[serde(default)]
    pub billing_period: String,
    #[serde(default)]
    pub invoice_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub warehouse_id: RecordId,
    #[serde(default)]
    pub items: Vec<NewBillingItem>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingPatch {
    pub customer_name: Option<String>,
    pub customer_id: Option<String>,
    pub billing_period: Option<String>,
    pub invoice_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<BillingStatus>,
    pub warehouse_id: Option<RecordId>,
    pub items: Option<Vec<NewBillingItem>>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct BillingFilter {
    pub status: Option<BillingStatus>,
    pub customer_id: Option<String>,
    pub warehouse_id: Option<RecordId>,
}

impl BillingFilter {
    pub fn matches(&self, record: &BillingRecord) -> bool {
        self.status.is_none_or(|s| record.status == s)
            && self
                .customer_id
                .as_deref()
                .is_none_or(|c| record.customer_id == c)
            && self.warehouse_id.is_none_or(|w| record.warehouse_id == w)
    }
}

impl BillingRecord {
    /// Create an invoice. New invoices are always `pending`; the due date
    /// defaults to [`PAYMENT_TERMS_DAYS`] after the invoice date.
    pub fn create(id: RecordId, new: NewBillingRecord, now: DateTime<Utc>) -> DomainResult<Self> {
        let invoice_date = new.invoice_date.unwrap_or(now);
        let due_date = match new.due_date {
            Some(due) => due,
            None => invoice_date
                .checked_add_signed(Duration::days(PAYMENT_TERMS_DAYS))
                .ok_or_else(|| DomainError::validation("invoiceDate is out of range"))?,
        };
        let mut record = Self {
            id,
            invoice_number: INVOICE_NUMBER.format(id, now),
            customer_name: new.customer_name,
            customer_id: new.customer_id,
            billing_period: new.billing_period,
            invoice_date,
            due_date,
            status: BillingStatus::Pending,
            warehouse_id: new.warehouse_id,
            items: BillingItem::from_lines(new.items)?,
            subtotal: Decimal::ZERO,
            tax: Decimal::ZERO,
            total: Decimal::ZERO,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };
        record.recompute_totals()?;
        record.validate()?;
        Ok(record)
    }

    pub fn apply_patch(&mut self, patch: BillingPatch, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(v) = patch.customer_name {
            self.customer_name = v;
        }
        if let Some(v) = patch.customer_id {
            self.customer_id = v;
        }
        if let Some(v) = patch.billing_period {
            self.billing_period = v;
        }
        if let Some(v) = patch.invoice_date {
            self.invoice_date = v;
        }
        if let Some(v) = patch.due_date {
            self.due_date = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.warehouse_id {
            self.warehouse_id = v;
        }
        if let Some(items) = patch.items {
            self.items = BillingItem::from_lines(items)?;
            self.recompute_totals()?;
        }
        if let Some(v) = patch.notes {
            self.notes = v;
        }
        self.validate()?;
        self.updated_at = now;
        Ok(())
    }

    fn validate(&self) -> DomainResult<()> {
        validate::require_non_empty("customerName", &self.customer_name)?;
        validate::require_non_empty("customerId", &self.customer_id)?;
        if self.due_date < self.invoice_date {
            return Err(DomainError::validation("dueDate cannot precede invoiceDate"));
        }
        Ok(())
    }

    fn recompute_totals(&mut self) -> DomainResult<()> {
        let subtotal = checked_sum("subtotal", self.items.iter().map(|i| i.total_price))?;
        let tax = apply_rate("tax", subtotal, TAX_RATE)?;
        self.total = checked_sum("total", [subtotal, tax])?;
        self.subtotal = subtotal;
        self.tax = tax;
        Ok(())
    }

    /// Unsettled and past its due date.
    pub fn is_past_due(&self, now: DateTime<Utc>) -> bool {
        matches!(self.status, BillingStatus::Pending | BillingStatus::Sent) && self.due_date < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use wms_core::round_money;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap()
    }

    fn line(description: &str, quantity: u32, unit_price: Decimal) -> NewBillingItem {
        NewBillingItem {
            description: description.to_string(),
            quantity,
            unit_price,
            category: BillingCategory::Storage,
        }
    }

    fn new_record(items: Vec<NewBillingItem>) -> NewBillingRecord {
        NewBillingRecord {
            customer_name: "ABC Corporation".to_string(),
            customer_id: "CUST-001".to_string(),
            billing_period: "2024-01-01 to 2024-01-31".to_string(),
            invoice_date: None,
            due_date: None,
            warehouse_id: RecordId::new(1),
            items,
            notes: String::new(),
        }
    }

    #[test]
    fn out_of_range_amounts_are_rejected() {
        let huge = dec!(50000000000000000000000000000);
        let new = new_record(vec![line("Storage", 2, huge)]);
        let err = BillingRecord::create(RecordId::new(1), new, t0()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // The subtotal fits, the taxed total does not.
        let new = new_record(vec![line("Storage", 1, Decimal::MAX - dec!(1))]);
        let err = BillingRecord::create(RecordId::new(1), new, t0()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn out_of_range_patch_leaves_totals_untouched() {
        let new = new_record(vec![line("Storage", 1, dec!(100))]);
        let mut record = BillingRecord::create(RecordId::new(1), new, t0()).unwrap();
        let patch = BillingPatch {
            items: Some(vec![line("Storage", 2, dec!(50000000000000000000000000000))]),
            ..Default::default()
        };
        assert!(record.apply_patch(patch, t0()).is_err());
        assert_eq!(record.total, dec!(110.00));
    }

    #[test]
    fn monthly_invoice_totals() {
        let record = BillingRecord::create(
            RecordId::new(1),
            new_record(vec![
                line("Storage - Laptop Computer (150 units)", 150, dec!(2.50)),
                line("Handling - Order processing (5 orders)", 5, dec!(15.00)),
                line("Value-added services - Special packaging", 1, dec!(50.00)),
            ]),
            t0(),
        )
        .unwrap();

        assert_eq!(record.invoice_number, "INV-2024-001");
        assert_eq!(record.status, BillingStatus::Pending);
        assert_eq!(record.subtotal, dec!(500.00));
        assert_eq!(record.tax, dec!(50.00));
        assert_eq!(record.total, dec!(550.00));
        assert_eq!(
            record.items.iter().map(|i| i.id.get()).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn due_date_defaults_to_payment_terms() {
        let record = BillingRecord::create(RecordId::new(2), new_record(vec![]), t0()).unwrap();
        assert_eq!(record.due_date - record.invoice_date, Duration::days(14));
        assert!(!record.is_past_due(t0()));
        assert!(record.is_past_due(t0() + Duration::days(15)));
    }

    #[test]
    fn due_before_invoice_is_rejected() {
        let mut new = new_record(vec![]);
        new.due_date = Some(t0() - Duration::days(1));
        let err = BillingRecord::create(RecordId::new(1), new, t0()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn tax_is_rounded_to_cents() {
        let record = BillingRecord::create(
            RecordId::new(1),
            new_record(vec![line("Pallet storage", 1, dec!(0.05))]),
            t0(),
        )
        .unwrap();
        assert_eq!(record.tax, dec!(0.01));
        assert_eq!(record.total, dec!(0.06));
    }

    #[test]
    fn patch_without_items_keeps_totals() {
        let mut record = BillingRecord::create(
            RecordId::new(1),
            new_record(vec![line("Storage", 300, dec!(1.00))]),
            t0(),
        )
        .unwrap();
        record
            .apply_patch(
                BillingPatch {
                    status: Some(BillingStatus::Paid),
                    ..Default::default()
                },
                t0(),
            )
            .unwrap();
        assert_eq!(record.total, dec!(330.00));
        assert!(!record.is_past_due(t0() + Duration::days(30)));
    }

    #[test]
    fn filter_by_customer() {
        let record = BillingRecord::create(RecordId::new(1), new_record(vec![]), t0()).unwrap();
        let f = BillingFilter {
            customer_id: Some("CUST-002".to_string()),
            ..Default::default()
        };
        assert!(!f.matches(&record));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: total == subtotal + tax and tax == round2(subtotal * 10%).
        #[test]
        fn totals_hold_for_any_item_set(
            lines in prop::collection::vec((0u32..10_000, 0i64..1_000_000), 0..10)
        ) {
            let submitted: Vec<NewBillingItem> = lines
                .iter()
                .map(|(q, cents)| line("Service", *q, Decimal::new(*cents, 2)))
                .collect();
            let record = BillingRecord::create(RecordId::new(1), new_record(submitted), t0()).unwrap();

            let expected_subtotal: Decimal = record.items.iter().map(|i| i.total_price).sum();
            prop_assert_eq!(record.subtotal, expected_subtotal);
            prop_assert_eq!(record.tax, round_money(record.subtotal * TAX_RATE));
            prop_assert_eq!(record.total, record.subtotal + record.tax);
        }
    }
}
