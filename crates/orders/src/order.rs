use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wms_core::{
    DocumentNumber, DomainError, DomainResult, Entity, Priority, RecordId, checked_sum, line_total,
    nullable, validate,
};

pub const ORDER_NUMBER: DocumentNumber = DocumentNumber::new("ORD");

/// Fulfilment status lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Order line: SKU, quantity, unit price, and the derived line total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: RecordId,
    pub sku: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

/// Order line as submitted by the client; totals are computed server side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub sku: String,
    #[serde(default)]
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: RecordId,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
    pub status: OrderStatus,
    pub priority: Priority,
    pub order_date: DateTime<Utc>,
    pub requested_ship_date: Option<DateTime<Utc>>,
    pub items: Vec<OrderItem>,
    /// Sum of line totals, computed when items are written.
    pub total_amount: Decimal,
    pub warehouse_id: RecordId,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Order {
    const RESOURCE: &'static str = "Order";

    fn id(&self) -> RecordId {
        self.id
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub shipping_address: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub requested_ship_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<NewOrderItem>,
    pub warehouse_id: RecordId,
    #[serde(default)]
    pub assigned_to: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub shipping_address: Option<String>,
    pub status: Option<OrderStatus>,
    pub priority: Option<Priority>,
    pub order_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub requested_ship_date: Option<Option<DateTime<Utc>>>,
    pub items: Option<Vec<NewOrderItem>>,
    pub warehouse_id: Option<RecordId>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub assigned_to: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub warehouse_id: Option<RecordId>,
    pub priority: Option<Priority>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        self.status.is_none_or(|s| order.status == s)
            && self.warehouse_id.is_none_or(|w| order.warehouse_id == w)
            && self.priority.is_none_or(|p| order.priority == p)
    }
}

impl OrderItem {
    /// Number submitted lines 1..=n and compute their totals.
    pub fn from_lines(lines: Vec<NewOrderItem>) -> DomainResult<Vec<OrderItem>> {
        lines
            .into_iter()
            .enumerate()
            .map(|(idx, line)| {
                validate::require_non_empty("item sku", &line.sku)?;
                if line.quantity == 0 {
                    return Err(DomainError::validation("item quantity must be positive"));
                }
                if line.unit_price.is_sign_negative() {
                    return Err(DomainError::validation("item unitPrice cannot be negative"));
                }
                Ok(OrderItem {
                    id: RecordId::new(idx as u64 + 1),
                    total_price: line_total(line.quantity, line.unit_price)?,
                    sku: line.sku,
                    name: line.name,
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                })
            })
            .collect()
    }
}

impl Order {
    /// Build a new order. Status always starts at `pending`.
    pub fn create(id: RecordId, new: NewOrder, now: DateTime<Utc>) -> DomainResult<Self> {
        validate::require_non_empty("customerName", &new.customer_name)?;
        let items = OrderItem::from_lines(new.items)?;

        let mut order = Self {
            id,
            order_number: ORDER_NUMBER.format(id, now),
            customer_name: new.customer_name,
            customer_email: new.customer_email,
            customer_phone: new.customer_phone,
            shipping_address: new.shipping_address,
            status: OrderStatus::Pending,
            priority: new.priority,
            order_date: new.order_date.unwrap_or(now),
            requested_ship_date: new.requested_ship_date,
            items,
            total_amount: Decimal::ZERO,
            warehouse_id: new.warehouse_id,
            assigned_to: new.assigned_to,
            created_at: now,
            updated_at: now,
        };
        order.recompute_total()?;
        Ok(order)
    }

    pub fn apply_patch(&mut self, patch: OrderPatch, now: DateTime<Utc>) -> DomainResult<()> {
        if let Some(v) = patch.customer_name {
            validate::require_non_empty("customerName", &v)?;
            self.customer_name = v;
        }
        if let Some(v) = patch.customer_email {
            self.customer_email = v;
        }
        if let Some(v) = patch.customer_phone {
            self.customer_phone = v;
        }
        if let Some(v) = patch.shipping_address {
            self.shipping_address = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.priority {
            self.priority = v;
        }
        if let Some(v) = patch.order_date {
            self.order_date = v;
        }
        if let Some(v) = patch.requested_ship_date {
            self.requested_ship_date = v;
        }
        if let Some(lines) = patch.items {
            self.items = OrderItem::from_lines(lines)?;
            self.recompute_total()?;
        }
        if let Some(v) = patch.warehouse_id {
            self.warehouse_id = v;
        }
        if let Some(v) = patch.assigned_to {
            self.assigned_to = v;
        }
        self.updated_at = now;
        Ok(())
    }

    fn recompute_total(&mut self) -> DomainResult<()> {
        self.total_amount = checked_sum("totalAmount", self.items.iter().map(|i| i.total_price))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
    }

    fn line(sku: &str, quantity: u32, unit_price: Decimal) -> NewOrderItem {
        NewOrderItem {
            sku: sku.to_string(),
            name: String::new(),
            quantity,
            unit_price,
        }
    }

    fn new_order(items: Vec<NewOrderItem>) -> NewOrder {
        NewOrder {
            customer_name: "ABC Corporation".to_string(),
            customer_email: "orders@abccorp.com".to_string(),
            customer_phone: String::new(),
            shipping_address: String::new(),
            priority: Priority::High,
            order_date: None,
            requested_ship_date: None,
            items,
            warehouse_id: RecordId::new(1),
            assigned_to: None,
        }
    }

    #[test]
    fn create_computes_line_and_order_totals() {
        let order = Order::create(
            RecordId::new(3),
            new_order(vec![
                line("SKU-001", 5, dec!(899.99)),
                line("SKU-002", 10, dec!(299.99)),
            ]),
            t0(),
        )
        .unwrap();

        assert_eq!(order.order_number, "ORD-2024-003");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.order_date, t0());
        assert_eq!(order.items[0].id, RecordId::new(1));
        assert_eq!(order.items[1].id, RecordId::new(2));
        assert_eq!(order.items[0].total_price, dec!(4499.95));
        assert_eq!(order.total_amount, dec!(7499.85));
    }

    #[test]
    fn zero_quantity_line_is_rejected() {
        let err = Order::create(RecordId::new(1), new_order(vec![line("SKU-1", 0, dec!(1))]), t0())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn out_of_range_line_is_rejected() {
        let huge = dec!(50000000000000000000000000000);
        let err = Order::create(RecordId::new(1), new_order(vec![line("SKU-1", 2, huge)]), t0())
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn out_of_range_order_total_is_rejected() {
        let half = Decimal::MAX / dec!(2) + Decimal::ONE;
        let lines = vec![line("SKU-1", 1, half), line("SKU-2", 1, half)];
        let err = Order::create(RecordId::new(1), new_order(lines), t0()).unwrap_err();
        assert_eq!(err, DomainError::validation("totalAmount is out of range"));
    }

    #[test]
    fn replacing_items_recomputes_total() {
        let mut order =
            Order::create(RecordId::new(1), new_order(vec![line("A", 1, dec!(10))]), t0()).unwrap();
        let patch = OrderPatch {
            items: Some(vec![line("B", 3, dec!(2.50))]),
            ..Default::default()
        };
        order.apply_patch(patch, t0()).unwrap();
        assert_eq!(order.total_amount, dec!(7.50));
    }

    #[test]
    fn patch_without_items_keeps_stored_total() {
        let mut order =
            Order::create(RecordId::new(1), new_order(vec![line("A", 2, dec!(10))]), t0()).unwrap();
        let patch: OrderPatch = serde_json::from_value(serde_json::json!({
            "status": "shipped",
            "assignedTo": "Sarah Worker"
        }))
        .unwrap();
        order.apply_patch(patch, t0()).unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
        assert_eq!(order.assigned_to.as_deref(), Some("Sarah Worker"));
        assert_eq!(order.total_amount, dec!(20));
    }

    #[test]
    fn unknown_status_fails_to_deserialize() {
        let res: Result<OrderPatch, _> =
            serde_json::from_value(serde_json::json!({ "status": "lost" }));
        assert!(res.is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the stored order total is the sum of quantity * unit price.
        #[test]
        fn total_is_sum_of_lines(
            lines in prop::collection::vec((1u32..1_000, 0i64..100_000), 0..12)
        ) {
            let submitted: Vec<NewOrderItem> = lines
                .iter()
                .map(|(q, cents)| line("SKU", *q, Decimal::new(*cents, 2)))
                .collect();
            let expected: Decimal = lines
                .iter()
                .map(|(q, cents)| Decimal::from(*q) * Decimal::new(*cents, 2))
                .sum();

            let order = Order::create(RecordId::new(1), new_order(submitted), t0()).unwrap();
            prop_assert_eq!(order.total_amount, expected);
            prop_assert_eq!(order.items.len(), lines.len());
        }
    }
}
