//! Small two-warehouse snapshot shared by the report tests.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;

use wms_billing::{BillingRecord, BillingStatus};
use wms_core::RecordId;
use wms_inventory::InventoryItem;
use wms_orders::{Order, OrderStatus};
use wms_tasks::{Task, TaskStatus};
use wms_warehouses::Warehouse;

use crate::ReportData;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap()
}

fn from<T: serde::de::DeserializeOwned>(v: serde_json::Value) -> T {
    serde_json::from_value(v).unwrap()
}

pub fn data() -> ReportData {
    let warehouses = vec![
        Warehouse::create(RecordId::new(1), from(json!({ "name": "Main DC", "code": "MDC-001" })), t0()).unwrap(),
        Warehouse::create(RecordId::new(2), from(json!({ "name": "West Coast", "code": "WCF-002" })), t0()).unwrap(),
    ];

    let inventory = vec![
        InventoryItem::create(
            RecordId::new(1),
            from(json!({ "sku": "SKU-001", "name": "Laptop Computer", "category": "Electronics",
                         "warehouseId": 1, "quantity": 150, "unitCost": 899.99, "reorderPoint": 20 })),
            t0(),
        )
        .unwrap(),
        InventoryItem::create(
            RecordId::new(2),
            from(json!({ "sku": "SKU-002", "name": "Wireless Mouse", "category": "Electronics",
                         "warehouseId": 2, "quantity": 10, "unitCost": 25.50, "reorderPoint": 50 })),
            t0(),
        )
        .unwrap(),
        InventoryItem::create(
            RecordId::new(3),
            from(json!({ "sku": "SKU-003", "name": "Office Chair", "category": "Furniture",
                         "warehouseId": 1, "quantity": 75, "unitCost": 299.99, "reorderPoint": 15 })),
            t0(),
        )
        .unwrap(),
    ];

    let mut orders = vec![
        Order::create(
            RecordId::new(1),
            from(json!({ "customerName": "ABC Corporation", "warehouseId": 1,
                         "items": [{ "sku": "SKU-001", "quantity": 5, "unitPrice": 899.99 }] })),
            t0(),
        )
        .unwrap(),
        Order::create(
            RecordId::new(2),
            from(json!({ "customerName": "XYZ Industries", "warehouseId": 2,
                         "items": [{ "sku": "SKU-002", "quantity": 10, "unitPrice": 25.50 }] })),
            t0() + Duration::hours(1),
        )
        .unwrap(),
    ];
    orders[1].status = OrderStatus::Processing;

    let mut tasks = vec![
        Task::create(
            RecordId::new(1),
            from(json!({ "type": "picking", "warehouseId": 1, "assignedTo": "John Worker" })),
            t0() + Duration::minutes(30),
        )
        .unwrap(),
        Task::create(
            RecordId::new(2),
            from(json!({ "type": "replenishment", "warehouseId": 2 })),
            t0() + Duration::hours(2),
        )
        .unwrap(),
        Task::create(
            RecordId::new(3),
            from(json!({ "type": "picking", "warehouseId": 1 })),
            t0() + Duration::hours(3),
        )
        .unwrap(),
    ];
    tasks[0].status = TaskStatus::InProgress;
    tasks[1].status = TaskStatus::Assigned;
    tasks[2].status = TaskStatus::Completed;

    let mut billing = vec![
        BillingRecord::create(
            RecordId::new(1),
            from(json!({ "customerName": "ABC Corporation", "customerId": "CUST-001", "warehouseId": 1,
                         "items": [{ "description": "Storage", "quantity": 200, "unitPrice": 2.50 }] })),
            t0(),
        )
        .unwrap(),
        BillingRecord::create(
            RecordId::new(2),
            from(json!({ "customerName": "XYZ Industries", "customerId": "CUST-002", "warehouseId": 2,
                         "items": [{ "description": "Storage", "quantity": 300, "unitPrice": 1.00 }] })),
            t0() - Duration::days(1),
        )
        .unwrap(),
    ];
    billing[1].status = BillingStatus::Paid;

    ReportData {
        warehouses,
        inventory,
        orders,
        tasks,
        billing,
    }
}
