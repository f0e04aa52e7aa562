//! Demo records loaded at startup.
//!
//! Every record goes through the same `create`/`apply_patch` path the API
//! uses, so seeded totals and document numbers are computed, not typed in.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use wms_billing::BillingRecord;
use wms_core::{DomainError, RecordId};
use wms_equipment::{Equipment, MaintenanceRecord};
use wms_inventory::InventoryItem;
use wms_labor::{ProductivityRecord, Shift, Worker};
use wms_orders::Order;
use wms_quality::QualityCheck;
use wms_receiving::ReceivingOrder;
use wms_tasks::Task;
use wms_warehouses::Warehouse;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("seed timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
    #[error("seed record rejected: {0}")]
    Domain(#[from] DomainError),
}

/// One `Vec` per collection.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub warehouses: Vec<Warehouse>,
    pub inventory: Vec<InventoryItem>,
    pub orders: Vec<Order>,
    pub receiving: Vec<ReceivingOrder>,
    pub tasks: Vec<Task>,
    pub billing: Vec<BillingRecord>,
    pub workers: Vec<Worker>,
    pub shifts: Vec<Shift>,
    pub productivity: Vec<ProductivityRecord>,
    pub equipment: Vec<Equipment>,
    pub maintenance: Vec<MaintenanceRecord>,
    pub quality: Vec<QualityCheck>,
}

fn at(ts: &str) -> Result<DateTime<Utc>, SeedError> {
    Ok(ts.parse()?)
}

fn from<T: DeserializeOwned>(value: Value) -> Result<T, SeedError> {
    Ok(serde_json::from_value(value)?)
}

fn id(n: u64) -> RecordId {
    RecordId::new(n)
}

impl SeedData {
    /// Empty collections.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Two warehouses with a little of everything in them.
    pub fn demo() -> Result<Self, SeedError> {
        let data = Self {
            warehouses: warehouses()?,
            inventory: inventory()?,
            orders: orders()?,
            receiving: receiving()?,
            tasks: tasks()?,
            billing: billing()?,
            workers: workers()?,
            shifts: shifts()?,
            productivity: productivity()?,
            equipment: equipment()?,
            maintenance: maintenance()?,
            quality: quality()?,
        };
        tracing::debug!(
            warehouses = data.warehouses.len(),
            inventory = data.inventory.len(),
            orders = data.orders.len(),
            tasks = data.tasks.len(),
            "demo data built"
        );
        Ok(data)
    }
}

fn warehouses() -> Result<Vec<Warehouse>, SeedError> {
    Ok(vec![
        Warehouse::create(
            id(1),
            from(json!({
                "name": "Main Distribution Center",
                "code": "MDC-001",
                "address": "123 Warehouse Blvd, Industrial City, IC 12345",
                "capacity": 50000,
                "manager": "John Smith",
                "phone": "+1-555-0123",
                "email": "john.smith@company.com"
            }))?,
            at("2024-01-15T10:00:00Z")?,
        )?,
        Warehouse::create(
            id(2),
            from(json!({
                "name": "Secondary Storage Facility",
                "code": "SSF-002",
                "address": "456 Storage Ave, Business District, BD 67890",
                "capacity": 25000,
                "manager": "Sarah Johnson",
                "phone": "+1-555-0456",
                "email": "sarah.johnson@company.com"
            }))?,
            at("2024-01-20T14:30:00Z")?,
        )?,
    ])
}

fn inventory() -> Result<Vec<InventoryItem>, SeedError> {
    Ok(vec![
        InventoryItem::create(
            id(1),
            from(json!({
                "sku": "SKU-001",
                "name": "Laptop Computer",
                "description": "High-performance laptop for business use",
                "category": "Electronics",
                "warehouseId": 1,
                "location": "A1-B2-C3",
                "quantity": 150,
                "unitCost": 899.99,
                "reorderPoint": 20,
                "maxStock": 200,
                "supplier": "TechCorp Inc.",
                "lotNumber": "LOT-2024-001",
                "expiryDate": "2025-12-31"
            }))?,
            at("2024-01-15T10:00:00Z")?,
        )?,
        InventoryItem::create(
            id(2),
            from(json!({
                "sku": "SKU-002",
                "name": "Office Chair",
                "description": "Ergonomic office chair with lumbar support",
                "category": "Furniture",
                "warehouseId": 1,
                "location": "D4-E5-F6",
                "quantity": 75,
                "unitCost": 299.99,
                "reorderPoint": 15,
                "maxStock": 100,
                "supplier": "OfficeFurniture Co.",
                "lotNumber": "LOT-2024-002"
            }))?,
            at("2024-01-16T11:00:00Z")?,
        )?,
        InventoryItem::create(
            id(3),
            from(json!({
                "sku": "SKU-003",
                "name": "Wireless Mouse",
                "description": "Bluetooth wireless mouse with precision tracking",
                "category": "Electronics",
                "warehouseId": 2,
                "location": "G7-H8-I9",
                "quantity": 300,
                "unitCost": 49.99,
                "reorderPoint": 50,
                "maxStock": 500,
                "supplier": "TechCorp Inc.",
                "lotNumber": "LOT-2024-003",
                "expiryDate": "2026-06-30"
            }))?,
            at("2024-01-17T12:00:00Z")?,
        )?,
    ])
}

fn orders() -> Result<Vec<Order>, SeedError> {
    let first = Order::create(
        id(1),
        from(json!({
            "customerName": "ABC Corporation",
            "customerEmail": "orders@abccorp.com",
            "customerPhone": "+1-555-0101",
            "shippingAddress": "123 Business St, Corporate City, CC 12345",
            "priority": "high",
            "requestedShipDate": "2024-01-20T17:00:00Z",
            "items": [
                { "sku": "SKU-001", "name": "Laptop Computer", "quantity": 5, "unitPrice": 899.99 },
                { "sku": "SKU-002", "name": "Office Chair", "quantity": 10, "unitPrice": 299.99 }
            ],
            "warehouseId": 1,
            "assignedTo": "John Worker"
        }))?,
        at("2024-01-15T09:00:00Z")?,
    )?;

    let created = at("2024-01-16T10:30:00Z")?;
    let mut second = Order::create(
        id(2),
        from(json!({
            "customerName": "XYZ Industries",
            "customerEmail": "purchasing@xyzind.com",
            "customerPhone": "+1-555-0202",
            "shippingAddress": "456 Industrial Ave, Factory Town, FT 67890",
            "requestedShipDate": "2024-01-25T17:00:00Z",
            "items": [
                { "sku": "SKU-003", "name": "Wireless Mouse", "quantity": 50, "unitPrice": 49.99 }
            ],
            "warehouseId": 2,
            "assignedTo": "Sarah Worker"
        }))?,
        created,
    )?;
    second.apply_patch(from(json!({ "status": "processing" }))?, created)?;

    Ok(vec![first, second])
}

fn receiving() -> Result<Vec<ReceivingOrder>, SeedError> {
    let mut first = ReceivingOrder::create(
        id(1),
        from(json!({
            "poNumber": "PO-2024-001",
            "supplier": "TechCorp Inc.",
            "expectedArrival": "2024-01-20T08:00:00Z",
            "warehouseId": 1,
            "dockNumber": "DOCK-01",
            "carrier": "FastFreight Logistics",
            "items": [{
                "sku": "SKU-001",
                "name": "Laptop Computer",
                "expectedQuantity": 100,
                "receivedQuantity": 98,
                "damagedQuantity": 2,
                "location": "A1-B2-C3",
                "notes": "2 units damaged in transit"
            }]
        }))?,
        at("2024-01-19T10:00:00Z")?,
    )?;
    first.apply_patch(
        from(json!({
            "status": "received",
            "actualArrival": "2024-01-20T08:15:00Z",
            "receivedBy": "John Receiver"
        }))?,
        at("2024-01-20T08:30:00Z")?,
    )?;

    let second = ReceivingOrder::create(
        id(2),
        from(json!({
            "poNumber": "PO-2024-002",
            "supplier": "OfficeFurniture Co.",
            "expectedArrival": "2024-01-22T09:00:00Z",
            "warehouseId": 1,
            "dockNumber": "DOCK-02",
            "carrier": "Reliable Transport",
            "items": [{
                "sku": "SKU-002",
                "name": "Office Chair",
                "expectedQuantity": 50,
                "location": "D4-E5-F6"
            }]
        }))?,
        at("2024-01-21T14:00:00Z")?,
    )?;

    Ok(vec![first, second])
}

fn tasks() -> Result<Vec<Task>, SeedError> {
    let created = at("2024-01-15T10:00:00Z")?;
    let mut pick = Task::create(
        id(1),
        from(json!({
            "type": "picking",
            "priority": "high",
            "assignedTo": "John Worker",
            "warehouseId": 1,
            "orderId": 1,
            "location": "A1-B2-C3",
            "items": [{ "sku": "SKU-001", "name": "Laptop Computer", "quantity": 5 }],
            "estimatedDuration": 30,
            "notes": "Handle with care - fragile items"
        }))?,
        created,
    )?;
    pick.apply_patch(from(json!({ "status": "assigned" }))?, created)?;

    let replenish = Task::create(
        id(2),
        from(json!({
            "type": "replenishment",
            "priority": "medium",
            "warehouseId": 1,
            "location": "D4-E5-F6",
            "items": [{ "sku": "SKU-002", "name": "Office Chair", "quantity": 10 }],
            "estimatedDuration": 45,
            "notes": "Move from bulk storage to picking area"
        }))?,
        at("2024-01-15T11:00:00Z")?,
    )?;

    let mut count = Task::create(
        id(3),
        from(json!({
            "type": "cycle_count",
            "priority": "low",
            "assignedTo": "Sarah Worker",
            "warehouseId": 2,
            "location": "G7-H8-I9",
            "items": [{ "sku": "SKU-003", "name": "Wireless Mouse", "quantity": 300, "pickedQuantity": 300 }],
            "estimatedDuration": 60,
            "notes": "Annual cycle count completed"
        }))?,
        at("2024-01-15T13:00:00Z")?,
    )?;
    count.apply_patch(
        from(json!({
            "status": "completed",
            "startTime": "2024-01-15T14:00:00Z",
            "endTime": "2024-01-15T15:00:00Z"
        }))?,
        at("2024-01-15T15:00:00Z")?,
    )?;

    Ok(vec![pick, replenish, count])
}

fn billing() -> Result<Vec<BillingRecord>, SeedError> {
    let created = at("2024-02-01T09:00:00Z")?;
    let first = BillingRecord::create(
        id(1),
        from(json!({
            "customerName": "ABC Corporation",
            "customerId": "CUST-001",
            "billingPeriod": "2024-01-01 to 2024-01-31",
            "invoiceDate": "2024-02-01T00:00:00Z",
            "dueDate": "2024-02-15T00:00:00Z",
            "warehouseId": 1,
            "items": [
                { "description": "Storage - Laptop Computer (150 units)", "quantity": 150, "unitPrice": 2.50, "category": "storage" },
                { "description": "Handling - Order processing (5 orders)", "quantity": 5, "unitPrice": 15.00, "category": "handling" },
                { "description": "Value-added services - Special packaging", "quantity": 1, "unitPrice": 50.00, "category": "value_added" }
            ],
            "notes": "Monthly billing for January 2024"
        }))?,
        created,
    )?;

    let mut second = BillingRecord::create(
        id(2),
        from(json!({
            "customerName": "XYZ Industries",
            "customerId": "CUST-002",
            "billingPeriod": "2024-01-01 to 2024-01-31",
            "invoiceDate": "2024-02-01T00:00:00Z",
            "dueDate": "2024-02-15T00:00:00Z",
            "warehouseId": 2,
            "items": [
                { "description": "Storage - Wireless Mouse (300 units)", "quantity": 300, "unitPrice": 1.00, "category": "storage" },
                { "description": "Handling - Order processing (2 orders)", "quantity": 2, "unitPrice": 15.00, "category": "handling" }
            ],
            "notes": "Monthly billing for January 2024"
        }))?,
        created,
    )?;
    second.apply_patch(from(json!({ "status": "paid" }))?, created)?;

    Ok(vec![first, second])
}

fn workers() -> Result<Vec<Worker>, SeedError> {
    let created = at("2024-01-15T08:00:00Z")?;
    Ok(vec![
        Worker::create(
            id(1),
            from(json!({
                "employeeId": "EMP001",
                "name": "John Smith",
                "role": "picker",
                "warehouseId": 1,
                "shift": "morning",
                "hourlyRate": 18.50,
                "skills": ["picking", "packing", "RF scanning"],
                "currentTask": "Picking Order ORD-2024-001",
                "tasksCompleted": 45,
                "totalHours": 160,
                "productivity": 95.2
            }))?,
            created,
        )?,
        Worker::create(
            id(2),
            from(json!({
                "employeeId": "EMP002",
                "name": "Sarah Johnson",
                "role": "packer",
                "warehouseId": 1,
                "shift": "afternoon",
                "hourlyRate": 17.75,
                "skills": ["packing", "quality control"],
                "currentTask": "Packing Order ORD-2024-002",
                "tasksCompleted": 38,
                "totalHours": 145,
                "productivity": 92.8
            }))?,
            created,
        )?,
        Worker::create(
            id(3),
            from(json!({
                "employeeId": "EMP003",
                "name": "Mike Davis",
                "role": "receiver",
                "status": "on_break",
                "warehouseId": 2,
                "shift": "morning",
                "hourlyRate": 19.25,
                "skills": ["receiving", "putaway", "forklift"],
                "tasksCompleted": 52,
                "totalHours": 168,
                "productivity": 88.5
            }))?,
            created,
        )?,
    ])
}

fn shifts() -> Result<Vec<Shift>, SeedError> {
    let created = at("2024-01-15T08:00:00Z")?;
    Ok(vec![
        Shift::create(
            id(1),
            from(json!({
                "name": "Morning Shift",
                "startTime": "06:00",
                "endTime": "14:00",
                "warehouseId": 1,
                "workers": [1, 2],
                "maxWorkers": 8,
                "status": "active"
            }))?,
            created,
        )?,
        Shift::create(
            id(2),
            from(json!({
                "name": "Afternoon Shift",
                "startTime": "14:00",
                "endTime": "22:00",
                "warehouseId": 1,
                "workers": [2],
                "maxWorkers": 6
            }))?,
            created,
        )?,
    ])
}

fn productivity() -> Result<Vec<ProductivityRecord>, SeedError> {
    Ok(vec![
        ProductivityRecord::create(
            id(1),
            from(json!({
                "workerId": 1,
                "date": "2024-01-15",
                "tasksCompleted": 12,
                "hoursWorked": 8,
                "efficiency": 95.2,
                "notes": "Excellent performance, exceeded targets"
            }))?,
        )?,
        ProductivityRecord::create(
            id(2),
            from(json!({
                "workerId": 2,
                "date": "2024-01-15",
                "tasksCompleted": 10,
                "hoursWorked": 8,
                "efficiency": 92.8,
                "notes": "Good performance, minor delays due to equipment"
            }))?,
        )?,
    ])
}

fn equipment() -> Result<Vec<Equipment>, SeedError> {
    Ok(vec![
        Equipment::create(
            id(1),
            from(json!({
                "equipmentId": "EQ001",
                "name": "Forklift 1",
                "type": "forklift",
                "warehouseId": 1,
                "location": "Zone A",
                "manufacturer": "Toyota",
                "model": "FD150",
                "serialNumber": "TK-2024-001",
                "purchaseDate": "2024-01-15",
                "lastMaintenance": "2024-01-10",
                "nextMaintenance": "2024-02-10",
                "operator": "John Smith",
                "currentTask": "Moving pallets to Zone B",
                "utilization": 85.5,
                "notes": "Excellent condition, regular maintenance performed"
            }))?,
            at("2024-01-15T08:00:00Z")?,
        )?,
        Equipment::create(
            id(2),
            from(json!({
                "equipmentId": "EQ002",
                "name": "Conveyor System A",
                "type": "conveyor",
                "warehouseId": 1,
                "location": "Sorting Area",
                "manufacturer": "Hytrol",
                "model": "EZLogic",
                "serialNumber": "HY-2024-002",
                "purchaseDate": "2024-01-20",
                "lastMaintenance": "2024-01-15",
                "nextMaintenance": "2024-02-15",
                "currentTask": "Sorting packages",
                "utilization": 92.3,
                "notes": "Automated sorting system, high efficiency"
            }))?,
            at("2024-01-20T08:00:00Z")?,
        )?,
        Equipment::create(
            id(3),
            from(json!({
                "equipmentId": "EQ003",
                "name": "ASRS Crane 1",
                "type": "asrs",
                "status": "maintenance",
                "warehouseId": 2,
                "location": "High Bay Storage",
                "manufacturer": "Dematic",
                "model": "ASRS-500",
                "serialNumber": "DM-2024-003",
                "purchaseDate": "2024-01-25",
                "lastMaintenance": "2024-01-20",
                "nextMaintenance": "2024-01-25",
                "utilization": 0,
                "notes": "Scheduled maintenance - replacing sensors"
            }))?,
            at("2024-01-25T08:00:00Z")?,
        )?,
    ])
}

fn maintenance() -> Result<Vec<MaintenanceRecord>, SeedError> {
    Ok(vec![
        MaintenanceRecord::create(
            id(1),
            from(json!({
                "equipmentId": 3,
                "type": "preventive",
                "description": "Replace sensors and calibrate system",
                "technician": "Mike Johnson",
                "startDate": "2024-01-25",
                "cost": 2500,
                "status": "in_progress",
                "notes": "Scheduled preventive maintenance"
            }))?,
            at("2024-01-25T08:00:00Z")?,
        )?,
        MaintenanceRecord::create(
            id(2),
            from(json!({
                "equipmentId": 1,
                "type": "preventive",
                "description": "Oil change and safety inspection",
                "technician": "Sarah Wilson",
                "startDate": "2024-01-10",
                "endDate": "2024-01-10",
                "cost": 350,
                "status": "completed",
                "notes": "Completed successfully"
            }))?,
            at("2024-01-10T17:00:00Z")?,
        )?,
    ])
}

fn quality() -> Result<Vec<QualityCheck>, SeedError> {
    let mut inbound = QualityCheck::create(
        id(1),
        from(json!({
            "type": "inbound",
            "warehouseId": 1,
            "location": "Receiving Dock A",
            "inspector": "Sarah Johnson",
            "items": [{
                "sku": "SKU001",
                "name": "Product A",
                "expectedQuantity": 100,
                "actualQuantity": 98,
                "condition": "good",
                "qualityScore": 95,
                "notes": "Minor packaging damage on 2 units"
            }],
            "notes": "Overall good quality, minor issues noted"
        }))?,
        at("2024-01-15T08:00:00Z")?,
    )?;
    inbound.apply_patch(from(json!({ "status": "passed" }))?, at("2024-01-15T10:30:00Z")?)?;

    let mut outbound = QualityCheck::create(
        id(2),
        from(json!({
            "type": "outbound",
            "warehouseId": 1,
            "location": "Packing Station 1",
            "inspector": "Mike Davis",
            "items": [{
                "sku": "SKU002",
                "name": "Product B",
                "expectedQuantity": 50,
                "actualQuantity": 50,
                "condition": "good",
                "qualityScore": 100,
                "notes": "All items in perfect condition"
            }],
            "notes": "Quality check in progress"
        }))?,
        at("2024-01-15T14:00:00Z")?,
    )?;
    outbound.apply_patch(from(json!({ "status": "in_progress" }))?, at("2024-01-15T14:00:00Z")?)?;

    Ok(vec![inbound, outbound])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use wms_quality::CheckStatus;
    use wms_receiving::ReceivingStatus;
    use wms_tasks::TaskStatus;

    #[test]
    fn demo_data_builds() {
        let data = SeedData::demo().unwrap();
        assert_eq!(data.warehouses.len(), 2);
        assert_eq!(data.inventory.len(), 3);
        assert_eq!(data.orders.len(), 2);
        assert_eq!(data.receiving.len(), 2);
        assert_eq!(data.tasks.len(), 3);
        assert_eq!(data.billing.len(), 2);
        assert_eq!(data.workers.len(), 3);
        assert_eq!(data.shifts.len(), 2);
        assert_eq!(data.productivity.len(), 2);
        assert_eq!(data.equipment.len(), 3);
        assert_eq!(data.maintenance.len(), 2);
        assert_eq!(data.quality.len(), 2);
    }

    #[test]
    fn seeded_totals_are_computed() {
        let data = SeedData::demo().unwrap();
        assert_eq!(data.orders[0].order_number, "ORD-2024-001");
        assert_eq!(data.orders[0].total_amount, dec!(7499.85));
        assert_eq!(data.orders[1].total_amount, dec!(2499.50));
        assert_eq!(data.billing[0].total, dec!(550.00));
        assert_eq!(data.billing[1].total, dec!(363.00));
        assert_eq!(data.receiving[0].received_items, 98);
    }

    #[test]
    fn seeded_lifecycle_stamps_match_history() {
        let data = SeedData::demo().unwrap();

        let asn = &data.receiving[0];
        assert_eq!(asn.status, ReceivingStatus::Received);
        assert_eq!(asn.actual_arrival, Some(at("2024-01-20T08:15:00Z").unwrap()));

        let count = &data.tasks[2];
        assert_eq!(count.status, TaskStatus::Completed);
        assert_eq!(count.start_time, Some(at("2024-01-15T14:00:00Z").unwrap()));

        let qc = &data.quality[0];
        assert_eq!(qc.status, CheckStatus::Passed);
        assert_eq!(qc.completed_at, Some(at("2024-01-15T10:30:00Z").unwrap()));
        assert_eq!(data.quality[1].completed_at, None);
    }

    #[test]
    fn empty_seed_has_no_records() {
        let data = SeedData::empty();
        assert!(data.warehouses.is_empty());
        assert!(data.quality.is_empty());
    }
}
