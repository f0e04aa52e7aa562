use wms_billing::BillingRecord;
use wms_core::RecordId;
use wms_inventory::InventoryItem;
use wms_orders::Order;
use wms_tasks::Task;
use wms_warehouses::Warehouse;

/// Point-in-time copy of the collections the reports read.
#[derive(Debug, Clone, Default)]
pub struct ReportData {
    pub warehouses: Vec<Warehouse>,
    pub inventory: Vec<InventoryItem>,
    pub orders: Vec<Order>,
    pub tasks: Vec<Task>,
    pub billing: Vec<BillingRecord>,
}

impl ReportData {
    /// Keep only records belonging to `warehouse_id`; `None` keeps everything.
    pub fn scoped(mut self, warehouse_id: Option<RecordId>) -> Self {
        let Some(wh) = warehouse_id else {
            return self;
        };
        self.warehouses.retain(|w| w.id == wh);
        self.inventory.retain(|i| i.warehouse_id == wh);
        self.orders.retain(|o| o.warehouse_id == wh);
        self.tasks.retain(|t| t.warehouse_id == wh);
        self.billing.retain(|b| b.warehouse_id == wh);
        self
    }
}
