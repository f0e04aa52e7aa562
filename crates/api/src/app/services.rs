use std::sync::Arc;

use wms_auth::Authenticator;
use wms_billing::BillingRecord;
use wms_equipment::{Equipment, MaintenanceRecord};
use wms_infra::{InMemoryRecordStore, RecordStore, SeedData, SeedError, StoreError};
use wms_inventory::InventoryItem;
use wms_labor::{ProductivityRecord, Shift, Worker};
use wms_orders::Order;
use wms_quality::QualityCheck;
use wms_receiving::ReceivingOrder;
use wms_reports::ReportData;
use wms_tasks::Task;
use wms_warehouses::Warehouse;

use crate::config::AppConfig;

pub type Store<T> = Arc<InMemoryRecordStore<T>>;

/// Shared state handed to every handler.
pub struct AppServices {
    pub warehouses: Store<Warehouse>,
    pub inventory: Store<InventoryItem>,
    pub orders: Store<Order>,
    pub receiving: Store<ReceivingOrder>,
    pub tasks: Store<Task>,
    pub billing: Store<BillingRecord>,
    pub workers: Store<Worker>,
    pub shifts: Store<Shift>,
    pub productivity: Store<ProductivityRecord>,
    pub equipment: Store<Equipment>,
    pub maintenance: Store<MaintenanceRecord>,
    pub quality: Store<QualityCheck>,
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppServices {
    pub fn new(seed: SeedData, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            warehouses: InMemoryRecordStore::arc(seed.warehouses),
            inventory: InMemoryRecordStore::arc(seed.inventory),
            orders: InMemoryRecordStore::arc(seed.orders),
            receiving: InMemoryRecordStore::arc(seed.receiving),
            tasks: InMemoryRecordStore::arc(seed.tasks),
            billing: InMemoryRecordStore::arc(seed.billing),
            workers: InMemoryRecordStore::arc(seed.workers),
            shifts: InMemoryRecordStore::arc(seed.shifts),
            productivity: InMemoryRecordStore::arc(seed.productivity),
            equipment: InMemoryRecordStore::arc(seed.equipment),
            maintenance: InMemoryRecordStore::arc(seed.maintenance),
            quality: InMemoryRecordStore::arc(seed.quality),
            authenticator,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, SeedError> {
        let seed = if config.seed_data {
            SeedData::demo()?
        } else {
            SeedData::empty()
        };
        Ok(Self::new(seed, Arc::new(config.authenticator())))
    }

    /// Copy of the collections the reports read.
    pub fn report_data(&self) -> Result<ReportData, StoreError> {
        Ok(ReportData {
            warehouses: self.warehouses.list()?,
            inventory: self.inventory.list()?,
            orders: self.orders.list()?,
            tasks: self.tasks.list()?,
            billing: self.billing.list()?,
        })
    }
}
