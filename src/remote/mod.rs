pub mod client;
pub mod collection;

pub use client::{create_client, FarmApi};
pub use collection::{HttpCollection, HttpDashboard};

use crate::error::Result;
use crate::models::{DashboardSummary, ImportHistoryEntry, InventoryRecord};
use async_trait::async_trait;
use bigdecimal::BigDecimal;

/// 后端暴露的资源集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    PigSales,
    Employees,
    Medicines,
    MedicineInventory,
    Feeds,
    FeedInventory,
    Sows,
    FarrowingRecords,
    DashboardSummary,
}

impl Resource {
    pub const fn path(self) -> &'static str {
        match self {
            Resource::PigSales => "pig-sales",
            Resource::Employees => "employees",
            Resource::Medicines => "medicines",
            Resource::MedicineInventory => "medicine-inventory",
            Resource::Feeds => "cams",
            Resource::FeedInventory => "cam-inventory",
            Resource::Sows => "sows",
            Resource::FarrowingRecords => "farrowing-records",
            Resource::DashboardSummary => "dashboard/summary",
        }
    }
}

/// 远程集合: list/get/create/update/delete
#[async_trait]
pub trait RemoteCollection<T>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>>;
    async fn get(&self, id: i64) -> Result<T>;
    /// 服务端分配 id 并返回完整记录
    async fn create(&self, item: &T) -> Result<T>;
    async fn update(&self, id: i64, item: &T) -> Result<T>;
    async fn delete(&self, id: i64) -> Result<()>;
}

/// 库存集合额外的入库/出库/历史操作
#[async_trait]
pub trait InventoryRemote: Send + Sync {
    async fn import(&self, item: &InventoryRecord) -> Result<InventoryRecord>;
    async fn export(&self, id: i64, amount: &BigDecimal) -> Result<InventoryRecord>;
    async fn history(&self) -> Result<Vec<ImportHistoryEntry>>;
}

#[async_trait]
pub trait DashboardRemote: Send + Sync {
    async fn summary(&self) -> Result<DashboardSummary>;
}
