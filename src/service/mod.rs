pub mod controller;
pub mod export;
pub mod inventory;
pub mod list_view;
pub mod observer;
pub mod store;
pub mod timeseries;

pub use controller::{ResourceController, ViewMode};
pub use export::export_series_csv;
pub use inventory::{
    classify_expiry, is_low_stock, stock_ratio, total_import_cost, total_inventory_value,
    ExpiryStatus, InventoryController, InventoryLedger, InventoryOverview,
};
pub use list_view::ListView;
pub use observer::{FailureObserver, Operation, TracingObserver};
pub use store::EntityStore;
pub use timeseries::{DashboardCharts, MergedSeries, TimeSeriesMerger};
