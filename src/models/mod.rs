pub mod breeding;
pub mod catalog;
pub mod dashboard;
pub mod inventory;
pub mod record;
pub mod sale;
pub mod staff;

pub use breeding::{FarrowingRecord, Sow};
pub use catalog::{Feed, Medicine};
pub use dashboard::{DashboardSummary, MonthlySeries};
pub use inventory::{ImportHistoryEntry, InventoryRecord, StockRef};
pub use record::{iso_date, Record};
pub use sale::PigSale;
pub use staff::Employee;
