pub mod config;
pub mod error;
pub mod models;
pub mod remote;
pub mod service;

pub use config::AppConfig;
pub use error::{FarmError, ValidationError};
pub use remote::{create_client, FarmApi, Resource};
pub use service::{DashboardCharts, InventoryController, ResourceController};
