use pig_farm_rust::models::InventoryRecord;
use pig_farm_rust::remote::{DashboardRemote, HttpCollection};
use pig_farm_rust::service::{export_series_csv, InventoryOverview};
use pig_farm_rust::{AppConfig, DashboardCharts, FarmApi, InventoryController, Resource};
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::fmt::time::ChronoLocal;

/// 打印一组库存概览
fn log_overview(label: &str, overview: &InventoryOverview, pages: usize) {
    info!(
        "{}: {} 项 ({} 页), 低库存 {}, 临期 {}, 已过期 {}, 总值 {}",
        label,
        overview.total_items,
        pages,
        overview.low_stock,
        overview.near_expiry,
        overview.expired,
        overview.total_value
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!("Starting farm report with config: {:?}", config);

    let api = FarmApi::from_config(&config.backend)?;
    let dashboard = api.dashboard();
    let inventory = |resource: Resource| {
        let remote: HttpCollection<InventoryRecord> = api.collection(resource);
        InventoryController::new(resource, remote, config.view.items_per_page)
    };
    let mut medicines = inventory(Resource::MedicineInventory);
    let mut feeds = inventory(Resource::FeedInventory);

    // 并发拉取汇总与两类库存
    let (summary, _, _) = match futures::try_join!(
        dashboard.summary(),
        medicines.load(),
        feeds.load(),
    ) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Failed to load farm data from {}: {}", config.backend.base_url, e);
            return Err(e.into());
        }
    };

    info!(
        "汇总: 收入 {}, 售出 {} 头, 员工 {} 人, 药品成本 {}, 饲料成本 {}",
        summary.total_revenue,
        summary.total_pigs_sold,
        summary.total_employees,
        summary.total_medicine_cost,
        summary.total_feed_cost
    );

    let today = chrono::Local::now().date_naive();
    log_overview("药品库存", &medicines.overview(today), medicines.list().total_pages());
    log_overview("饲料库存", &feeds.overview(today), feeds.list().total_pages());

    let charts = DashboardCharts::from_summary(&summary);
    match charts.range() {
        Some((first, last)) => info!("图表月份: {} 个 ({} ~ {})", charts.labels.len(), first, last),
        None => info!("图表月份: 无数据"),
    }
    println!("{}", serde_json::to_string_pretty(&charts)?);

    if let Some(csv_path) = &config.report.csv_path {
        export_series_csv(&charts, Path::new(csv_path))?;
    }

    Ok(())
}
