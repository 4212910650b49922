use super::timeseries::DashboardCharts;
use std::path::Path;

/// 导出图表数据到 CSV: 每月一行
pub fn export_series_csv(
    charts: &DashboardCharts,
    output_path: &Path,
) -> Result<usize, Box<dyn std::error::Error + Send + Sync>> {
    use csv::Writer;
    use std::fs::File;

    let months = charts.labels.len();
    let lengths = [
        charts.sales.len(),
        charts.expenses.len(),
        charts.pigs_sold.len(),
        charts.pigs_born.len(),
    ];
    if lengths.iter().any(|&len| len != months) {
        return Err(format!(
            "series length mismatch: {} months, series lengths {:?}",
            months, lengths
        )
        .into());
    }

    let file = File::create(output_path)?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(["month", "sales", "expenses", "pigs_sold", "pigs_born"])?;
    let rows = charts
        .labels
        .iter()
        .zip(&charts.sales)
        .zip(&charts.expenses)
        .zip(&charts.pigs_sold)
        .zip(&charts.pigs_born);
    for ((((month, sales), expenses), pigs_sold), pigs_born) in rows {
        writer.write_record(&[
            month.clone(),
            sales.to_string(),
            expenses.to_string(),
            pigs_sold.to_string(),
            pigs_born.to_string(),
        ])?;
    }

    writer.flush()?;
    tracing::info!("Exported {} months to {}", charts.labels.len(), output_path.display());
    Ok(charts.labels.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DashboardSummary;

    #[test]
    fn writes_header_and_one_row_per_month() {
        let mut summary = DashboardSummary::default();
        summary.sales_over_time.insert("2024-01".to_string(), 100.0);
        summary.expenses_over_time.insert("2024-02".to_string(), 50.5);
        let charts = DashboardCharts::from_summary(&summary);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts.csv");
        assert_eq!(export_series_csv(&charts, &path).unwrap(), 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "month,sales,expenses,pigs_sold,pigs_born");
        assert_eq!(lines[1], "2024-01,100,0,0,0");
        assert_eq!(lines[2], "2024-02,0,50.5,0,0");
    }

    #[test]
    fn rejects_misaligned_series_without_writing() {
        let mut summary = DashboardSummary::default();
        summary.sales_over_time.insert("2024-01".to_string(), 100.0);
        summary.expenses_over_time.insert("2024-02".to_string(), 50.5);
        let mut charts = DashboardCharts::from_summary(&summary);
        charts.sales.pop();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts.csv");
        let err = export_series_csv(&charts, &path).unwrap_err();
        assert!(err.to_string().contains("length mismatch"));
        assert!(!path.exists());
    }
}
