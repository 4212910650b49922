use crate::models::{DashboardSummary, MonthlySeries};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;

/// 多条稀疏月度序列对齐为等长的稠密数组
#[derive(Debug, Default)]
pub struct TimeSeriesMerger<'a> {
    series: IndexMap<&'a str, &'a MonthlySeries>,
}

/// 对齐结果: 共享横轴 labels, 每条序列按输入顺序保存
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedSeries {
    pub labels: Vec<String>,
    pub series: IndexMap<String, Vec<f64>>,
}

impl<'a> TimeSeriesMerger<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, name: &'a str, values: &'a MonthlySeries) -> Self {
        self.series.insert(name, values);
        self
    }

    /// 所有序列 key 的并集, 字典序 (即 "YYYY-MM" 的时间顺序)
    pub fn merge_keys(&self) -> Vec<String> {
        self.series
            .values()
            .flat_map(|values| values.keys().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// 按 keys 顺序取值, 缺失补 0
    pub fn align(values: &MonthlySeries, keys: &[String]) -> Vec<f64> {
        keys.iter()
            .map(|k| values.get(k).copied().unwrap_or(0.0))
            .collect()
    }

    pub fn merge(&self) -> MergedSeries {
        let labels = self.merge_keys();
        let series = self
            .series
            .iter()
            .map(|(name, values)| (name.to_string(), Self::align(values, &labels)))
            .collect();
        MergedSeries { labels, series }
    }
}

/// 仪表盘图表数据: 收入/支出折线, 售出/出生柱状
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub labels: Vec<String>,
    pub sales: Vec<f64>,
    pub expenses: Vec<f64>,
    pub pigs_sold: Vec<f64>,
    pub pigs_born: Vec<f64>,
}

impl DashboardCharts {
    pub fn from_summary(summary: &DashboardSummary) -> Self {
        let merger = TimeSeriesMerger::new()
            .with_series("sales", &summary.sales_over_time)
            .with_series("expenses", &summary.expenses_over_time)
            .with_series("pigsSold", &summary.pigs_sold_over_time)
            .with_series("pigsBorn", &summary.pigs_born_over_time);
        let labels = merger.merge_keys();

        Self {
            sales: TimeSeriesMerger::align(&summary.sales_over_time, &labels),
            expenses: TimeSeriesMerger::align(&summary.expenses_over_time, &labels),
            pigs_sold: TimeSeriesMerger::align(&summary.pigs_sold_over_time, &labels),
            pigs_born: TimeSeriesMerger::align(&summary.pigs_born_over_time, &labels),
            labels,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// 首尾月份
    pub fn range(&self) -> Option<(&str, &str)> {
        Some((self.labels.first()?.as_str(), self.labels.last()?.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(pairs: &[(&str, f64)]) -> MonthlySeries {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn merges_two_sparse_maps() {
        let sales = series(&[("2024-01", 100.0)]);
        let expenses = series(&[("2024-02", 50.0)]);
        let merged = TimeSeriesMerger::new()
            .with_series("salesOverTime", &sales)
            .with_series("expensesOverTime", &expenses)
            .merge();

        assert_eq!(merged.labels, vec!["2024-01", "2024-02"]);
        assert_eq!(merged.series["salesOverTime"], vec![100.0, 0.0]);
        assert_eq!(merged.series["expensesOverTime"], vec![0.0, 50.0]);
    }

    #[test]
    fn keys_sorted_across_years() {
        let a = series(&[("2024-01", 1.0), ("2023-12", 2.0)]);
        let b = series(&[("2023-11", 3.0), ("2024-01", 4.0)]);
        let merger = TimeSeriesMerger::new().with_series("a", &a).with_series("b", &b);
        assert_eq!(merger.merge_keys(), vec!["2023-11", "2023-12", "2024-01"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let merged = TimeSeriesMerger::new().merge();
        assert!(merged.labels.is_empty());
        assert!(merged.series.is_empty());
    }

    #[test]
    fn dashboard_charts_share_axis() {
        let summary = DashboardSummary {
            sales_over_time: series(&[("2024-03", 900.0), ("2024-01", 100.0)]),
            expenses_over_time: series(&[("2024-02", 50.0)]),
            pigs_born_over_time: series(&[("2024-04", 11.0)]),
            ..Default::default()
        };
        let charts = DashboardCharts::from_summary(&summary);
        assert_eq!(charts.labels, vec!["2024-01", "2024-02", "2024-03", "2024-04"]);
        assert_eq!(charts.sales, vec![100.0, 0.0, 900.0, 0.0]);
        assert_eq!(charts.expenses, vec![0.0, 50.0, 0.0, 0.0]);
        assert_eq!(charts.pigs_sold, vec![0.0; 4]);
        assert_eq!(charts.pigs_born, vec![0.0, 0.0, 0.0, 11.0]);
        assert_eq!(charts.range(), Some(("2024-01", "2024-04")));
    }
}
