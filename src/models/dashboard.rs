use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// 按月稀疏序列: "YYYY-MM" -> 数值
pub type MonthlySeries = HashMap<String, f64>;

/// 仪表盘汇总 (dashboard/summary)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_revenue: BigDecimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pigs_sold: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_employees: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_medicine_cost: BigDecimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_feed_cost: BigDecimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sales_over_time: MonthlySeries,
    #[serde(default, deserialize_with = "null_as_default")]
    pub expenses_over_time: MonthlySeries,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pigs_sold_over_time: MonthlySeries,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pigs_born_over_time: MonthlySeries,
}

/// 显式 null 与缺失字段同样取默认值 (无数据时 SUM 返回 null)
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}
