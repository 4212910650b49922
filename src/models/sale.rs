use super::record::{iso_date, Record};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 生猪销售记录 (pig-sales)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PigSale {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(with = "iso_date")]
    pub sale_date: NaiveDate,
    pub quantity: i64,
    pub weight: BigDecimal,     // 总重量
    pub price: BigDecimal,      // 单价 (按重量)
    #[serde(default)]
    pub total: BigDecimal,      // weight × price
    pub customer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PigSale {
    /// 提交前重新计算总额
    pub fn with_computed_total(mut self) -> Self {
        self.total = &self.weight * &self.price;
        self
    }
}

impl Record for PigSale {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.customer.as_str())]
    }
}

/// 销售总额 (对当前过滤结果求和)
pub fn total_amount<'a>(sales: impl IntoIterator<Item = &'a PigSale>) -> BigDecimal {
    sales
        .into_iter()
        .fold(BigDecimal::from(0), |acc, s| acc + &s.total)
}
