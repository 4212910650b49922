use super::record::{iso_date, Record};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 库存行引用的物资: 药品 或 饲料
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StockRef {
    Medicine {
        #[serde(rename = "medicineId")]
        medicine_id: i64,
        #[serde(rename = "medicineName", default, skip_serializing_if = "Option::is_none")]
        medicine_name: Option<String>,
        #[serde(rename = "medicineCode", default, skip_serializing_if = "Option::is_none")]
        medicine_code: Option<String>,
    },
    Feed {
        #[serde(rename = "camId")]
        cam_id: i64,
        #[serde(rename = "camName", default, skip_serializing_if = "Option::is_none")]
        cam_name: Option<String>,
        #[serde(rename = "camCode", default, skip_serializing_if = "Option::is_none")]
        cam_code: Option<String>,
    },
}

impl StockRef {
    pub fn medicine(medicine_id: i64) -> Self {
        StockRef::Medicine {
            medicine_id,
            medicine_name: None,
            medicine_code: None,
        }
    }

    pub fn feed(cam_id: i64) -> Self {
        StockRef::Feed {
            cam_id,
            cam_name: None,
            cam_code: None,
        }
    }

    /// 被引用物资的 id
    pub fn resource_ref_id(&self) -> i64 {
        match self {
            StockRef::Medicine { medicine_id, .. } => *medicine_id,
            StockRef::Feed { cam_id, .. } => *cam_id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            StockRef::Medicine { medicine_name, .. } => medicine_name.as_deref(),
            StockRef::Feed { cam_name, .. } => cam_name.as_deref(),
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            StockRef::Medicine { medicine_code, .. } => medicine_code.as_deref(),
            StockRef::Feed { cam_code, .. } => cam_code.as_deref(),
        }
    }
}

/// 库存行 (medicine-inventory / cam-inventory)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub item: StockRef,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub quantity: BigDecimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_quantity: Option<BigDecimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<BigDecimal>,   // 软上限, 不强制
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<BigDecimal>,
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl InventoryRecord {
    /// 入库请求体
    pub fn import_request(item: StockRef, quantity: BigDecimal, unit_price: BigDecimal) -> Self {
        Self {
            id: None,
            item,
            kind: None,
            quantity,
            unit: None,
            min_quantity: None,
            max_quantity: None,
            unit_price: Some(unit_price),
            expiry_date: None,
            location: None,
            last_updated: None,
        }
    }
}

impl Record for InventoryRecord {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![self.item.name(), self.kind.as_deref(), self.location.as_deref()]
    }
}

/// 入库历史 (只追加, 不可修改)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportHistoryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(flatten)]
    pub item: StockRef,
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub import_date: Option<NaiveDate>,
    pub quantity: BigDecimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<BigDecimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<BigDecimal>,
}

impl ImportHistoryEntry {
    /// 新建一条入库记录, totalPrice = quantity × unitPrice
    pub fn new(
        item: StockRef,
        quantity: BigDecimal,
        unit_price: Option<BigDecimal>,
        import_date: NaiveDate,
    ) -> Self {
        let total_price = &quantity * unit_price.clone().unwrap_or_else(|| BigDecimal::from(0));
        Self {
            id: None,
            item,
            import_date: Some(import_date),
            quantity,
            unit: None,
            unit_price,
            total_price: Some(total_price),
        }
    }
}
