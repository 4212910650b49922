use super::record::{iso_date, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 母猪 (sows)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub tag_number: String,     // 耳标号
    pub breed: String,
    #[serde(with = "iso_date")]
    pub birth_date: NaiveDate,
    pub origin: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record for Sow {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.tag_number.as_str())]
    }
}

/// 分娩记录 (farrowing-records)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FarrowingRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub sow_tag: String,
    #[serde(with = "iso_date")]
    pub farrowing_date: NaiveDate,
    pub born_alive: u32,
    pub stillborn: u32,
    pub weaned_pigs: u32,
    #[serde(with = "iso_date")]
    pub weaning_date: NaiveDate,
    pub health_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Record for FarrowingRecord {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.sow_tag.as_str())]
    }
}
