use super::record::{iso_date, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 药品目录 (medicines)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medicine_code: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Record for Medicine {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.name.as_str()),
            self.medicine_code.as_deref(),
            self.manufacturer.as_deref(),
        ]
    }
}

/// 饲料 ("cám") 目录 (cams)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cam_code: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Record for Feed {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.name.as_str()),
            self.cam_code.as_deref(),
            self.manufacturer.as_deref(),
        ]
    }
}
