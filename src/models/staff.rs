use super::record::{iso_date, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 员工 (employees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
    pub name: String,
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_card: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl Record for Employee {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.name.as_str()),
            self.employee_code.as_deref(),
            self.identity_card.as_deref(),
            self.phone_number.as_deref(),
        ]
    }
}
