/// 领域记录的公共形状: 可选的服务端 id + 参与搜索的字段
pub trait Record: Clone + Send + Sync + 'static {
    /// 服务端分配的 id, 创建前为 None
    fn id(&self) -> Option<i64>;

    /// 参与关键字搜索的字段 (None 表示该字段为空)
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// 排序键, 按降序排列; 无 id 的记录视为 0, 排在最后
    fn sort_key(&self) -> i64 {
        self.id().unwrap_or(0)
    }
}

/// 日期字段的序列化: 统一为 `YYYY-MM-DD`, 反序列化时截掉时间部分
pub mod iso_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    /// `"2024-03-05T00:00:00"` -> `"2024-03-05"`
    pub fn truncate_date(value: &str) -> &str {
        value.split('T').next().unwrap_or(value).trim()
    }

    pub fn parse(value: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(truncate_date(value), FORMAT)
    }

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse(&raw).map_err(de::Error::custom)
    }

    /// 可选日期, 空字符串与 null 都视为缺失
    pub mod option {
        use chrono::NaiveDate;
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
            match date {
                Some(d) => super::serialize(d, s),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
            let raw: Option<String> = Option::deserialize(d)?;
            match raw.as_deref().map(str::trim) {
                None | Some("") => Ok(None),
                Some(s) => super::parse(s).map(Some).map_err(de::Error::custom),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::iso_date::{parse, truncate_date};
    use chrono::NaiveDate;

    #[test]
    fn truncates_time_component() {
        assert_eq!(truncate_date("2024-03-05T00:00:00"), "2024-03-05");
        assert_eq!(truncate_date("2024-03-05"), "2024-03-05");
    }

    #[test]
    fn parses_date_time_as_date() {
        let d = parse("2024-03-05T13:45:10.123").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert!(parse("05/03/2024").is_err());
    }
}
