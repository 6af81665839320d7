//! Detail view of one record with its service flags.

use serde::Serialize;

use hcd_model::{Record, ServiceRecord};

use crate::services::ServiceDirectory;

/// Shown in place of an empty field.
pub const EMPTY_FIELD: &str = "無";

const MAP_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDetail<'a> {
    pub record: &'a Record,
    pub services: Option<&'a ServiceRecord>,
}

impl<'a> RecordDetail<'a> {
    /// `(label, value)` rows for display, with blank values shown as 無.
    pub fn fields(&self) -> Vec<(&'static str, &'a str)> {
        let record = self.record;
        vec![
            ("名稱", display_or_empty(&record.name)),
            ("地址", display_or_empty(&record.address)),
            ("電話", display_or_empty(&record.phone)),
            ("整合團隊", display_or_empty(&record.team)),
            ("機構代碼", display_or_empty(&record.code)),
            ("類別", record.source.label()),
            ("縣市", record.region.as_str()),
            ("鄉鎮市區", record.sub_region.as_str()),
        ]
    }

    /// Map search link for the address.
    pub fn map_url(&self) -> String {
        format!(
            "{MAP_SEARCH_URL}{}",
            urlencoding::encode(self.record.address.trim())
        )
    }
}

pub fn display_or_empty(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() { EMPTY_FIELD } else { trimmed }
}

pub fn detail<'a>(record: &'a Record, services: &'a ServiceDirectory) -> RecordDetail<'a> {
    RecordDetail {
        record,
        services: services.find(&record.name),
    }
}

/// Exact name match first, then the first record whose name contains `name`.
pub fn find_by_name<'a>(records: &'a [Record], name: &str) -> Option<&'a Record> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    records
        .iter()
        .find(|record| record.name == name)
        .or_else(|| records.iter().find(|record| record.name.contains(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcd_model::{Region, ServiceFlag, SourceCategory, SubRegion};

    fn record(name: &str) -> Record {
        Record {
            name: name.to_string(),
            address: "台北市大安區復興南路一段1號".to_string(),
            phone: "02-2709".to_string(),
            team: " ".to_string(),
            code: String::new(),
            source: SourceCategory::Hospice,
            region: Region::Taipei,
            sub_region: SubRegion::named("大安區"),
        }
    }

    #[test]
    fn fields_fall_back_to_placeholder() {
        let records = vec![record("仁愛醫院")];
        let directory = ServiceDirectory::default();
        let view = detail(&records[0], &directory);
        assert!(view.services.is_none());

        let fields = view.fields();
        assert_eq!(fields[3], ("整合團隊", "無"));
        assert_eq!(fields[4], ("機構代碼", "無"));
        assert_eq!(fields[5], ("類別", "安寧照護／護理之家"));
        assert_eq!(fields[7], ("鄉鎮市區", "大安區"));
    }

    #[test]
    fn map_url_encodes_address() {
        let mut place = record("仁愛醫院");
        place.address = "台北市大安區 1號".to_string();
        let directory = ServiceDirectory::default();
        assert_eq!(
            detail(&place, &directory).map_url(),
            "https://www.google.com/maps/search/?api=1&query=\
             %E5%8F%B0%E5%8C%97%E5%B8%82%E5%A4%A7%E5%AE%89%E5%8D%80%201%E8%99%9F"
        );
    }

    #[test]
    fn joins_service_record() {
        let records = vec![record("仁愛醫院")];
        let directory = ServiceDirectory::new(vec![ServiceRecord {
            institution_name: "市立仁愛醫院".to_string(),
            metadata: Vec::new(),
            flags: vec![ServiceFlag::from_cell("安寧療護", "1")],
        }]);
        let view = detail(&records[0], &directory);
        assert_eq!(
            view.services.map(|s| s.institution_name.as_str()),
            Some("市立仁愛醫院")
        );
    }

    #[test]
    fn find_prefers_exact_name() {
        let records = vec![record("仁愛醫院分院"), record("仁愛醫院")];
        assert_eq!(
            find_by_name(&records, "仁愛醫院").map(|r| r.name.as_str()),
            Some("仁愛醫院")
        );
        assert_eq!(
            find_by_name(&records, "分院").map(|r| r.name.as_str()),
            Some("仁愛醫院分院")
        );
        assert!(find_by_name(&records, " ").is_none());
    }
}
