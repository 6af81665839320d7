//! Generative checks for classification, filtering, and pagination.

use hcd_core::{Dataset, Paginator, RecordFilter, classify, filter, page_count};
use hcd_model::{Category, Criteria, KeywordCase, RawRecord, Record, Region, SearchOptions};
use proptest::prelude::*;

const PREFIXES: &[&str] = &["台北市", "臺北市", "新北市", "高雄市", "新竹縣", "連江縣", "東京都", ""];
const DISTRICTS: &[&str] = &["大安區", "板橋區", "苓雅區", "竹北市", "南竿鄉", ""];
const ROADS: &[&str] = &["復興南路", "文化路", "四維三路", "光明六路", "介壽街", ""];
const NAMES: &[&str] = &["市立醫院", "健康診所", "仁愛護理之家", "衛生所", "養護中心", "藥局"];

fn address() -> impl Strategy<Value = String> {
    (
        prop::sample::select(PREFIXES),
        prop::sample::select(DISTRICTS),
        prop::sample::select(ROADS),
        0u32..500,
    )
        .prop_map(|(prefix, district, road, number)| format!("{prefix}{district}{road}{number}號"))
}

fn raw_record() -> impl Strategy<Value = RawRecord> {
    (prop::sample::select(NAMES), address(), "[0-9-]{0,10}").prop_map(|(name, address, phone)| {
        RawRecord {
            name: Some(name.to_string()),
            address: Some(address),
            phone: Some(phone),
            ..RawRecord::default()
        }
    })
}

fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(raw_record(), 0..80)
        .prop_map(|rows| Dataset::build(rows, &SearchOptions::default()))
}

fn criteria() -> impl Strategy<Value = Criteria> {
    (
        prop::option::of(prop::sample::select(vec!["全部", "台北市", "臺北市", "高雄市", "新竹縣"])),
        prop::option::of(prop::sample::select(vec!["全部", "大安區", "苓雅區", "竹北市"])),
        prop::option::of(prop::sample::select(vec!["", " ", "醫院", "路", "02", "診所"])),
        prop::option::of(prop::sample::select(Category::ALL.to_vec())),
    )
        .prop_map(|(region, sub_region, keyword, category)| Criteria {
            region: region.map(str::to_string),
            sub_region: sub_region.map(str::to_string),
            keyword: keyword.map(str::to_string),
            category,
        })
}

fn is_subsequence(subset: &[&Record], records: &[Record]) -> bool {
    let mut remaining = records.iter();
    subset
        .iter()
        .all(|wanted| remaining.any(|record| std::ptr::eq(record, *wanted)))
}

proptest! {
    #[test]
    fn classify_is_total_and_pure(address in ".{0,40}") {
        let first = classify(&address);
        prop_assert_eq!(&first, &classify(&address));
        prop_assert!(first.region.is_other() || Region::CANONICAL.contains(&first.region));
        prop_assert!(!first.sub_region.as_str().is_empty());
    }

    #[test]
    fn classify_generated_addresses_by_prefix(address in address()) {
        let result = classify(&address);
        let folded = address.replace('臺', "台");
        match Region::CANONICAL.iter().find(|region| folded.starts_with(region.as_str())) {
            Some(region) => prop_assert_eq!(result.region, *region),
            None => prop_assert_eq!(result.region, Region::Other),
        }
    }

    #[test]
    fn filter_returns_ordered_subset(dataset in dataset(), criteria in criteria()) {
        let matched = filter(dataset.records(), &criteria);
        prop_assert!(matched.len() <= dataset.len());
        prop_assert!(is_subsequence(&matched, dataset.records()));
        for record in &matched {
            prop_assert!(RecordFilter::new().matches(record, &criteria));
        }
    }

    #[test]
    fn default_criteria_keeps_everything(dataset in dataset()) {
        let insensitive = RecordFilter::new().with_keyword_case(KeywordCase::Insensitive);
        prop_assert_eq!(filter(dataset.records(), &Criteria::new()).len(), dataset.len());
        prop_assert_eq!(insensitive.filter(dataset.records(), &Criteria::new()).len(), dataset.len());
    }

    #[test]
    fn pages_reconstruct_filtered_set(
        dataset in dataset(),
        criteria in criteria(),
        page_size in 1usize..30,
    ) {
        let matched = filter(dataset.records(), &criteria);
        let paginator = Paginator::new(page_size);
        let pages: Vec<&[&Record]> = paginator.pages(&matched).collect();

        prop_assert_eq!(pages.len(), page_count(matched.len(), page_size));
        prop_assert!(pages.iter().all(|page| !page.is_empty() && page.len() <= page_size));
        let rebuilt: Vec<&Record> = pages.concat();
        prop_assert_eq!(rebuilt, matched);
    }
}
