//! Immutable, classified record set.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use hcd_model::{
    RawRecord, Record, Region, SearchOptions, SourceCategory, SubRegion, fold_variants, non_blank,
};

use crate::classify::AddressClassifier;
use crate::road::{RoadIndex, RoadLookup};

/// Regions in canonical order (`其他` last) with their districts in
/// first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DistrictIndex {
    regions: BTreeMap<Region, Vec<SubRegion>>,
}

impl DistrictIndex {
    pub fn from_records(records: &[Record]) -> Self {
        let mut regions: BTreeMap<Region, Vec<SubRegion>> = BTreeMap::new();
        for record in records {
            let districts = regions.entry(record.region).or_default();
            if !districts.contains(&record.sub_region) {
                districts.push(record.sub_region.clone());
            }
        }
        Self { regions }
    }

    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.regions.keys().copied()
    }

    pub fn districts_of(&self, region: Region) -> &[SubRegion] {
        self.regions.get(&region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, &[SubRegion])> + '_ {
        self.regions
            .iter()
            .map(|(region, districts)| (*region, districts.as_slice()))
    }

    /// True when some record was classified into the named district.
    pub fn contains_district(&self, name: &str) -> bool {
        self.regions
            .values()
            .flatten()
            .any(|district| !district.is_other() && district.as_str() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Classified records plus the derived district index.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    districts: DistrictIndex,
    district_names: HashSet<String>,
}

impl Dataset {
    /// Drops rows lacking a name or address, folds and classifies the rest.
    pub fn build(raw_records: Vec<RawRecord>, options: &SearchOptions) -> Self {
        let total = raw_records.len();
        let classifier = AddressClassifier::new();
        let mut records: Vec<Record> = raw_records
            .into_iter()
            .filter_map(|raw| to_record(raw, &classifier))
            .collect();
        let dropped = total - records.len();
        if dropped > 0 {
            tracing::debug!(dropped, total, "dropped rows without name or address");
        }

        if options.road_fallback {
            apply_road_fallback(&mut records);
        }

        let districts = DistrictIndex::from_records(&records);
        let district_names = districts
            .iter()
            .flat_map(|(_, subs)| subs.iter())
            .filter(|sub| !sub.is_other())
            .map(|sub| sub.as_str().to_string())
            .collect();
        tracing::debug!(
            records = records.len(),
            regions = districts.regions().count(),
            "built dataset"
        );

        Self {
            records,
            districts,
            district_names,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn district_index(&self) -> &DistrictIndex {
        &self.districts
    }

    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.districts.regions()
    }

    pub fn districts_of(&self, region: Region) -> &[SubRegion] {
        self.districts.districts_of(region)
    }

    /// Set of named districts, for keyword-as-district matching.
    pub fn district_names(&self) -> &HashSet<String> {
        &self.district_names
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn to_record(raw: RawRecord, classifier: &AddressClassifier) -> Option<Record> {
    let name = non_blank(raw.name.as_deref())?.to_string();
    let address = fold_variants(non_blank(raw.address.as_deref())?);
    let (region, sub_region) = classifier.classify(&address).into_parts();
    let field = |value: Option<String>| value.map(|v| v.trim().to_string()).unwrap_or_default();
    Some(Record {
        name,
        phone: field(raw.phone),
        team: field(raw.team),
        code: field(raw.code),
        source: raw.source.unwrap_or(SourceCategory::HomeCare),
        address,
        region,
        sub_region,
    })
}

/// Re-resolves records with an unknown district from roads shared with
/// records whose district is known.
fn apply_road_fallback(records: &mut [Record]) {
    let index = RoadIndex::from_addresses(
        records
            .iter()
            .filter(|record| !record.sub_region.is_other())
            .map(|record| (record.address.as_str(), record.sub_region.as_str())),
    );
    if index.is_empty() {
        return;
    }

    let classifier = AddressClassifier::new().with_strategy(Box::new(RoadLookup::new(index)));
    let mut resolved = 0usize;
    for record in records.iter_mut().filter(|record| record.sub_region.is_other()) {
        let sub_region = classifier.classify(&record.address).sub_region;
        if !sub_region.is_other() {
            record.sub_region = sub_region;
            resolved += 1;
        }
    }
    tracing::debug!(resolved, "applied road fallback");
}
