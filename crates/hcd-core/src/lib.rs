pub mod classify;
pub mod dataset;
pub mod detail;
pub mod filter;
pub mod paginate;
pub mod road;
pub mod search;
pub mod services;
pub mod suggest;

pub use classify::{
    AddressClassifier, Classification, SubRegionStrategy, SuffixPattern, classify,
    locate_district, split_region,
};
pub use dataset::{Dataset, DistrictIndex};
pub use detail::{EMPTY_FIELD, RecordDetail, detail, display_or_empty, find_by_name};
pub use filter::{RecordFilter, filter};
pub use paginate::{Paginator, clamp_page, page, page_count};
pub use road::{RoadIndex, RoadLookup, road_token};
pub use search::{SearchOutcome, search};
pub use services::ServiceDirectory;
pub use suggest::suggest;
