//! Data model for the home-care institution directory.

pub mod category;
pub mod criteria;
pub mod error;
pub mod options;
pub mod record;
pub mod region;
pub mod service;
pub mod text;

pub use category::Category;
pub use criteria::{Criteria, SearchState};
pub use error::{ModelError, Result};
pub use options::{DEFAULT_PAGE_SIZE, DEFAULT_SUGGESTION_LIMIT, KeywordCase, SearchOptions};
pub use record::{RawRecord, Record, SourceCategory};
pub use region::{ALL_LABEL, OTHER_LABEL, Region, SubRegion};
pub use service::{PROVIDED_FLAG, ServiceFlag, ServiceRecord};
pub use text::{fold_variants, non_blank};
