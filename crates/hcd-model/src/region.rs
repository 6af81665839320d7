//! Top-level administrative regions of Taiwan.
//!
//! The declaration order of [`Region`] is the canonical classification order:
//! six municipalities, three provincial cities, then thirteen counties. Prefix
//! matching walks [`Region::CANONICAL`] in this order, and the derived `Ord`
//! sorts region pickers the same way with [`Region::Other`] last.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::text::fold_variants;

/// Sentinel label for an address that matched no region or no district.
pub const OTHER_LABEL: &str = "其他";

/// Sentinel label for the "match everything" picker choice.
pub const ALL_LABEL: &str = "全部";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    // Municipalities
    #[serde(rename = "台北市")]
    Taipei,
    #[serde(rename = "新北市")]
    NewTaipei,
    #[serde(rename = "桃園市")]
    Taoyuan,
    #[serde(rename = "台中市")]
    Taichung,
    #[serde(rename = "台南市")]
    Tainan,
    #[serde(rename = "高雄市")]
    Kaohsiung,
    // Provincial cities
    #[serde(rename = "基隆市")]
    Keelung,
    #[serde(rename = "新竹市")]
    HsinchuCity,
    #[serde(rename = "嘉義市")]
    ChiayiCity,
    // Counties
    #[serde(rename = "新竹縣")]
    HsinchuCounty,
    #[serde(rename = "苗栗縣")]
    Miaoli,
    #[serde(rename = "彰化縣")]
    Changhua,
    #[serde(rename = "南投縣")]
    Nantou,
    #[serde(rename = "雲林縣")]
    Yunlin,
    #[serde(rename = "嘉義縣")]
    ChiayiCounty,
    #[serde(rename = "屏東縣")]
    Pingtung,
    #[serde(rename = "宜蘭縣")]
    Yilan,
    #[serde(rename = "花蓮縣")]
    Hualien,
    #[serde(rename = "台東縣")]
    Taitung,
    #[serde(rename = "澎湖縣")]
    Penghu,
    #[serde(rename = "金門縣")]
    Kinmen,
    #[serde(rename = "連江縣")]
    Lienchiang,
    /// No canonical region prefix matched.
    #[serde(rename = "其他")]
    Other,
}

impl Region {
    /// The 22 real regions in classification order.
    pub const CANONICAL: [Region; 22] = [
        Region::Taipei,
        Region::NewTaipei,
        Region::Taoyuan,
        Region::Taichung,
        Region::Tainan,
        Region::Kaohsiung,
        Region::Keelung,
        Region::HsinchuCity,
        Region::ChiayiCity,
        Region::HsinchuCounty,
        Region::Miaoli,
        Region::Changhua,
        Region::Nantou,
        Region::Yunlin,
        Region::ChiayiCounty,
        Region::Pingtung,
        Region::Yilan,
        Region::Hualien,
        Region::Taitung,
        Region::Penghu,
        Region::Kinmen,
        Region::Lienchiang,
    ];

    /// Returns the folded (台 rather than 臺) name used in addresses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Taipei => "台北市",
            Region::NewTaipei => "新北市",
            Region::Taoyuan => "桃園市",
            Region::Taichung => "台中市",
            Region::Tainan => "台南市",
            Region::Kaohsiung => "高雄市",
            Region::Keelung => "基隆市",
            Region::HsinchuCity => "新竹市",
            Region::ChiayiCity => "嘉義市",
            Region::HsinchuCounty => "新竹縣",
            Region::Miaoli => "苗栗縣",
            Region::Changhua => "彰化縣",
            Region::Nantou => "南投縣",
            Region::Yunlin => "雲林縣",
            Region::ChiayiCounty => "嘉義縣",
            Region::Pingtung => "屏東縣",
            Region::Yilan => "宜蘭縣",
            Region::Hualien => "花蓮縣",
            Region::Taitung => "台東縣",
            Region::Penghu => "澎湖縣",
            Region::Kinmen => "金門縣",
            Region::Lienchiang => "連江縣",
            Region::Other => OTHER_LABEL,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Region::Other)
    }

    /// Returns the first canonical region that prefixes `address`.
    ///
    /// The address is expected to be folded already.
    pub fn from_address_prefix(address: &str) -> Option<Region> {
        Region::CANONICAL
            .into_iter()
            .find(|region| address.starts_with(region.as_str()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = ModelError;

    /// Parses a region name, accepting the 臺 spelling and the 其他 sentinel.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = fold_variants(s.trim());
        if folded == OTHER_LABEL {
            return Ok(Region::Other);
        }
        Region::CANONICAL
            .into_iter()
            .find(|region| region.as_str() == folded)
            .ok_or_else(|| ModelError::UnknownRegion(s.to_string()))
    }
}

/// Second-level division (區/鄉/鎮/市) nested under a region.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubRegion {
    Named(String),
    Other,
}

impl SubRegion {
    pub fn named(name: impl Into<String>) -> Self {
        SubRegion::Named(name.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            SubRegion::Named(name) => name,
            SubRegion::Other => OTHER_LABEL,
        }
    }

    pub fn is_other(&self) -> bool {
        matches!(self, SubRegion::Other)
    }
}

impl fmt::Display for SubRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for SubRegion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SubRegion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == OTHER_LABEL || raw.is_empty() {
            Ok(SubRegion::Other)
        } else {
            Ok(SubRegion::Named(raw))
        }
    }
}
