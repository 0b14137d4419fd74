//! Query result models.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use sege_core::ProvinceRecord;
use serde::Serialize;

/// One province row of a year snapshot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProvinceInfo {
    /// Province name as spelled in the indicator table.
    pub name: String,
    /// SEGE index value.
    pub index_value: f64,
    /// National rank, 1 = most developed.
    pub rank: i64,
    /// Development tier (kademe).
    pub tier: i64,
    /// Geographic region (bölge).
    pub region: String,
}

impl From<ProvinceInfo> for ProvinceRecord {
    fn from(info: ProvinceInfo) -> Self {
        ProvinceRecord {
            name: info.name,
            index_value: info.index_value,
            rank: info.rank,
            tier: info.tier,
            region: info.region,
        }
    }
}

/// A (region, index value) pair feeding the regional box distribution.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegionValue {
    pub region: String,
    pub value: f64,
}

/// Province count for one development tier.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TierCount {
    pub tier: i64,
    pub count: i64,
}

/// The numeric columns of one province row, feeding the correlation matrix.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NumericRow {
    pub index_value: f64,
    pub rank: f64,
    pub tier: f64,
}
