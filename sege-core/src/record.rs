//! Province indicator records and the CSV loader.
//!
//! The published SEGE table is consumed as a CSV export with the columns
//! `İller` (or `İl`), `Endeks Değeri`, `Sıra`, `Kademe`, `Bölge`. Column
//! positions are resolved from the header row; when neither name header is
//! present the first column is assumed to hold the province name.

use std::collections::BTreeMap;

use anyhow::{bail, Context};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::year::YearKey;

/// Embedded fixture with the full 81-province table.
pub static INDICATOR_CSV: &str = include_str!("../../fixtures/sege_endeksleri.csv");

/// One province row of a SEGE snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceRecord {
    /// Province name as spelled in the source table.
    pub name: String,
    /// SEGE index value ("Endeks Değeri").
    pub index_value: f64,
    /// National rank, 1 = most developed ("Sıra").
    pub rank: i64,
    /// Development tier ("Kademe"), small ordinal.
    pub tier: i64,
    /// Geographic region label ("Bölge").
    pub region: String,
}

/// Locate a column index by header name, with alternatives.
fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.trim() == *n))
}

/// Parse a SEGE indicator CSV into province records.
///
/// Fails when the input is empty, when one of the value headers is missing,
/// or when no row parses. Individual rows with malformed numbers are skipped
/// with a warning rather than failing the whole load.
pub fn parse_indicator_csv(csv_data: &str) -> anyhow::Result<Vec<ProvinceRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers().context("indicator CSV has no header row")?.clone();
    if headers.is_empty() {
        bail!("indicator CSV header row is empty");
    }

    // "İl" is canonical, "İller" appears in older exports. Fall back to the
    // first column when neither header is present.
    let name_col = find_column(&headers, &["İl", "İller"]).unwrap_or(0);
    let value_col = find_column(&headers, &["Endeks Değeri"])
        .context("missing column: Endeks Değeri")?;
    let rank_col = find_column(&headers, &["Sıra"]).context("missing column: Sıra")?;
    let tier_col = find_column(&headers, &["Kademe"]).context("missing column: Kademe")?;
    let region_col = find_column(&headers, &["Bölge"]).context("missing column: Bölge")?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let name = row.get(name_col).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }
        let index_value = row.get(value_col).unwrap_or("").trim().parse::<f64>();
        let rank = row.get(rank_col).unwrap_or("").trim().parse::<i64>();
        let tier = row.get(tier_col).unwrap_or("").trim().parse::<i64>();
        match (index_value, rank, tier) {
            (Ok(index_value), Ok(rank), Ok(tier)) => records.push(ProvinceRecord {
                name: name.to_string(),
                index_value,
                rank,
                tier,
                region: row.get(region_col).unwrap_or("").trim().to_string(),
            }),
            _ => {
                log::warn!("skipping malformed indicator row for {name:?}");
            }
        }
    }

    if records.is_empty() {
        bail!("indicator CSV produced no usable rows");
    }
    Ok(records)
}

/// Per-year SEGE snapshots.
///
/// The year-to-source mapping is a configuration input: real per-year tables
/// plug in through [`IndicatorSnapshots::from_sources`]. The published data
/// currently available to this repo covers a single table, which
/// [`IndicatorSnapshots::from_single_source`] reuses for every year.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSnapshots {
    snapshots: BTreeMap<YearKey, Vec<ProvinceRecord>>,
}

impl IndicatorSnapshots {
    /// Parse one CSV source per year.
    pub fn from_sources(sources: &[(YearKey, &str)]) -> anyhow::Result<Self> {
        let mut snapshots = BTreeMap::new();
        for (year, csv_data) in sources {
            let records = parse_indicator_csv(csv_data)
                .with_context(|| format!("failed to load SEGE {} table", year.label()))?;
            snapshots.insert(*year, records);
        }
        Ok(Self { snapshots })
    }

    /// Reuse one CSV source for all supported years.
    pub fn from_single_source(csv_data: &str) -> anyhow::Result<Self> {
        let sources: Vec<(YearKey, &str)> =
            YearKey::ALL.iter().map(|y| (*y, csv_data)).collect();
        Self::from_sources(&sources)
    }

    /// The snapshot for one year, if loaded.
    pub fn get(&self, year: YearKey) -> Option<&[ProvinceRecord]> {
        self.snapshots.get(&year).map(|v| v.as_slice())
    }

    /// Years with a loaded snapshot, chronological.
    pub fn years(&self) -> impl Iterator<Item = YearKey> + '_ {
        self.snapshots.keys().copied()
    }
}
