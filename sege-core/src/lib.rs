//! Domain types and pure logic for the SEGE province dashboard.
//!
//! SEGE is the Turkish socio-economic development index published per
//! province. This crate holds everything that does not touch the DOM or the
//! database: the reference-year and analysis-mode enumerations, the indicator
//! record and its CSV parser, the Turkish name normalizer used on both sides
//! of every province-name comparison, and the three-stop color scale that
//! drives the choropleth fill.

pub mod colorscale;
pub mod mode;
pub mod normalize;
pub mod record;
pub mod year;

pub use colorscale::{LinearColorScale, NO_DATA_COLOR};
pub use mode::AnalysisMode;
pub use normalize::normalize_name;
pub use record::{parse_indicator_csv, IndicatorSnapshots, ProvinceRecord};
pub use year::YearKey;
