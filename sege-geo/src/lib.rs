//! Province boundary geometry for the SEGE dashboard.
//!
//! Loads the first-level administrative boundaries from GeoJSON, renaming the
//! source name attribute (`NAME_1`) to a canonical `name` field, and provides
//! the planar geometry the map needs: point-in-polygon tests, distance to a
//! shape, centroids, nearest-shape resolution for map clicks, and the
//! left-outer merge of geometry rows with the active year's indicator table.

pub mod geometry;
pub mod merge;
pub mod shape;

pub use geometry::GeoPoint;
pub use merge::{MergedRow, MergedView};
pub use shape::{nearest_shape, parse_feature_collection, ProvinceShape, PROVINCE_GEOJSON};
