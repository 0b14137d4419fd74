//! Left-outer merge of geometry rows with an indicator snapshot.

use std::collections::HashMap;

use sege_core::{normalize_name, ProvinceRecord};

use crate::shape::ProvinceShape;

/// One merged row: the geometry row's name plus its indicator match, if any.
/// Row `i` corresponds to shape `i` of the geometry table the view was built
/// from, so left-outer cardinality is preserved by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    /// Province name as spelled in the boundary file.
    pub name: String,
    /// Matching indicator record for the active year; `None` renders as the
    /// neutral no-data fill.
    pub record: Option<ProvinceRecord>,
}

/// The merged view for one year. Recomputed whenever the year changes.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedView {
    pub rows: Vec<MergedRow>,
}

impl MergedView {
    /// Join every geometry row against the indicator table on normalized
    /// name. Duplicate indicator names keep their first occurrence; geometry
    /// rows without a match are kept with empty indicator fields and logged.
    pub fn build(shapes: &[ProvinceShape], records: &[ProvinceRecord]) -> Self {
        let mut by_name: HashMap<String, &ProvinceRecord> = HashMap::new();
        for record in records {
            by_name.entry(normalize_name(&record.name)).or_insert(record);
        }

        let rows = shapes
            .iter()
            .map(|shape| {
                let record = by_name.get(&normalize_name(&shape.name)).map(|r| (*r).clone());
                if record.is_none() {
                    log::warn!("no indicator row matches boundary name {:?}", shape.name);
                }
                MergedRow {
                    name: shape.name.clone(),
                    record,
                }
            })
            .collect();

        Self { rows }
    }

    /// The indicator record merged onto a shape index, if any.
    pub fn record_at(&self, index: usize) -> Option<&ProvinceRecord> {
        self.rows.get(index).and_then(|row| row.record.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeoPoint;

    fn shape(name: &str) -> ProvinceShape {
        ProvinceShape {
            name: name.to_string(),
            polygons: vec![vec![vec![
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(1.0, 0.0),
                GeoPoint::new(1.0, 1.0),
                GeoPoint::new(0.0, 0.0),
            ]]],
        }
    }

    fn record(name: &str, rank: i64) -> ProvinceRecord {
        ProvinceRecord {
            name: name.to_string(),
            index_value: rank as f64,
            rank,
            tier: 1,
            region: "Marmara".to_string(),
        }
    }

    #[test]
    fn cardinality_matches_geometry_side() {
        let shapes = vec![shape("Istanbul"), shape("Atlantis"), shape("Izmir")];
        let records = vec![record("İstanbul", 1), record("İzmir", 3)];
        let merged = MergedView::build(&shapes, &records);
        assert_eq!(merged.rows.len(), 3);
        assert!(merged.rows[0].record.is_some());
        assert!(merged.rows[1].record.is_none());
        assert!(merged.rows[2].record.is_some());
    }

    #[test]
    fn matching_is_diacritic_insensitive() {
        let shapes = vec![shape("Sanliurfa")];
        let records = vec![record("Şanlıurfa", 68)];
        let merged = MergedView::build(&shapes, &records);
        assert_eq!(merged.record_at(0).unwrap().rank, 68);
    }

    #[test]
    fn duplicate_indicator_names_keep_first() {
        let shapes = vec![shape("Van")];
        let records = vec![record("Van", 73), record("Van", 99)];
        let merged = MergedView::build(&shapes, &records);
        assert_eq!(merged.record_at(0).unwrap().rank, 73);
    }

    #[test]
    fn empty_indicator_table_keeps_all_geometry() {
        let shapes = vec![shape("A"), shape("B")];
        let merged = MergedView::build(&shapes, &[]);
        assert_eq!(merged.rows.len(), 2);
        assert!(merged.rows.iter().all(|row| row.record.is_none()));
    }
}
