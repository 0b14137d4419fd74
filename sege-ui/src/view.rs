//! Pure view models for one render cycle.
//!
//! Every interaction re-runs the composition with the current
//! (year, selected province, analysis mode) inputs; these builders turn the
//! database, geometry and merged view into the exact payloads the Leaflet/D3
//! bridge and the panels consume. Nothing here touches the DOM, so the
//! end-to-end dashboard scenarios are tested right in this module.

use sege_analysis::{correlation_matrix, regional_distribution, CorrelationMatrix, RegionBox};
use sege_core::{normalize_name, LinearColorScale, YearKey, NO_DATA_COLOR};
use sege_core::AnalysisMode;
use sege_db::models::TierCount;
use sege_db::Database;
use sege_geo::{nearest_shape, GeoPoint, MergedView, ProvinceShape};
use serde::Serialize;
use serde_json::{json, Value};

/// Default map center (Ankara) and national zoom level.
pub const MAP_CENTER: (f64, f64) = (39.9334, 32.8597);
pub const MAP_ZOOM: u8 = 6;

/// The choropleth payload: a styled FeatureCollection plus legend config.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    /// GeoJSON FeatureCollection with per-feature `fillColor`, `tooltip`
    /// and `popup` properties.
    pub feature_collection: Value,
    /// Legend color stops and caption for the active year.
    pub legend: Value,
}

/// Build the map view for one year's merged table.
///
/// Each geometry row becomes one feature. A missing indicator match, or a
/// non-finite index value slipping through, degrades that single feature to
/// the neutral fill and a "Veri bulunamadı" popup; the render never aborts
/// over one province.
pub fn build_map_view(shapes: &[ProvinceShape], merged: &MergedView, year: YearKey) -> MapView {
    let values: Vec<f64> = merged
        .rows
        .iter()
        .filter_map(|row| row.record.as_ref().map(|r| r.index_value))
        .filter(|v| v.is_finite())
        .collect();
    let caption = format!("SEGE Endeks Değeri ({year})");
    let scale = LinearColorScale::for_values(&values, caption.clone());

    let features: Vec<Value> = shapes
        .iter()
        .zip(merged.rows.iter())
        .map(|(shape, row)| {
            let styled = row
                .record
                .as_ref()
                .filter(|r| r.index_value.is_finite())
                .and_then(|r| scale.as_ref().map(|s| (r, s)));
            let (fill, popup) = match styled {
                Some((record, scale)) => (
                    scale.color_for(record.index_value),
                    format!(
                        "<b>{}</b><br>Endeks Değeri: {:.4}<br>Sıra: {}<br>Kademe: {}",
                        row.name, record.index_value, record.rank, record.tier
                    ),
                ),
                None => (
                    NO_DATA_COLOR.to_string(),
                    format!("<b>{}</b><br>Veri bulunamadı", row.name),
                ),
            };
            json!({
                "type": "Feature",
                "properties": {
                    "name": row.name,
                    "fillColor": fill,
                    "tooltip": format!("İl: {}", row.name),
                    "popup": popup,
                },
                "geometry": shape.geometry_value(),
            })
        })
        .collect();

    let legend = match &scale {
        Some(scale) => json!({
            "caption": caption,
            "vmin": scale.vmin(),
            "vmax": scale.vmax(),
            "colors": ["#ff0000", "#ffff00", "#00ff00"],
        }),
        None => json!({ "caption": caption }),
    };

    MapView {
        feature_collection: json!({
            "type": "FeatureCollection",
            "features": features,
        }),
        legend,
    }
}

/// Metrics shown by the detail panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub name: String,
    pub rank: i64,
    pub tier: i64,
    /// Index value rounded to 4 decimals, panel precision.
    pub index_value: f64,
    pub region: String,
}

/// Resolve the detail panel for the current selection, falling back to the
/// year's first row when the remembered name is absent from the active
/// table. `None` only when the year has no rows at all (load already
/// failed upstream).
pub fn build_detail_view(
    db: &Database,
    year: YearKey,
    selected: Option<&str>,
) -> anyhow::Result<Option<DetailView>> {
    let info = match selected {
        Some(name) => match db.query_province(year.label(), &normalize_name(name))? {
            Some(info) => Some(info),
            None => db.query_first_province(year.label())?,
        },
        None => db.query_first_province(year.label())?,
    };
    Ok(info.map(|info| DetailView {
        name: info.name,
        rank: info.rank,
        tier: info.tier,
        index_value: (info.index_value * 10_000.0).round() / 10_000.0,
        region: info.region,
    }))
}

/// One rendered analysis chart, matching the three panel modes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisChart {
    RegionalDistribution {
        title: String,
        boxes: Vec<RegionBox>,
    },
    TierCounts {
        title: String,
        counts: Vec<TierCount>,
    },
    Correlation {
        title: String,
        matrix: CorrelationMatrix,
    },
}

/// Build the chart for one (mode, year) pair; `None` when no mode resolves.
pub fn build_analysis_chart(
    db: &Database,
    year: YearKey,
    mode: Option<AnalysisMode>,
) -> anyhow::Result<Option<AnalysisChart>> {
    let Some(mode) = mode else {
        return Ok(None);
    };
    let chart = match mode {
        AnalysisMode::RegionalDistribution => AnalysisChart::RegionalDistribution {
            title: format!("{year} Yılı Bölgesel SEGE Dağılımı"),
            boxes: regional_distribution(&db.query_region_values(year.label())?),
        },
        AnalysisMode::TierAnalysis => AnalysisChart::TierCounts {
            title: format!("{year} Yılı Kademe Dağılımı"),
            counts: db.query_tier_counts(year.label())?,
        },
        AnalysisMode::Correlation => AnalysisChart::Correlation {
            title: format!("{year} Yılı Değişkenler Arası Korelasyon"),
            matrix: correlation_matrix(&db.query_numeric_rows(year.label())?),
        },
    };
    Ok(Some(chart))
}

/// Resolve a map click to the indicator-table spelling of the nearest
/// province. Clicks outside every polygon still resolve via planar nearest;
/// a click only yields `None` when the nearest boundary name has no row in
/// the active year (logged, selection left untouched).
pub fn resolve_click(
    shapes: &[ProvinceShape],
    db: &Database,
    year: YearKey,
    lat: f64,
    lng: f64,
) -> Option<String> {
    let index = nearest_shape(shapes, GeoPoint::new(lng, lat))?;
    let boundary_name = &shapes[index].name;
    match db.query_province(year.label(), &normalize_name(boundary_name)) {
        Ok(Some(info)) => Some(info.name),
        Ok(None) => {
            log::warn!("clicked near {boundary_name:?} but the {year} table has no such row");
            None
        }
        Err(e) => {
            log::warn!("click lookup failed for {boundary_name:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sege_core::record::INDICATOR_CSV;
    use sege_core::IndicatorSnapshots;
    use sege_geo::{parse_feature_collection, PROVINCE_GEOJSON};

    fn fixture_db() -> Database {
        let snapshots = IndicatorSnapshots::from_single_source(INDICATOR_CSV).unwrap();
        let db = Database::new().unwrap();
        for year in YearKey::ALL {
            db.load_snapshot(year.label(), snapshots.get(year).unwrap())
                .unwrap();
        }
        db
    }

    fn fixture_shapes() -> Vec<ProvinceShape> {
        parse_feature_collection(PROVINCE_GEOJSON).unwrap()
    }

    #[test]
    fn ankara_detail_matches_the_2003_source_row() {
        let db = fixture_db();
        let detail = build_detail_view(&db, YearKey::Y2003, Some("Ankara"))
            .unwrap()
            .unwrap();
        assert_eq!(detail.name, "Ankara");
        assert_eq!(detail.rank, 2);
        assert_eq!(detail.tier, 1);
        assert_eq!(detail.index_value, 4.5123);
        assert_eq!(detail.region, "İç Anadolu");
    }

    #[test]
    fn absent_selection_falls_back_to_first_row() {
        let db = fixture_db();
        let detail = build_detail_view(&db, YearKey::Y2003, Some("Atlantis"))
            .unwrap()
            .unwrap();
        assert_eq!(detail.name, "İstanbul");
        let unselected = build_detail_view(&db, YearKey::Y2003, None).unwrap().unwrap();
        assert_eq!(unselected.name, "İstanbul");
    }

    #[test]
    fn switching_mode_switches_the_chart_kind_only() {
        let db = fixture_db();
        let year = YearKey::Y2003;
        let selected = Some("Ankara");

        let first = build_analysis_chart(
            &db,
            year,
            AnalysisMode::from_label("Bölgesel Dağılım"),
        )
        .unwrap()
        .unwrap();
        assert!(matches!(first, AnalysisChart::RegionalDistribution { .. }));

        let second = build_analysis_chart(&db, year, AnalysisMode::from_label("Kademe Analizi"))
            .unwrap()
            .unwrap();
        match &second {
            AnalysisChart::TierCounts { counts, .. } => {
                let total: i64 = counts.iter().map(|c| c.count).sum();
                assert_eq!(total, 81);
            }
            other => panic!("expected tier counts, got {other:?}"),
        }

        // The chart swap leaves year and province selection untouched.
        let detail = build_detail_view(&db, year, selected).unwrap().unwrap();
        assert_eq!(detail.name, "Ankara");
    }

    #[test]
    fn unknown_mode_renders_no_chart() {
        let db = fixture_db();
        let chart =
            build_analysis_chart(&db, YearKey::Y2003, AnalysisMode::from_label("Trend")).unwrap();
        assert!(chart.is_none());
    }

    #[test]
    fn correlation_chart_is_symmetric_with_unit_diagonal() {
        let db = fixture_db();
        let chart = build_analysis_chart(&db, YearKey::Y2017, Some(AnalysisMode::Correlation))
            .unwrap()
            .unwrap();
        let AnalysisChart::Correlation { matrix, .. } = chart else {
            panic!("expected correlation chart");
        };
        for i in 0..3 {
            assert_eq!(matrix.values[i][i], 1.0);
        }
        assert_eq!(matrix.values[0][1], matrix.values[1][0]);
    }

    #[test]
    fn clicking_a_centroid_selects_that_province() {
        let db = fixture_db();
        let shapes = fixture_shapes();
        let ankara = shapes.iter().find(|s| s.name == "Ankara").unwrap();
        let centroid = ankara.centroid().unwrap();
        let resolved =
            resolve_click(&shapes, &db, YearKey::Y2003, centroid.lat, centroid.lon).unwrap();
        assert_eq!(resolved, "Ankara");
    }

    #[test]
    fn clicking_open_water_still_resolves_to_the_nearest_province() {
        let db = fixture_db();
        let shapes = fixture_shapes();
        // Well into the Black Sea, outside every polygon.
        let resolved = resolve_click(&shapes, &db, YearKey::Y2003, 43.8, 34.0);
        assert!(resolved.is_some());
    }

    #[test]
    fn map_view_keeps_left_outer_cardinality_and_grays_unmatched() {
        let db = fixture_db();
        let shapes = fixture_shapes();
        let provinces = db.query_provinces(YearKey::Y2003.label()).unwrap();
        let records: Vec<sege_core::ProvinceRecord> =
            provinces.into_iter().map(Into::into).collect();
        // Drop Ankara from the indicator side to force one unmatched row.
        let without_ankara: Vec<_> = records
            .iter()
            .filter(|r| r.name != "Ankara")
            .cloned()
            .collect();
        let merged = MergedView::build(&shapes, &without_ankara);
        let view = build_map_view(&shapes, &merged, YearKey::Y2003);

        let features = view.feature_collection["features"].as_array().unwrap();
        assert_eq!(features.len(), shapes.len());
        let ankara = features
            .iter()
            .find(|f| f["properties"]["name"] == "Ankara")
            .unwrap();
        assert_eq!(ankara["properties"]["fillColor"], NO_DATA_COLOR);
        assert!(ankara["properties"]["popup"]
            .as_str()
            .unwrap()
            .contains("Veri bulunamadı"));
        assert_eq!(view.legend["caption"], "SEGE Endeks Değeri (2003)");
    }

    #[test]
    fn map_fill_tracks_the_color_scale_ordering() {
        let db = fixture_db();
        let shapes = fixture_shapes();
        let provinces = db.query_provinces(YearKey::Y2003.label()).unwrap();
        let records: Vec<sege_core::ProvinceRecord> =
            provinces.into_iter().map(Into::into).collect();
        let merged = MergedView::build(&shapes, &records);
        let view = build_map_view(&shapes, &merged, YearKey::Y2003);
        let features = view.feature_collection["features"].as_array().unwrap();
        // Top-ranked İstanbul sits at the green end, bottom-ranked Muş at red.
        let fill = |name: &str| -> String {
            features
                .iter()
                .find(|f| f["properties"]["name"] == name)
                .unwrap()["properties"]["fillColor"]
                .as_str()
                .unwrap()
                .to_string()
        };
        assert_eq!(fill("Istanbul"), "#00ff00");
        assert_eq!(fill("Mus"), "#ff0000");
    }
}
