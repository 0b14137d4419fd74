//! SEGE İl Endeksleri Analizi
//!
//! Single-page dashboard that overlays Türkiye's provincial socio-economic
//! development index (SEGE) for a chosen reference year (2003, 2011, 2017)
//! on an interactive choropleth map, with a per-province detail panel and a
//! statistical analysis section (regional box distribution, tier counts,
//! correlation heatmap).
//!
//! Data flow:
//! 1. `include_str!` embeds the indicator CSV and the province boundary
//!    GeoJSON into the WASM binary.
//! 2. On mount, the indicator table is parsed and loaded into an in-memory
//!    SQLite database, one snapshot per reference year, and the boundary
//!    file is parsed into province shapes.
//! 3. Year, province and analysis-mode selections live in `AppState`
//!    signals; effects rebuild the Leaflet map and D3 chart payloads
//!    whenever the inputs change.
//! 4. Map clicks come back through `window.__segeOnMapClick` and resolve to
//!    the nearest province, which updates the same selection signal the
//!    dropdown writes.

use dioxus::prelude::*;
use sege_core::record::INDICATOR_CSV;
use sege_core::{IndicatorSnapshots, ProvinceRecord, YearKey};
use sege_db::Database;
use sege_geo::{parse_feature_collection, MergedView, PROVINCE_GEOJSON};
use sege_ui::components::{
    AnalysisSelector, ChartContainer, ErrorDisplay, LoadingSpinner, MapContainer, MetricsPanel,
    PageHeader, ProvinceSelector, YearSelector,
};
use sege_ui::js_bridge;
use sege_ui::state::AppState;
use sege_ui::view::{self, AnalysisChart, MAP_CENTER, MAP_ZOOM};

/// DOM element IDs Leaflet and D3 render into.
const MAP_ID: &str = "sege-choropleth-map";
const ANALYSIS_CHART_ID: &str = "sege-analysis-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sege-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load indicator table and boundary file on mount
    use_effect(move || {
        js_bridge::ensure_vendor_libraries();
        js_bridge::init_scripts();

        let snapshots = match IndicatorSnapshots::from_single_source(INDICATOR_CSV) {
            Ok(snapshots) => snapshots,
            Err(e) => {
                log::error!("failed to parse indicator table: {e}");
                state
                    .error_msg
                    .set(Some(format!("Excel verisi yüklenirken hata oluştu: {}", e)));
                state.loading.set(false);
                return;
            }
        };

        let shapes = match parse_feature_collection(PROVINCE_GEOJSON) {
            Ok(shapes) => shapes,
            Err(e) => {
                log::error!("failed to parse boundary file: {e}");
                state
                    .error_msg
                    .set(Some(format!("Harita verisi yüklenemedi: {}", e)));
                state.loading.set(false);
                return;
            }
        };

        match Database::new() {
            Ok(db) => {
                for year in YearKey::ALL {
                    let records = match snapshots.get(year) {
                        Some(records) => records,
                        None => continue,
                    };
                    if let Err(e) = db.load_snapshot(year.label(), records) {
                        log::error!("failed to load {year} snapshot: {e}");
                        state
                            .error_msg
                            .set(Some(format!("Excel verisi yüklenirken hata oluştu: {}", e)));
                        state.loading.set(false);
                        return;
                    }
                }
                state.db.set(Some(db));
                state.shapes.set(shapes);
                state.loading.set(false);
            }
            Err(e) => {
                state
                    .error_msg
                    .set(Some(format!("Veritabanı başlatılamadı: {}", e)));
                state.loading.set(false);
            }
        }
    });

    // Route map clicks to the selection signal. Registered once; the handler
    // peeks the signals so it always sees the active year and shapes.
    use_effect(move || {
        js_bridge::set_map_click_handler(move |lat, lng| {
            let year = *state.selected_year.peek();
            let shapes = state.shapes.peek();
            let db = state.db.peek();
            let Some(db) = db.as_ref() else { return };
            if let Some(name) = view::resolve_click(&shapes, db, year, lat, lng) {
                state.selected_province.set(Some(name));
            }
        });
    });

    // Rebuild the choropleth whenever the year changes
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let year = (state.selected_year)();
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        let provinces = match db.query_provinces(year.label()) {
            Ok(provinces) => provinces,
            Err(e) => {
                log::error!("province query failed for {year}: {e}");
                return;
            }
        };
        state.provinces.set(provinces.clone());

        let records: Vec<ProvinceRecord> = provinces.into_iter().map(Into::into).collect();
        let shapes = state.shapes.read();
        let merged = MergedView::build(&shapes, &records);
        let map_view = view::build_map_view(&shapes, &merged, year);

        let data_json = map_view.feature_collection.to_string();
        let config_json = serde_json::json!({
            "center": [MAP_CENTER.0, MAP_CENTER.1],
            "zoom": MAP_ZOOM,
            "legend": map_view.legend,
        })
        .to_string();
        js_bridge::render_choropleth(MAP_ID, &data_json, &config_json);
    });

    // Rebuild the analysis chart when the year or mode changes
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let year = (state.selected_year)();
        let mode = (state.analysis_mode)();
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        js_bridge::destroy_chart(ANALYSIS_CHART_ID);
        match view::build_analysis_chart(&db, year, Some(mode)) {
            Ok(Some(chart)) => render_analysis_chart(&chart),
            Ok(None) => {}
            Err(e) => {
                log::error!("analysis chart failed for {year}/{mode:?}: {e}");
                state
                    .error_msg
                    .set(Some(format!("Analiz grafiği oluşturulamadı: {}", e)));
            }
        }
    });

    let year = (state.selected_year)();
    let detail = state.db.read().as_ref().and_then(|db| {
        let selected = (state.selected_province)();
        match view::build_detail_view(db, year, selected.as_deref()) {
            Ok(detail) => detail,
            Err(e) => {
                log::warn!("detail lookup failed for {year}: {e}");
                None
            }
        }
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            PageHeader {
                title: "🗺️ SEGE İl Endeksleri Analizi".to_string(),
                subtitle: "Sosyo-Ekonomik Gelişmişlik Endeksi (2003, 2011, 2017)".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                YearSelector {}

                div {
                    style: "display: grid; grid-template-columns: 2fr 1fr; gap: 16px; align-items: start;",
                    div {
                        h3 {
                            style: "margin: 8px 0; font-size: 16px;",
                            "📍 {year} Yılı SEGE Haritası"
                        }
                        MapContainer {
                            id: MAP_ID.to_string(),
                            height: 500,
                        }
                    }
                    div {
                        h3 {
                            style: "margin: 8px 0; font-size: 16px;",
                            "📊 İl Bazlı Analiz"
                        }
                        ProvinceSelector {}
                        if let Some(detail) = detail {
                            MetricsPanel { detail }
                        }
                    }
                }

                hr {
                    style: "margin: 16px 0; border: none; border-top: 1px solid #E0E0E0;",
                }

                h3 {
                    style: "margin: 8px 0; font-size: 16px;",
                    "📊 İstatistiksel Analiz"
                }
                AnalysisSelector {}
                ChartContainer {
                    id: ANALYSIS_CHART_ID.to_string(),
                    min_height: 420,
                }
            }
        }
    }
}

/// Serialize one analysis chart and hand it to the matching D3 renderer.
fn render_analysis_chart(chart: &AnalysisChart) {
    match chart {
        AnalysisChart::RegionalDistribution { title, boxes } => {
            let data_json = serde_json::to_string(boxes).unwrap_or_default();
            let config_json = serde_json::json!({
                "title": title,
                "yAxisLabel": "Endeks Değeri",
            })
            .to_string();
            js_bridge::render_box_plot(ANALYSIS_CHART_ID, &data_json, &config_json);
        }
        AnalysisChart::TierCounts { title, counts } => {
            let data_json = serde_json::to_string(counts).unwrap_or_default();
            let config_json = serde_json::json!({
                "title": title,
                "xAxisLabel": "Kademe",
                "yAxisLabel": "İl Sayısı",
            })
            .to_string();
            js_bridge::render_bar_chart(ANALYSIS_CHART_ID, &data_json, &config_json);
        }
        AnalysisChart::Correlation { title, matrix } => {
            let data_json = serde_json::to_string(matrix).unwrap_or_default();
            let config_json = serde_json::json!({ "title": title }).to_string();
            js_bridge::render_heatmap(ANALYSIS_CHART_ID, &data_json, &config_json);
        }
    }
}
