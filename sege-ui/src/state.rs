//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. This is the explicit session context the
//! dashboard threads through every render: the selected province lives here
//! and nowhere else, starts unselected, and vanishes with the session.

use dioxus::prelude::*;
use sege_core::{AnalysisMode, YearKey};
use sege_db::models::ProvinceInfo;
use sege_db::Database;
use sege_geo::ProvinceShape;

/// Shared application state for the SEGE dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until the indicator table is loaded)
    pub db: Signal<Option<Database>>,
    /// Province boundary shapes (empty until the boundary file is loaded)
    pub shapes: Signal<Vec<ProvinceShape>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Fatal load error; when set, all rendering below the banner is skipped
    pub error_msg: Signal<Option<String>>,
    /// Active reference year
    pub selected_year: Signal<YearKey>,
    /// Session-scoped selected province (indicator-table spelling);
    /// mutated by the dropdown and by map clicks
    pub selected_province: Signal<Option<String>>,
    /// Active statistical analysis mode
    pub analysis_mode: Signal<AnalysisMode>,
    /// Provinces of the active year, feeding the dropdown
    pub provinces: Signal<Vec<ProvinceInfo>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            shapes: Signal::new(Vec::new()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_year: Signal::new(YearKey::Y2003),
            selected_province: Signal::new(None),
            analysis_mode: Signal::new(AnalysisMode::RegionalDistribution),
            provinces: Signal::new(Vec::new()),
        }
    }
}
