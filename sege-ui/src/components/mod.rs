//! Reusable Dioxus RSX components for the SEGE dashboard.

mod analysis_selector;
mod chart_container;
mod error_display;
mod loading_spinner;
mod map_container;
mod metrics_panel;
mod page_header;
mod province_selector;
mod year_selector;

pub use analysis_selector::AnalysisSelector;
pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use metrics_panel::MetricsPanel;
pub use page_header::PageHeader;
pub use province_selector::ProvinceSelector;
pub use year_selector::YearSelector;
