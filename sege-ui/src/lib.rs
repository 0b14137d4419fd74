//! Shared Dioxus components, application state, view models and the
//! Leaflet/D3.js bridge for the SEGE dashboard.

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod view;
