//! Province dropdown selector.

use crate::state::AppState;
use dioxus::prelude::*;
use sege_core::normalize_name;

/// Dropdown selector over the active year's provinces.
///
/// Reads the province list from AppState and writes back
/// `selected_province` on change. When the session's remembered selection is
/// absent from the active table the first row is shown selected, mirroring
/// the detail panel's fallback.
#[component]
pub fn ProvinceSelector() -> Element {
    let mut state = use_context::<AppState>();
    let provinces = state.provinces.read().clone();
    let selected = (state.selected_province)();

    let effective = selected
        .as_deref()
        .map(normalize_name)
        .filter(|sel| provinces.iter().any(|p| normalize_name(&p.name) == *sel))
        .or_else(|| provinces.first().map(|p| normalize_name(&p.name)));

    let on_change = move |evt: Event<FormData>| {
        state.selected_province.set(Some(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "province-select",
                style: "font-weight: bold; margin-right: 8px;",
                "🏙️ İl seçin: "
            }
            select {
                id: "province-select",
                onchange: on_change,
                for province in provinces.iter() {
                    option {
                        value: "{province.name}",
                        selected: effective == Some(normalize_name(&province.name)),
                        "{province.name}"
                    }
                }
            }
        }
    }
}
