//! Reference year selector.

use crate::state::AppState;
use dioxus::prelude::*;
use sege_core::YearKey;

/// Dropdown selector for the active SEGE reference year.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_year)();

    let on_change = move |evt: Event<FormData>| {
        if let Some(year) = YearKey::from_label(&evt.value()) {
            state.selected_year.set(year);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "year-select",
                style: "font-weight: bold; margin-right: 8px;",
                "📅 Yıl seçin: "
            }
            select {
                id: "year-select",
                onchange: on_change,
                for year in YearKey::ALL {
                    option {
                        value: "{year.label()}",
                        selected: year == selected,
                        "{year.label()}"
                    }
                }
            }
        }
    }
}
