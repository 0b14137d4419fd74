//! Analysis mode selector.

use crate::state::AppState;
use dioxus::prelude::*;
use sege_core::AnalysisMode;

/// Horizontal radio group choosing one of the three analysis charts.
#[component]
pub fn AnalysisSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = (state.analysis_mode)();

    let on_change = move |evt: Event<FormData>| {
        if let Some(mode) = AnalysisMode::from_label(&evt.value()) {
            state.analysis_mode.set(mode);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 16px; align-items: center;",
            span {
                style: "font-weight: bold;",
                "Analiz türünü seçin: "
            }
            for mode in AnalysisMode::ALL {
                label {
                    style: "display: flex; gap: 4px; align-items: center;",
                    input {
                        r#type: "radio",
                        name: "analysis-mode",
                        value: "{mode.label()}",
                        checked: mode == current,
                        onchange: on_change,
                    }
                    "{mode.label()}"
                }
            }
        }
    }
}
