//! Detail metrics panel for the selected province.

use crate::view::DetailView;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricsPanelProps {
    pub detail: DetailView,
}

fn metric(label: &str, value: String) -> Element {
    rsx! {
        div {
            style: "background: #F5F5F5; border: 1px solid #E0E0E0; border-radius: 4px; padding: 8px 12px;",
            div {
                style: "font-size: 11px; color: #666;",
                "{label}"
            }
            div {
                style: "font-size: 18px; font-weight: bold;",
                "{value}"
            }
        }
    }
}

/// Shows rank, tier, rounded index value and region of the selected
/// province, two metrics per column like the source layout.
#[component]
pub fn MetricsPanel(props: MetricsPanelProps) -> Element {
    let detail = &props.detail;
    rsx! {
        div {
            h4 {
                style: "margin: 0 0 8px 0; font-size: 14px;",
                "📈 Temel Göstergeler: {detail.name}"
            }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 8px;",
                {metric("🏆 Sıra", detail.rank.to_string())}
                {metric("📉 Endeks Değeri", format!("{:.4}", detail.index_value))}
                {metric("📊 Kademe", detail.tier.to_string())}
                {metric("🌍 Bölge", detail.region.clone())}
            }
        }
    }
}
