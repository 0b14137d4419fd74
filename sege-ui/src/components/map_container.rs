//! Map pane component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id Leaflet mounts into
    pub id: String,
    /// Map height in pixels
    #[props(default = 500)]
    pub height: u32,
}

/// The container div for the Leaflet choropleth. Leaflet needs an explicit
/// height on the element or the map collapses to zero.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "height: {}px; width: 100%; border-radius: 4px; border: 1px solid #E0E0E0;",
        props.height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
