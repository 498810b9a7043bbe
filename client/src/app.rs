//! Host page for the campus map.
//!
//! Wires [`MapViewer`] to the builtin registry, a fixed list of locations
//! that have 360° views, and an info panel for map-only locations. The last
//! navigation request is shown in place of an actual 360° viewer.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use viewer::overlay::{KnownLocation, MapOnlyInfo};

use crate::components::info_panel::InfoPanel;
use crate::components::map_viewer::MapViewer;

const PAGE_COUNT: usize = 5;

/// URLs of the campus map pages, in page order.
#[must_use]
pub fn page_urls() -> Vec<String> {
    (1..=PAGE_COUNT).map(|page| format!("/maps/campus-page-{page}.png")).collect()
}

/// Locations with a 360° view on the demo campus.
#[must_use]
pub fn known_locations() -> Vec<KnownLocation> {
    [
        ("main-gate", "Main Gate"),
        ("admin", "Administration Building"),
        ("library", "Library"),
        ("chapel", "Chapel"),
        ("cafeteria", "Cafeteria"),
        ("comlab-1", "Computer Laboratory 1"),
        ("science-lab", "Science Laboratory"),
        ("auditorium", "Auditorium"),
        ("gym", "Gymnasium"),
        ("oval", "Oval Field"),
    ]
    .into_iter()
    .map(|(id, name)| KnownLocation::new(id, name))
    .collect()
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let selected = RwSignal::new(None::<MapOnlyInfo>);
    let navigated_to = RwSignal::new(None::<String>);
    let locations = Signal::stored(known_locations());

    let on_location_click = Callback::new(move |id: String| navigated_to.set(Some(id)));
    let on_map_only_location_click = Callback::new(move |info: MapOnlyInfo| selected.set(Some(info)));
    let on_close_info = Callback::new(move |()| selected.set(None));

    view! {
        <Title text="Campus Map"/>
        <main class="campus-map">
            <MapViewer
                pages=page_urls()
                locations=locations
                place_id="main-campus"
                on_location_click=on_location_click
                on_map_only_location_click=on_map_only_location_click
                selected_map_only=selected
                on_info_dismissed=on_close_info
            />
            <InfoPanel selected=selected on_close=on_close_info />
            <p class="campus-map__status">
                {move || {
                    navigated_to
                        .get()
                        .map_or_else(|| "Select a location on the map.".to_owned(), |id| format!("Opening 360° view: {id}"))
                }}
            </p>
        </main>
    }
}
