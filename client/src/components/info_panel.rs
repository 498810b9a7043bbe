//! Details panel for a selected map-only location.

use leptos::prelude::*;
use viewer::overlay::MapOnlyInfo;

/// Shows the type and description of the selected map-only location.
///
/// Closing it clears the caller's selection, which also drops the persisted
/// highlight on the map.
#[component]
pub fn InfoPanel(#[prop(into)] selected: Signal<Option<MapOnlyInfo>>, on_close: Callback<()>) -> impl IntoView {
    move || {
        selected.get().map(|info| {
            view! {
                <aside class="info-panel" data-location-id=info.id>
                    <header class="info-panel__header">
                        <h2 class="info-panel__title">{info.name}</h2>
                        <button
                            type="button"
                            class="info-panel__close"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            "×"
                        </button>
                    </header>
                    {info.location_type.map(|kind| view! { <p class="info-panel__type">{kind}</p> })}
                    {info.description.map(|text| view! { <p class="info-panel__description">{text}</p> })}
                </aside>
            }
        })
    }
}
