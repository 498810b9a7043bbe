//! Previous/next arrows and the page-indicator dots.

use leptos::prelude::*;

use viewer::engine::ViewerCore;

use crate::state::map_view::MapViewState;
use crate::util::viewer_host::ViewerHost;

#[component]
pub fn PageNav(host: ViewerHost) -> impl IntoView {
    let snapshot = host.view;
    let has_previous = move || snapshot.with(MapViewState::has_previous);
    let has_next = move || snapshot.with(MapViewState::has_next);
    let page_label = move || snapshot.with(MapViewState::page_label);

    view! {
        <div class="map-viewer__pages">
            <button
                type="button"
                class="map-viewer__page-arrow"
                aria-label="Previous page"
                disabled=move || !has_previous()
                on:click=move |_| host.run(ViewerCore::previous_page)
            >
                "‹"
            </button>
            <div class="map-viewer__dots" role="tablist">
                {move || {
                    let (count, current) = snapshot.with(|v| (v.page_count, v.page_index));
                    (0..count)
                        .map(|index| {
                            let class = if index == current {
                                "map-viewer__dot map-viewer__dot--active"
                            } else {
                                "map-viewer__dot"
                            };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    role="tab"
                                    aria-selected=(index == current).to_string()
                                    aria-label=format!("Go to page {}", index + 1)
                                    on:click=move |_| host.run(|core| core.go_to_page(index))
                                ></button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <button
                type="button"
                class="map-viewer__page-arrow"
                aria-label="Next page"
                disabled=move || !has_next()
                on:click=move |_| host.run(ViewerCore::next_page)
            >
                "›"
            </button>
            <span class="map-viewer__page-label">{page_label}</span>
        </div>
    }
}
