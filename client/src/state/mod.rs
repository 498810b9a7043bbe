//! Reactive state shared between the map viewer and its chrome.

pub mod map_view;
