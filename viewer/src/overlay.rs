//! Overlay population: which clickable regions appear on the current page.
//!
//! Two disjoint classes share the page. *Navigable* overlays come from the
//! caller's list of locations that have a 360° view; *map-only* overlays come
//! straight from the registry. Both are recomputed from the registry and the
//! measured image size on every call and never cached.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use std::collections::HashSet;
use std::fmt;

use placements::{LocationPlacement, Position, Registry};
use serde::{Deserialize, Serialize};

use crate::consts::{OVERLAY_RAISED_Z_INDEX, OVERLAY_Z_INDEX};
use crate::geometry::{NaturalSize, PixelRect, pixel_rect};

/// A location with a 360° view, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownLocation {
    pub id: String,
    pub name: String,
}

impl KnownLocation {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// Payload handed to the caller when a map-only location is clicked.
///
/// `id` is a display-only slug derived from the name; it is never looked up in
/// any data store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapOnlyInfo {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MapOnlyInfo {
    #[must_use]
    pub fn from_placement(entry: &LocationPlacement) -> Self {
        Self {
            id: map_only_slug(&entry.location_name),
            name: entry.location_name.to_string(),
            location_type: entry.location_type.as_deref().map(str::to_owned),
            description: entry.description.as_deref().map(str::to_owned),
        }
    }
}

/// Lower-case `name` and replace each run of whitespace with a single `-`.
#[must_use]
pub fn map_only_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    slug
}

/// Identity of an overlay for hover tracking.
///
/// The two classes are namespaced so a navigable location with id `abc` and a
/// map-only location named `abc` never share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OverlayKey {
    /// Navigable overlay, keyed by the caller's location id.
    Location(String),
    /// Map-only overlay, keyed by registry name.
    MapOnly(String),
}

impl fmt::Display for OverlayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Location(id) => write!(f, "location-{id}"),
            Self::MapOnly(name) => write!(f, "maponly-{name}"),
        }
    }
}

/// What clicking an overlay does.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayKind {
    /// Open the 360° view of the caller's location.
    Navigable { location_id: String },
    /// Show the info panel for a location that exists only on the map.
    MapOnly(MapOnlyInfo),
}

/// A positioned, clickable region ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedOverlay {
    pub key: OverlayKey,
    /// Location name shown in the hover label.
    pub label: String,
    /// Rectangle in natural image pixels.
    pub rect: PixelRect,
    /// Rendered as a pin rather than a bordered box; hit-testing is identical.
    pub is_point_marker: bool,
    pub kind: OverlayKind,
    pub hovered: bool,
    /// Persisted highlight for the selected map-only location.
    pub selected: bool,
}

impl RenderedOverlay {
    #[must_use]
    pub fn is_map_only(&self) -> bool {
        matches!(self.kind, OverlayKind::MapOnly(_))
    }

    #[must_use]
    pub fn z_index(&self) -> i32 {
        if self.hovered || self.selected {
            OVERLAY_RAISED_Z_INDEX
        } else {
            OVERLAY_Z_INDEX
        }
    }

    /// Floating label text: the name, plus the category for map-only entries.
    #[must_use]
    pub fn hover_label(&self) -> String {
        match &self.kind {
            OverlayKind::MapOnly(MapOnlyInfo { location_type: Some(kind), .. }) => {
                format!("{} · {kind}", self.label)
            }
            _ => self.label.clone(),
        }
    }
}

/// Inputs for [`build_overlays`].
#[derive(Debug, Clone, Copy)]
pub struct OverlayQuery<'a> {
    pub registry: &'a Registry,
    pub locations: &'a [KnownLocation],
    pub page_index: usize,
    /// `None` while the page image is still loading (or failed to load).
    pub natural_size: Option<NaturalSize>,
    pub hovered: Option<&'a OverlayKey>,
    /// Name of the map-only location whose info panel is open.
    pub selected_map_only: Option<&'a str>,
    pub default_marker_percent: f64,
}

/// Caller locations placed on `page_index`, excluding any the registry marks
/// map-only, in caller order.
///
/// Overlay keys come from location ids, so only the first placed location
/// with a given id is kept.
#[must_use]
pub fn navigable_on_page<'a>(
    registry: &Registry,
    locations: &'a [KnownLocation],
    page_index: usize,
) -> Vec<(&'a KnownLocation, Position)> {
    let mut seen_ids = HashSet::new();
    locations
        .iter()
        .filter(|location| {
            registry
                .metadata(&location.name)
                .map_or(true, |meta| !meta.is_map_only)
        })
        .filter_map(|location| {
            registry
                .placement_on_page(&location.name, page_index)
                .map(|position| (location, position))
        })
        .filter(|(location, _)| seen_ids.insert(location.id.as_str()))
        .collect()
}

/// Compute every overlay for the page: navigable first, then map-only.
///
/// Returns nothing until the natural image size is known, so markers never
/// flash at zero or default dimensions.
#[must_use]
pub fn build_overlays(query: &OverlayQuery<'_>) -> Vec<RenderedOverlay> {
    let Some(size) = query.natural_size.filter(NaturalSize::is_measurable) else {
        return Vec::new();
    };

    let mut overlays = Vec::new();

    for (location, position) in navigable_on_page(query.registry, query.locations, query.page_index) {
        let key = OverlayKey::Location(location.id.clone());
        overlays.push(RenderedOverlay {
            hovered: query.hovered == Some(&key),
            key,
            label: location.name.clone(),
            rect: pixel_rect(&position, size, query.default_marker_percent),
            is_point_marker: position.is_point_marker(),
            kind: OverlayKind::Navigable { location_id: location.id.clone() },
            selected: false,
        });
    }

    for entry in query.registry.map_only_on_page(query.page_index) {
        let Some(position) = entry.position_on_page(query.page_index) else {
            continue;
        };
        let key = OverlayKey::MapOnly(entry.location_name.to_string());
        overlays.push(RenderedOverlay {
            hovered: query.hovered == Some(&key),
            key,
            label: entry.location_name.to_string(),
            rect: pixel_rect(position, size, query.default_marker_percent),
            is_point_marker: position.is_point_marker(),
            kind: OverlayKind::MapOnly(MapOnlyInfo::from_placement(entry)),
            selected: query.selected_map_only == Some(entry.location_name.as_ref()),
        });
    }

    overlays
}
