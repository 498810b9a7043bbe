//! JSON reports printed by the subcommands.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use placements::{Position, Registry};
use serde::Serialize;
use viewer::config::ViewerConfig;
use viewer::geometry::{NaturalSize, PixelRect};
use viewer::overlay::{KnownLocation, OverlayKind, OverlayQuery, build_overlays};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub page_index: usize,
    pub page_number: Option<u32>,
    pub natural_size: NaturalSize,
    pub overlays: Vec<OverlayReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayReport {
    pub key: String,
    pub label: String,
    pub kind: &'static str,
    /// Caller location id for navigable overlays, derived slug for map-only ones.
    pub id: String,
    pub is_point_marker: bool,
    pub rect: PixelRect,
}

/// Every overlay the viewer would draw on `page_index` at `size`.
#[must_use]
pub fn page(
    registry: &Registry,
    config: &ViewerConfig,
    locations: &[KnownLocation],
    page_index: usize,
    size: NaturalSize,
) -> PageReport {
    let overlays = build_overlays(&OverlayQuery {
        registry,
        locations,
        page_index,
        natural_size: Some(size),
        hovered: None,
        selected_map_only: None,
        default_marker_percent: config.default_marker_percent,
    });
    PageReport {
        page_index,
        page_number: placements::page_number(page_index),
        natural_size: size,
        overlays: overlays
            .into_iter()
            .map(|overlay| {
                let (kind, id) = match overlay.kind {
                    OverlayKind::Navigable { location_id } => ("navigable", location_id),
                    OverlayKind::MapOnly(info) => ("map-only", info.id),
                };
                OverlayReport {
                    key: overlay.key.to_string(),
                    label: overlay.label,
                    kind,
                    id,
                    is_point_marker: overlay.is_point_marker,
                    rect: overlay.rect,
                }
            })
            .collect(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupReport<'a> {
    pub location_name: &'a str,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub location_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub is_map_only: bool,
    pub positions: Vec<Position>,
}

/// Metadata and placements for `name`; restricted to one page when
/// `page_index` is given. `None` when the name is unknown.
#[must_use]
pub fn lookup<'a>(registry: &'a Registry, name: &str, page_index: Option<usize>) -> Option<LookupReport<'a>> {
    let entry = registry.get(name)?;
    let meta = entry.metadata();
    let positions = match page_index {
        Some(index) => registry.placement_on_page(name, index).into_iter().collect(),
        None => entry.positions.to_vec(),
    };
    Some(LookupReport {
        location_name: entry.location_name.as_ref(),
        location_type: meta.location_type,
        description: meta.description,
        is_map_only: meta.is_map_only,
        positions,
    })
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub page_number: u32,
    pub page_index: usize,
    pub locations: usize,
    pub map_only: usize,
}

/// One row per page number referenced by the registry.
#[must_use]
pub fn pages(registry: &Registry) -> Vec<PageSummary> {
    registry
        .page_numbers()
        .into_iter()
        .filter_map(|page_number| {
            let page_index = usize::try_from(page_number.checked_sub(1)?).ok()?;
            Some(PageSummary {
                page_number,
                page_index,
                locations: registry.names_on_page(page_index).len(),
                map_only: registry.map_only_on_page(page_index).len(),
            })
        })
        .collect()
}
