//! Position registry for the campus map pages.
//!
//! This crate owns the declarative table that pins named campus locations to
//! one or more rectangles on the static map pages. Coordinates are stored as
//! percentages of the page image's natural size so the table stays valid no
//! matter how the image is scaled for display.
//!
//! Page numbers inside the table are 1-based. Every lookup takes a 0-based
//! page *index* (the viewer's notion of a page) and converts at the boundary.
//! All lookups are total: unknown names or pages yield `None` or an empty
//! vector, never an error.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

mod builtin;

/// Error returned when loading or validating a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The raw JSON could not be decoded into placement records.
    #[error("failed to parse registry JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A location name appears on more than one record.
    #[error("location `{0}` is declared more than once")]
    DuplicateName(String),
    /// A record carries no positions at all.
    #[error("location `{0}` has no positions")]
    NoPositions(String),
    /// A position uses page 0; page numbers start at 1.
    #[error("location `{0}` has a position on page 0 (pages start at 1)")]
    ZeroPage(String),
    /// A coordinate or extent falls outside `[0, 100]` or is not finite.
    #[error("location `{name}` has {field} = {value}, expected a percentage in [0, 100]")]
    PercentOutOfRange { name: String, field: &'static str, value: f64 },
}

/// One placement of a location on a map page.
///
/// `x`/`y` locate the top-left corner (or the marker anchor) as a percentage
/// of the page image's natural width/height. When both `width` and `height`
/// are absent the placement is a point marker.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// 1-based page number.
    pub page: u32,
    /// Left edge, percent of natural width.
    pub x: f64,
    /// Top edge, percent of natural height.
    pub y: f64,
    /// Extent, percent of natural width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Extent, percent of natural height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Position {
    /// A point marker anchored at `(x, y)`.
    #[must_use]
    pub const fn point(page: u32, x: f64, y: f64) -> Self {
        Self { page, x, y, width: None, height: None }
    }

    /// An area rectangle with an explicit footprint.
    #[must_use]
    pub const fn area(page: u32, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { page, x, y, width: Some(width), height: Some(height) }
    }

    /// True iff neither `width` nor `height` was supplied.
    #[must_use]
    pub fn is_point_marker(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }

    fn percent_fields(&self) -> [(&'static str, Option<f64>); 4] {
        [("x", Some(self.x)), ("y", Some(self.y)), ("width", self.width), ("height", self.height)]
    }
}

/// A named location and every place it appears on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPlacement {
    /// Display name; must match the location's name exactly to resolve.
    pub location_name: Cow<'static, str>,
    /// Placements, possibly on several pages.
    pub positions: Cow<'static, [Position]>,
    /// Category label for map-only entries (e.g. `CLASS ROOMS`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub location_type: Option<Cow<'static, str>>,
    /// Free text shown for map-only entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Cow<'static, str>>,
    /// True when the location has no 360° view and exists only on the map.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_map_only: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl LocationPlacement {
    /// The first placement targeting `page_index` (0-based), if any.
    #[must_use]
    pub fn position_on_page(&self, page_index: usize) -> Option<&Position> {
        let page = page_number(page_index)?;
        self.positions.iter().find(|p| p.page == page)
    }

    /// Borrowed metadata view of this record.
    #[must_use]
    pub fn metadata(&self) -> Metadata<'_> {
        Metadata {
            location_type: self.location_type.as_deref(),
            description: self.description.as_deref(),
            is_map_only: self.is_map_only,
        }
    }
}

/// Descriptive fields of a registry entry, without geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metadata<'a> {
    pub location_type: Option<&'a str>,
    pub description: Option<&'a str>,
    pub is_map_only: bool,
}

/// Convert a 0-based page index into the registry's 1-based page number.
///
/// Returns `None` only when the index cannot be represented as a page number.
#[must_use]
pub fn page_number(page_index: usize) -> Option<u32> {
    u32::try_from(page_index.checked_add(1)?).ok()
}

/// Immutable table of location placements with pure lookups.
#[derive(Clone, Debug, PartialEq)]
pub struct Registry {
    entries: Cow<'static, [LocationPlacement]>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// The campus table compiled into the binary.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { entries: Cow::Borrowed(builtin::CAMPUS) }
    }

    /// Build a registry from owned records, validating them first.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistryError`] found by [`Registry::validate`].
    pub fn from_entries(entries: Vec<LocationPlacement>) -> Result<Self, RegistryError> {
        let registry = Self { entries: Cow::Owned(entries) };
        registry.validate()?;
        Ok(registry)
    }

    /// Parse a JSON array of placement records (camelCase keys).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] for malformed JSON, or a validation
    /// error for well-formed but inconsistent data.
    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        let entries: Vec<LocationPlacement> = serde_json::from_str(raw)?;
        Self::from_entries(entries)
    }

    /// Serialize the table back to the JSON schema accepted by [`Registry::from_json`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, RegistryError> {
        Ok(serde_json::to_string_pretty(&*self.entries)?)
    }

    /// Check the table's invariants: unique names, at least one position per
    /// record, pages starting at 1, and finite percentages within `[0, 100]`.
    ///
    /// # Errors
    ///
    /// Returns the first violation in declaration order.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen = std::collections::HashSet::with_capacity(self.entries.len());
        for entry in self.entries.iter() {
            let name = entry.location_name.as_ref();
            if !seen.insert(name) {
                return Err(RegistryError::DuplicateName(name.to_owned()));
            }
            if entry.positions.is_empty() {
                return Err(RegistryError::NoPositions(name.to_owned()));
            }
            for position in entry.positions.iter() {
                if position.page == 0 {
                    return Err(RegistryError::ZeroPage(name.to_owned()));
                }
                for (field, value) in position.percent_fields() {
                    let Some(value) = value else {
                        continue;
                    };
                    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                        return Err(RegistryError::PercentOutOfRange { name: name.to_owned(), field, value });
                    }
                }
            }
        }
        Ok(())
    }

    /// All records in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[LocationPlacement] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-sensitive lookup by location name.
    #[must_use]
    pub fn get(&self, location_name: &str) -> Option<&LocationPlacement> {
        self.entries
            .iter()
            .find(|entry| entry.location_name == location_name)
    }

    /// The placement of `location_name` on `page_index` (0-based), unmodified.
    ///
    /// `None` when the name is unknown or has no placement on that page. No
    /// normalization is applied: trailing whitespace or different casing
    /// simply does not match.
    #[must_use]
    pub fn placement_on_page(&self, location_name: &str, page_index: usize) -> Option<Position> {
        self.get(location_name)?
            .position_on_page(page_index)
            .copied()
    }

    /// Type, description and map-only flag; `None` only for unknown names.
    #[must_use]
    pub fn metadata(&self, location_name: &str) -> Option<Metadata<'_>> {
        self.get(location_name).map(LocationPlacement::metadata)
    }

    /// Map-only records with at least one placement on `page_index`, in
    /// declaration order.
    #[must_use]
    pub fn map_only_on_page(&self, page_index: usize) -> Vec<&LocationPlacement> {
        self.entries
            .iter()
            .filter(|entry| entry.is_map_only && entry.position_on_page(page_index).is_some())
            .collect()
    }

    /// Every name, map-only or not, with a placement on `page_index`, in
    /// declaration order.
    #[must_use]
    pub fn names_on_page(&self, page_index: usize) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.position_on_page(page_index).is_some())
            .map(|entry| entry.location_name.as_ref())
            .collect()
    }

    /// Sorted, distinct 1-based page numbers referenced by any placement.
    #[must_use]
    pub fn page_numbers(&self) -> Vec<u32> {
        let mut pages: Vec<u32> = self
            .entries
            .iter()
            .flat_map(|entry| entry.positions.iter().map(|p| p.page))
            .collect();
        pages.sort_unstable();
        pages.dedup();
        pages
    }
}
