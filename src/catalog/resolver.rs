//! Free-text equipment name resolution and dimension-hint parsing.
//!
//! Resolution is a pure function of the query and the catalog:
//!
//! 1. Templates are scanned in canonical order (category order, then list order)
//! 2. A template matches when, ignoring case, its name contains the query or
//!    the query contains its name
//! 3. The first match wins
//!
//! When nothing matches, a `"WxH"` hint can supply the size; anything that is
//! not exactly two positive integers around a single `x` falls back to 3x3.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Catalog, EquipmentTemplate};
use crate::constants::DEFAULT_ITEM_EXTENT;

/// Width and height in grid units. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    /// Extent along x
    pub width: u32,
    /// Extent along y
    pub height: u32,
}

impl Dimensions {
    /// Creates dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_ITEM_EXTENT, DEFAULT_ITEM_EXTENT)
    }
}

/// Finds the first catalog template matching `query`.
///
/// # Examples
///
/// ```
/// use kitchen_planner::catalog::{resolve_template, Catalog};
///
/// let catalog = Catalog::load().unwrap();
/// let oven = resolve_template(&catalog, "Combi Oven XL").unwrap();
/// assert_eq!(oven.name, "Combi Oven");
/// assert!(resolve_template(&catalog, "Espresso Robot").is_none());
/// ```
#[must_use]
pub fn resolve_template<'a>(catalog: &'a Catalog, query: &str) -> Option<&'a EquipmentTemplate> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    catalog.templates().iter().find(|template| {
        let name = template.name.to_lowercase();
        name.contains(&query) || query.contains(&name)
    })
}

/// Parses a `"WxH"` dimension hint such as `"4x3"`.
///
/// Returns the 3x3 default unless the hint has exactly one `x` with a
/// positive integer on each side.
///
/// # Examples
///
/// ```
/// use kitchen_planner::catalog::{parse_dimension_hint, Dimensions};
///
/// assert_eq!(parse_dimension_hint("4x3"), Dimensions::new(4, 3));
/// assert_eq!(parse_dimension_hint("garbage"), Dimensions::new(3, 3));
/// ```
#[must_use]
pub fn parse_dimension_hint(hint: &str) -> Dimensions {
    let lowered = hint.to_lowercase();
    let parts: Vec<&str> = lowered.split('x').collect();

    let [width, height] = parts.as_slice() else {
        return Dimensions::default();
    };

    match (width.trim().parse::<u32>(), height.trim().parse::<u32>()) {
        (Ok(width), Ok(height)) if width > 0 && height > 0 => Dimensions::new(width, height),
        _ => Dimensions::default(),
    }
}

/// Resolves the size of a named piece of equipment.
///
/// A catalog match always wins over the hint; the hint is only consulted
/// when no template matches. Returns the matched template, if any.
#[must_use]
pub fn resolve_dimensions<'a>(
    catalog: &'a Catalog,
    name: &str,
    hint: Option<&str>,
) -> (Option<&'a EquipmentTemplate>, Dimensions) {
    if let Some(template) = resolve_template(catalog, name) {
        return (Some(template), template.dimensions());
    }

    let dimensions = hint.map(parse_dimension_hint).unwrap_or_default();
    debug!(
        equipment = name,
        hint,
        width = dimensions.width,
        height = dimensions.height,
        "no catalog match, using fallback dimensions"
    );
    (None, dimensions)
}
