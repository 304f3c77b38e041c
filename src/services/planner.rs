//! Zone auto-layout: turns generated zones into placed items.
//!
//! Each zone is mapped to an anchor point by the first keyword its name
//! contains. Equipment is then scattered around the anchor on a 3-column
//! grid with 4-unit spacing, using one offset counter per anchor so zones
//! sharing an anchor don't pile up on the same cell. Counters live only for
//! one [`ZoneLayoutPlanner::plan`] call.
//!
//! This is a best-effort scatter, not a packing solver: items from different
//! anchors can overlap on small canvases.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::catalog::{resolve_dimensions, Catalog};
use crate::constants::{
    DEFAULT_POWER_SPEC, DEFAULT_WATER_SPEC, SCATTER_COLUMNS, SCATTER_SPACING,
};
use crate::models::{
    CanvasBounds, EquipmentCategory, PlacedItem, RequiredEquipment, UtilitySpecs, Zone,
};
use crate::services::auto_layout::AutoLayoutError;

/// Canonical zone anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneAnchor {
    /// Top-left region
    ColdStorage,
    /// Top-right region; also the default
    Prep,
    /// Bottom-left region
    Cooking,
    /// Bottom-right region
    Washing,
    /// Center
    Service,
}

/// Keyword table in priority order. Matched case-insensitively.
const ZONE_KEYWORDS: [(&str, ZoneAnchor); 10] = [
    ("storage", ZoneAnchor::ColdStorage),
    ("cold", ZoneAnchor::ColdStorage),
    ("prep", ZoneAnchor::Prep),
    ("cook", ZoneAnchor::Cooking),
    ("hot", ZoneAnchor::Cooking),
    ("dish", ZoneAnchor::Washing),
    ("wash", ZoneAnchor::Washing),
    ("scullery", ZoneAnchor::Washing),
    ("service", ZoneAnchor::Service),
    ("pass", ZoneAnchor::Service),
];

impl ZoneAnchor {
    /// Anchor for a zone name: the first keyword it contains, else `Prep`.
    #[must_use]
    pub fn for_zone(zone_name: &str) -> Self {
        let name = zone_name.to_lowercase();
        ZONE_KEYWORDS
            .iter()
            .find(|(keyword, _)| name.contains(keyword))
            .map_or(Self::Prep, |(_, anchor)| *anchor)
    }

    /// Anchor point for the given canvas.
    #[must_use]
    pub const fn origin(self, bounds: CanvasBounds) -> (u32, u32) {
        let half_x = bounds.length / 2;
        let half_y = bounds.width / 2;
        match self {
            Self::ColdStorage => (1, 1),
            Self::Prep => (half_x + 1, 1),
            Self::Cooking => (1, half_y + 1),
            Self::Washing => (half_x + 1, half_y + 1),
            Self::Service => (half_x.saturating_sub(2), half_y.saturating_sub(2)),
        }
    }

    /// Category given to equipment that matches no catalog template.
    #[must_use]
    pub const fn fallback_category(self) -> EquipmentCategory {
        match self {
            Self::ColdStorage => EquipmentCategory::Refrigeration,
            Self::Prep => EquipmentCategory::Prep,
            Self::Cooking => EquipmentCategory::Cooking,
            Self::Washing => EquipmentCategory::Washing,
            Self::Service => EquipmentCategory::Service,
        }
    }
}

/// Converts generated zones into placed items.
#[derive(Debug, Clone, Copy)]
pub struct ZoneLayoutPlanner<'a> {
    catalog: &'a Catalog,
}

impl<'a> ZoneLayoutPlanner<'a> {
    /// Creates a planner over an immutable catalog.
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Places every equipment entry of every zone.
    ///
    /// Returns [`AutoLayoutError::NothingGenerated`] when the zones contain
    /// no equipment at all.
    pub fn plan(
        &self,
        zones: &[Zone],
        bounds: CanvasBounds,
    ) -> Result<Vec<PlacedItem>, AutoLayoutError> {
        let mut offsets: HashMap<ZoneAnchor, u32> = HashMap::new();
        let mut items = Vec::new();

        for zone in zones {
            let anchor = ZoneAnchor::for_zone(&zone.name);
            debug!(
                zone = %zone.name,
                anchor = ?anchor,
                equipment = zone.required_equipment.len(),
                "zone anchored"
            );

            for equipment in &zone.required_equipment {
                let offset = offsets.entry(anchor).or_insert(0);
                items.push(self.place(equipment, anchor, *offset, bounds));
                *offset += 1;
            }
        }

        if items.is_empty() {
            warn!(zones = zones.len(), "auto-layout produced no equipment");
            return Err(AutoLayoutError::NothingGenerated);
        }

        Ok(items)
    }

    fn place(
        &self,
        equipment: &RequiredEquipment,
        anchor: ZoneAnchor,
        offset: u32,
        bounds: CanvasBounds,
    ) -> PlacedItem {
        let (template, dims) =
            resolve_dimensions(self.catalog, &equipment.name, equipment.dimensions.as_deref());

        let (anchor_x, anchor_y) = anchor.origin(bounds);
        let x = anchor_x + (offset % SCATTER_COLUMNS) * SCATTER_SPACING;
        let y = anchor_y + (offset / SCATTER_COLUMNS) * SCATTER_SPACING;
        let (x, y) = bounds.clamp_position(x, y, dims.width, dims.height);

        let category = template.map_or(anchor.fallback_category(), |t| t.category);
        let color = template.map_or(category.default_color(), |t| t.style_tag);

        let template_specs = template.map(|t| &t.default_specs);
        let power = equipment
            .power_rating
            .clone()
            .or_else(|| template_specs.and_then(|s| s.power.clone()))
            .unwrap_or_else(|| DEFAULT_POWER_SPEC.to_string());
        let water = equipment
            .water_connection
            .clone()
            .or_else(|| template_specs.and_then(|s| s.water.clone()))
            .unwrap_or_else(|| DEFAULT_WATER_SPEC.to_string());

        let name = match equipment.name.trim() {
            "" => "Unnamed Equipment",
            name => name,
        };

        PlacedItem::new(name, category, dims.width, dims.height)
            .at(x, y)
            .with_specs(UtilitySpecs::new(power, water))
            .with_color(color)
    }
}
