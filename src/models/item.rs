//! Placed equipment items.

use crate::constants::SPEC_NONE;
use crate::models::{CanvasBounds, EquipmentCategory, RgbColor};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Quarter-turn rotation of a placed item.
///
/// Serialized as integer degrees (0, 90, 180, 270).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    /// 0 degrees
    #[default]
    Deg0,
    /// 90 degrees
    Deg90,
    /// 180 degrees
    Deg180,
    /// 270 degrees
    Deg270,
}

impl Rotation {
    /// Rotation in degrees.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Next quarter turn clockwise, wrapping at 360.
    #[must_use]
    pub const fn quarter_turn(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(format!(
                "Rotation must be one of 0, 90, 180, 270 degrees (got {other})"
            )),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Free-text utility requirements of a piece of equipment.
///
/// `"None"` is the sentinel for "no requirement"; an absent field means the
/// same thing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UtilitySpecs {
    /// Electrical/gas requirement (e.g., "3kW Gas")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    /// Plumbing requirement (e.g., "Cold + Drain")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water: Option<String>,
}

impl UtilitySpecs {
    /// Creates specs from power and water strings.
    pub fn new(power: impl Into<String>, water: impl Into<String>) -> Self {
        Self {
            power: Some(power.into()),
            water: Some(water.into()),
        }
    }

    /// Power requirement, if present and not the "None" sentinel.
    #[must_use]
    pub fn power_requirement(&self) -> Option<&str> {
        requirement(self.power.as_deref())
    }

    /// Water requirement, if present and not the "None" sentinel.
    #[must_use]
    pub fn water_requirement(&self) -> Option<&str> {
        requirement(self.water.as_deref())
    }
}

fn requirement(value: Option<&str>) -> Option<&str> {
    value.filter(|v| *v != SPEC_NONE)
}

/// A piece of equipment placed on the kitchen grid.
///
/// # Validation
///
/// - `id` is assigned at creation and never changes
/// - `width` and `height` are at least 1
/// - The item lies inside the canvas bounds of the layout that owns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedItem {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Display name (e.g., "Reach-in Freezer")
    pub name: String,
    /// Functional category
    pub category: EquipmentCategory,
    /// Top-left x in grid units
    pub x: u32,
    /// Top-left y in grid units
    pub y: u32,
    /// Extent along x in grid units
    pub width: u32,
    /// Extent along y in grid units
    pub height: u32,
    /// Quarter-turn rotation
    pub rotation: Rotation,
    /// Utility requirements
    pub specs: UtilitySpecs,
    /// Presentation color
    pub color: RgbColor,
}

impl PlacedItem {
    /// Creates an unrotated item at the origin with a fresh id.
    ///
    /// Zero extents are raised to 1.
    pub fn new(
        name: impl Into<String>,
        category: EquipmentCategory,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category,
            x: 0,
            y: 0,
            width: width.max(1),
            height: height.max(1),
            rotation: Rotation::Deg0,
            specs: UtilitySpecs::default(),
            color: category.default_color(),
        }
    }

    /// Sets the position.
    #[must_use]
    pub const fn at(mut self, x: u32, y: u32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the utility specs.
    #[must_use]
    pub fn with_specs(mut self, specs: UtilitySpecs) -> Self {
        self.specs = specs;
        self
    }

    /// Sets the presentation color.
    #[must_use]
    pub const fn with_color(mut self, color: RgbColor) -> Self {
        self.color = color;
        self
    }

    /// Rotates a quarter turn: swaps the extents and advances `rotation`.
    ///
    /// Position is left alone; the owning layout re-clamps it.
    pub fn rotate_quarter(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
        self.rotation = self.rotation.quarter_turn();
    }

    /// Moves the item back inside `bounds`, keeping its size.
    pub fn clamp_to(&mut self, bounds: &CanvasBounds) {
        let (x, y) = bounds.clamp_position(self.x, self.y, self.width, self.height);
        self.x = x;
        self.y = y;
    }

    /// Whether the item lies fully inside `bounds`.
    #[must_use]
    pub const fn fits(&self, bounds: &CanvasBounds) -> bool {
        bounds.contains(self.x, self.y, self.width, self.height)
    }

    /// Whether the footprints of two items intersect.
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        let (ax, ay) = (self.x as u64, self.y as u64);
        let (bx, by) = (other.x as u64, other.y as u64);
        ax < bx + other.width as u64
            && bx < ax + self.width as u64
            && ay < by + other.height as u64
            && by < ay + self.height as u64
    }
}

/// Partial update for a placed item.
///
/// `None` fields are left unchanged. The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    /// New display name
    pub name: Option<String>,
    /// New category
    pub category: Option<EquipmentCategory>,
    /// New x
    pub x: Option<u32>,
    /// New y
    pub y: Option<u32>,
    /// New width (raised to 1 if zero)
    pub width: Option<u32>,
    /// New height (raised to 1 if zero)
    pub height: Option<u32>,
    /// New rotation
    pub rotation: Option<Rotation>,
    /// New utility specs
    pub specs: Option<UtilitySpecs>,
    /// New color
    pub color: Option<RgbColor>,
}

impl ItemPatch {
    /// Patch that only moves the item.
    #[must_use]
    pub const fn position(x: u32, y: u32) -> Self {
        Self {
            name: None,
            category: None,
            x: Some(x),
            y: Some(y),
            width: None,
            height: None,
            rotation: None,
            specs: None,
            color: None,
        }
    }

    /// Merges the set fields into `item`. Does not clamp.
    pub fn apply_to(&self, item: &mut PlacedItem) {
        if let Some(name) = &self.name {
            item.name.clone_from(name);
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(x) = self.x {
            item.x = x;
        }
        if let Some(y) = self.y {
            item.y = y;
        }
        if let Some(width) = self.width {
            item.width = width.max(1);
        }
        if let Some(height) = self.height {
            item.height = height.max(1);
        }
        if let Some(rotation) = self.rotation {
            item.rotation = rotation;
        }
        if let Some(specs) = &self.specs {
            item.specs = specs.clone();
        }
        if let Some(color) = self.color {
            item.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range() -> PlacedItem {
        PlacedItem::new("4-Burner Range", EquipmentCategory::Cooking, 3, 2).at(5, 6)
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = range();
        let b = range();
        assert_ne!(a.id, b.id);
        assert_eq!(a.rotation, Rotation::Deg0);
        assert_eq!(a.color, EquipmentCategory::Cooking.default_color());
    }

    #[test]
    fn test_new_never_zero_sized() {
        let item = PlacedItem::new("Ghost", EquipmentCategory::Prep, 0, 0);
        assert_eq!((item.width, item.height), (1, 1));
    }

    #[test]
    fn test_rotate_quarter_swaps_extents() {
        let mut item = range();
        item.rotate_quarter();
        assert_eq!((item.width, item.height), (2, 3));
        assert_eq!(item.rotation, Rotation::Deg90);

        item.rotate_quarter();
        assert_eq!((item.width, item.height), (3, 2));
        assert_eq!(item.rotation, Rotation::Deg180);
    }

    #[test]
    fn test_rotate_four_times_round_trip() {
        let mut item = range();
        let original = item.clone();
        for _ in 0..4 {
            item.rotate_quarter();
        }
        assert_eq!(item, original);
    }

    #[test]
    fn test_rotation_serde_degrees() {
        assert_eq!(serde_json::to_string(&Rotation::Deg270).unwrap(), "270");
        assert_eq!(
            serde_json::from_str::<Rotation>("90").unwrap(),
            Rotation::Deg90
        );
        assert!(serde_json::from_str::<Rotation>("45").is_err());
    }

    #[test]
    fn test_specs_sentinel() {
        let specs = UtilitySpecs::new("3kW Gas", "None");
        assert_eq!(specs.power_requirement(), Some("3kW Gas"));
        assert_eq!(specs.water_requirement(), None);
        assert_eq!(UtilitySpecs::default().power_requirement(), None);
    }

    #[test]
    fn test_overlaps() {
        let a = PlacedItem::new("A", EquipmentCategory::Prep, 3, 3).at(0, 0);
        let b = PlacedItem::new("B", EquipmentCategory::Prep, 3, 3).at(2, 2);
        let c = PlacedItem::new("C", EquipmentCategory::Prep, 3, 3).at(3, 0);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_overlaps_near_u32_max() {
        // Unclamped items whose far edge lies past u32::MAX
        let far =
            PlacedItem::new("Far", EquipmentCategory::Prep, 10, 10).at(u32::MAX - 2, u32::MAX - 2);
        let near =
            PlacedItem::new("Near", EquipmentCategory::Prep, 3, 3).at(u32::MAX - 4, u32::MAX - 4);
        let origin = PlacedItem::new("Origin", EquipmentCategory::Prep, 3, 3);
        assert!(far.overlaps(&near));
        assert!(near.overlaps(&far));
        assert!(!far.overlaps(&origin));
    }

    #[test]
    fn test_patch_apply() {
        let mut item = range();
        let patch = ItemPatch {
            name: Some("Six Burner".to_string()),
            width: Some(0),
            ..ItemPatch::default()
        };
        patch.apply_to(&mut item);
        assert_eq!(item.name, "Six Burner");
        assert_eq!(item.width, 1);
        assert_eq!((item.x, item.y), (5, 6));
    }
}
