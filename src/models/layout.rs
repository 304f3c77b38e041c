//! Kitchen layout: canvas bounds, placed items and selection.

use crate::models::{CanvasBounds, ItemPatch, PlacedItem};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Layout metadata.
///
/// # Validation
///
/// - name must be non-empty, max 100 characters
/// - created must be <= modified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutMetadata {
    /// Layout name (e.g., "Main Kitchen")
    pub name: String,
    /// Creation timestamp (ISO 8601)
    pub created: DateTime<Utc>,
    /// Last modification timestamp (ISO 8601)
    pub modified: DateTime<Utc>,
}

impl LayoutMetadata {
    /// Creates new metadata stamped with the current time.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        Self::validate_name(&name)?;

        let now = Utc::now();
        Ok(Self {
            name,
            created: now,
            modified: now,
        })
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            anyhow::bail!("Layout name cannot be empty");
        }

        if name.len() > 100 {
            anyhow::bail!(
                "Layout name '{}' exceeds maximum length of 100 characters (got {})",
                name,
                name.len()
            );
        }

        Ok(())
    }

    /// Updates the modification timestamp to now.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }

    /// Renames the layout.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        Self::validate_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }
}

/// The spatial model: canvas bounds plus the ordered list of placed items.
///
/// Every item satisfies `x + width <= bounds.length` and
/// `y + height <= bounds.width` after every mutation. Positions are clamped
/// rather than rejected. Operations on unknown ids are no-ops.
///
/// The selection is a lookup-only id; removing the selected item clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitchenLayout {
    /// Layout metadata
    pub metadata: LayoutMetadata,
    bounds: CanvasBounds,
    items: Vec<PlacedItem>,
    selected: Option<String>,
}

impl KitchenLayout {
    /// Creates an empty layout.
    pub fn new(name: impl Into<String>, bounds: CanvasBounds) -> Result<Self> {
        Ok(Self {
            metadata: LayoutMetadata::new(name)?,
            bounds,
            items: Vec::new(),
            selected: None,
        })
    }

    /// Current canvas bounds.
    #[must_use]
    pub const fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    /// Placed items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Number of placed items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Id of the selected item, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected item, if it still exists.
    #[must_use]
    pub fn selected_item(&self) -> Option<&PlacedItem> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Selects an item. Unknown ids clear the selection.
    pub fn select(&mut self, id: &str) {
        self.selected = self.get(id).map(|item| item.id.clone());
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Inserts an item, clamping it into the current bounds.
    pub fn add(&mut self, mut item: PlacedItem) {
        item.clamp_to(&self.bounds);
        debug!(id = %item.id, name = %item.name, x = item.x, y = item.y, "item added");
        self.items.push(item);
        self.metadata.touch();
    }

    /// Removes an item by id, returning it. Clears the selection if it pointed there.
    pub fn remove(&mut self, id: &str) -> Option<PlacedItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.metadata.touch();
        Some(self.items.remove(index))
    }

    /// Merges `patch` into an item, then re-clamps its position.
    ///
    /// Returns `false` when the id is unknown.
    pub fn update(&mut self, id: &str, patch: &ItemPatch) -> bool {
        let bounds = self.bounds;
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        patch.apply_to(item);
        item.clamp_to(&bounds);
        self.metadata.touch();
        true
    }

    /// Rotates an item a quarter turn and re-clamps it.
    ///
    /// Returns `false` when the id is unknown.
    pub fn rotate(&mut self, id: &str) -> bool {
        let bounds = self.bounds;
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.rotate_quarter();
        item.clamp_to(&bounds);
        self.metadata.touch();
        true
    }

    /// Replaces the bounds and re-clamps every item. Items keep their size.
    pub fn set_bounds(&mut self, bounds: CanvasBounds) {
        debug!(
            length = bounds.length,
            width = bounds.width,
            "canvas bounds changed"
        );
        self.bounds = bounds;
        for item in &mut self.items {
            item.clamp_to(&bounds);
        }
        self.metadata.touch();
    }

    /// Replaces the whole item list in one step and clears the selection.
    ///
    /// Incoming items are clamped into the current bounds.
    pub fn replace_items(&mut self, items: Vec<PlacedItem>) {
        let bounds = self.bounds;
        self.items = items
            .into_iter()
            .map(|mut item| {
                item.clamp_to(&bounds);
                item
            })
            .collect();
        self.selected = None;
        self.metadata.touch();
    }

    /// Pairs of item ids whose footprints intersect.
    ///
    /// Informational only: overlapping placements are allowed.
    #[must_use]
    pub fn overlapping_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        for (i, a) in self.items.iter().enumerate() {
            for b in &self.items[i + 1..] {
                if a.overlaps(b) {
                    pairs.push((a.id.as_str(), b.id.as_str()));
                }
            }
        }
        pairs
    }

    /// Checks the bounds invariant for every item.
    pub fn validate(&self) -> Result<()> {
        for item in &self.items {
            if !item.fits(&self.bounds) {
                anyhow::bail!(
                    "Item '{}' at ({}, {}) size {}x{} exceeds canvas {}x{}",
                    item.name,
                    item.x,
                    item.y,
                    item.width,
                    item.height,
                    self.bounds.length,
                    self.bounds.width
                );
            }
        }
        Ok(())
    }
}
