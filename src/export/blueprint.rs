//! Blueprint snapshot document.
//!
//! The document shape is stable so a future loader can rebuild the model:
//!
//! ```json
//! { "kitchenDims": { "length": 20, "width": 15 },
//!   "items": [ { "id": "...", "name": "Combi Oven", "category": "cooking",
//!                "x": 1, "y": 1, "width": 3, "height": 3, "rotation": 0,
//!                "specs": { "power": "10kW", "water": "Cold + Drain" },
//!                "color": "#D32F2F" } ],
//!   "mepStats": { "totalPower": 10.0, "waterPoints": 1 } }
//! ```
//!
//! Selection is transient UI state and is never exported.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{CanvasBounds, KitchenLayout, PlacedItem};
use crate::services::MepStats;

/// Snapshot of a layout and its utility totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintDocument {
    /// Canvas extents
    pub kitchen_dims: CanvasBounds,
    /// Items in layout order
    pub items: Vec<PlacedItem>,
    /// Totals at export time
    pub mep_stats: MepStats,
}

impl BlueprintDocument {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize blueprint")
    }
}

/// Snapshots `layout`, recomputing the utility totals from its items.
#[must_use]
pub fn export_blueprint(layout: &KitchenLayout) -> BlueprintDocument {
    let items = layout.items().to_vec();
    BlueprintDocument {
        kitchen_dims: layout.bounds(),
        mep_stats: MepStats::from_items(&items),
        items,
    }
}

/// Writes a blueprint to `path` using temp file + rename.
pub fn save_blueprint(document: &BlueprintDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(format!(
            "Failed to create export directory: {}",
            parent.display()
        ))?;
    }

    let content = document.to_json()?;
    let temp_path = path.with_extension("json.tmp");

    fs::write(&temp_path, content).context(format!(
        "Failed to write temp blueprint file: {}",
        temp_path.display()
    ))?;

    fs::rename(&temp_path, path).context(format!(
        "Failed to rename temp blueprint file to: {}",
        path.display()
    ))?;

    info!(path = %path.display(), items = document.items.len(), "blueprint saved");
    Ok(())
}

/// Download filename for a layout, e.g. "Main Kitchen" -> "main-kitchen-blueprint.json".
#[must_use]
pub fn blueprint_filename(layout_name: &str) -> String {
    format!("{}-blueprint.json", slugify(layout_name))
}

/// Lowercase ASCII alphanumerics joined by single dashes; "kitchen" if empty.
pub(crate) fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "kitchen".to_string()
    } else {
        slug.to_string()
    }
}
