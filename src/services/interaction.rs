//! Pointer-driven drag, rotate and delete.
//!
//! The controller is a two-state machine:
//!
//! ```text
//! Idle --pointer_down(item)--> Dragging { item_id, grab_offset } --pointer_up--> Idle
//! ```
//!
//! Pointer positions are canvas-space pixels at scale 1.0; pan and zoom are
//! a rendering concern and must be removed by the caller. Drags snap to the
//! grid and clamp to the canvas but never check other items, so overlapping
//! placements are allowed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{ItemPatch, KitchenLayout};

/// A point in canvas space (pixels, unscaled).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasPoint {
    /// Horizontal pixels from the canvas origin
    pub x: f64,
    /// Vertical pixels from the canvas origin
    pub y: f64,
}

impl CanvasPoint {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Current interaction state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,
    /// Dragging an item
    Dragging {
        /// Item being dragged
        item_id: String,
        /// Pointer position minus the item's top-left, in pixels
        grab_offset: CanvasPoint,
    },
}

/// Translates pointer events into layout mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionController {
    grid_unit_px: f64,
    state: DragState,
}

impl InteractionController {
    /// Creates an idle controller. Non-positive grid sizes fall back to 1px.
    #[must_use]
    pub fn new(grid_unit_px: f64) -> Self {
        let grid_unit_px = if grid_unit_px.is_finite() && grid_unit_px > 0.0 {
            grid_unit_px
        } else {
            1.0
        };
        Self {
            grid_unit_px,
            state: DragState::Idle,
        }
    }

    /// Pixels per grid unit.
    #[must_use]
    pub const fn grid_unit_px(&self) -> f64 {
        self.grid_unit_px
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer pressed on an item: selects it and starts dragging.
    ///
    /// Returns `false` (and stays idle) when the id is unknown.
    pub fn pointer_down(
        &mut self,
        layout: &mut KitchenLayout,
        item_id: &str,
        pointer: CanvasPoint,
    ) -> bool {
        let Some(item) = layout.get(item_id) else {
            self.state = DragState::Idle;
            return false;
        };

        let grab_offset = CanvasPoint::new(
            pointer.x - f64::from(item.x) * self.grid_unit_px,
            pointer.y - f64::from(item.y) * self.grid_unit_px,
        );
        let item_id = item.id.clone();
        layout.select(&item_id);

        debug!(item = %item_id, "drag started");
        self.state = DragState::Dragging {
            item_id,
            grab_offset,
        };
        true
    }

    /// Pointer moved: snaps the dragged item to the nearest clamped grid cell.
    ///
    /// Returns the new `(x, y)` when an item moved. If the dragged item has
    /// disappeared the controller returns to idle.
    pub fn pointer_move(
        &mut self,
        layout: &mut KitchenLayout,
        pointer: CanvasPoint,
    ) -> Option<(u32, u32)> {
        let DragState::Dragging {
            item_id,
            grab_offset,
        } = &self.state
        else {
            return None;
        };

        let Some(item) = layout.get(item_id) else {
            self.state = DragState::Idle;
            return None;
        };

        let cell_x = ((pointer.x - grab_offset.x) / self.grid_unit_px).round();
        let cell_y = ((pointer.y - grab_offset.y) / self.grid_unit_px).round();
        let (x, y) = layout
            .bounds()
            .clamp_cell(cell_x as i64, cell_y as i64, item.width, item.height);

        if (x, y) != (item.x, item.y) {
            let item_id = item_id.clone();
            layout.update(&item_id, &ItemPatch::position(x, y));
        }
        Some((x, y))
    }

    /// Pointer released: ends any drag.
    pub fn pointer_up(&mut self) {
        if let DragState::Dragging { item_id, .. } = &self.state {
            debug!(item = %item_id, "drag ended");
        }
        self.state = DragState::Idle;
    }

    /// Rotates an item a quarter turn. Unknown ids are ignored.
    pub fn rotate(&self, layout: &mut KitchenLayout, item_id: &str) -> bool {
        layout.rotate(item_id)
    }

    /// Deletes an item and clears the selection. Unknown ids are ignored.
    pub fn delete(&mut self, layout: &mut KitchenLayout, item_id: &str) -> bool {
        if matches!(&self.state, DragState::Dragging { item_id: dragged, .. } if dragged == item_id)
        {
            self.state = DragState::Idle;
        }
        let removed = layout.remove(item_id).is_some();
        layout.clear_selection();
        removed
    }
}
