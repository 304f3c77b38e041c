//! UI-facing facade over one kitchen layout.
//!
//! A [`Workspace`] owns the layout together with everything that edits it:
//! the catalog, the pointer controller and the auto-layout runner. It also
//! caches the [`MepStats`] of the current items, refreshed after every
//! mutation so the UI can read totals without recomputing them per frame.
//!
//! All methods run on the interaction thread. The auto-layout generator is
//! the only work done elsewhere; call [`Workspace::poll_auto_layout`] from
//! the event loop to pick up its result.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::catalog::{Catalog, EquipmentTemplate};
use crate::config::Config;
use crate::export::{self, BlueprintDocument};
use crate::models::{CanvasBounds, ItemPatch, KitchenLayout};
use crate::services::{
    AutoLayoutError, AutoLayoutRequest, AutoLayoutRunner, CanvasPoint, CreditLedger, DragState,
    InteractionController, LayoutGenerator, MepStats,
};

/// Editing session for a single kitchen layout.
#[derive(Debug)]
pub struct Workspace {
    catalog: Arc<Catalog>,
    layout: KitchenLayout,
    interaction: InteractionController,
    auto_layout: AutoLayoutRunner,
    mep_stats: MepStats,
}

impl Workspace {
    /// Creates an empty workspace from configuration.
    ///
    /// Uses the configured catalog file when set, the embedded catalog
    /// otherwise, and the configured default canvas.
    pub fn from_config(
        name: impl Into<String>,
        config: &Config,
        generator: Arc<dyn LayoutGenerator>,
    ) -> Result<Self> {
        let catalog = Catalog::load_or_embedded(config.catalog.path.as_deref())
            .context("Failed to load equipment catalog")?;
        Self::new(name, config, Arc::new(catalog), generator)
    }

    /// Creates an empty workspace with an explicit catalog.
    pub fn new(
        name: impl Into<String>,
        config: &Config,
        catalog: Arc<Catalog>,
        generator: Arc<dyn LayoutGenerator>,
    ) -> Result<Self> {
        let bounds = config.canvas.default_bounds()?;
        let layout = KitchenLayout::new(name, bounds)?;
        let auto_layout =
            AutoLayoutRunner::new(generator, Arc::clone(&catalog), config.auto_layout.clone());

        Ok(Self {
            catalog,
            layout,
            interaction: InteractionController::new(config.interaction.grid_unit_px),
            auto_layout,
            mep_stats: MepStats::default(),
        })
    }

    /// The equipment catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The layout being edited.
    #[must_use]
    pub const fn layout(&self) -> &KitchenLayout {
        &self.layout
    }

    /// Utility totals for the current items.
    #[must_use]
    pub const fn mep_stats(&self) -> MepStats {
        self.mep_stats
    }

    /// Current pointer interaction state.
    #[must_use]
    pub const fn drag_state(&self) -> &DragState {
        self.interaction.state()
    }

    /// Places a new item from a catalog template at the center of the canvas
    /// and selects it.
    ///
    /// Returns the new item's id.
    pub fn add_catalog_item(&mut self, template: &EquipmentTemplate) -> String {
        let (x, y) = self
            .layout
            .bounds()
            .centered_position(template.width, template.height);
        let item = template.instantiate().at(x, y);
        let id = item.id.clone();
        self.layout.add(item);
        self.layout.select(&id);
        self.refresh_stats();
        id
    }

    /// Like [`Self::add_catalog_item`], looking the template up by exact name.
    pub fn add_catalog_item_named(&mut self, name: &str) -> Result<String> {
        let template = self
            .catalog
            .find(name)
            .cloned()
            .with_context(|| format!("No catalog template named '{name}'"))?;
        Ok(self.add_catalog_item(&template))
    }

    /// Selects an item. Unknown ids clear the selection.
    pub fn select(&mut self, item_id: &str) {
        self.layout.select(item_id);
    }

    /// Starts dragging an item from a canvas-space pointer position.
    pub fn begin_drag(&mut self, item_id: &str, pointer: CanvasPoint) -> bool {
        self.interaction
            .pointer_down(&mut self.layout, item_id, pointer)
    }

    /// Moves the dragged item; returns its new grid position.
    pub fn update_drag(&mut self, pointer: CanvasPoint) -> Option<(u32, u32)> {
        let moved = self.interaction.pointer_move(&mut self.layout, pointer);
        if moved.is_some() {
            self.refresh_stats();
        }
        moved
    }

    /// Ends any drag.
    pub fn end_drag(&mut self) {
        self.interaction.pointer_up();
    }

    /// Rotates the selected item a quarter turn. No-op without a selection.
    pub fn rotate_selected(&mut self) -> bool {
        let Some(id) = self.layout.selected_id().map(str::to_string) else {
            return false;
        };
        let rotated = self.interaction.rotate(&mut self.layout, &id);
        self.refresh_stats();
        rotated
    }

    /// Deletes the selected item. No-op without a selection.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.layout.selected_id().map(str::to_string) else {
            return false;
        };
        let deleted = self.interaction.delete(&mut self.layout, &id);
        self.refresh_stats();
        deleted
    }

    /// Merges field edits into an item. Unknown ids are ignored.
    pub fn update_item(&mut self, item_id: &str, patch: &ItemPatch) -> bool {
        let updated = self.layout.update(item_id, patch);
        self.refresh_stats();
        updated
    }

    /// Resizes the canvas, pulling items back inside.
    pub fn set_bounds(&mut self, bounds: CanvasBounds) {
        self.layout.set_bounds(bounds);
        self.refresh_stats();
    }

    /// Renames the layout.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<()> {
        self.layout.metadata.set_name(name)
    }

    /// Charges credits and dispatches an auto-layout request.
    ///
    /// The current items stay in place until the result is applied by
    /// [`Self::poll_auto_layout`] or [`Self::wait_auto_layout`].
    pub fn run_auto_layout(
        &mut self,
        request: AutoLayoutRequest,
        ledger: &mut dyn CreditLedger,
    ) -> Result<(), AutoLayoutError> {
        self.auto_layout.start(request, ledger)
    }

    /// Whether an auto-layout request is in flight.
    #[must_use]
    pub const fn is_auto_layout_in_flight(&self) -> bool {
        self.auto_layout.is_in_flight()
    }

    /// Applies a finished auto-layout result, if one has arrived.
    pub fn poll_auto_layout(&mut self) -> Option<Result<usize, AutoLayoutError>> {
        let outcome = self.auto_layout.poll(&mut self.layout)?;
        self.after_auto_layout(&outcome);
        Some(outcome)
    }

    /// Blocks until the in-flight auto-layout request finishes or times out.
    pub fn wait_auto_layout(&mut self) -> Option<Result<usize, AutoLayoutError>> {
        let outcome = self.auto_layout.wait(&mut self.layout)?;
        self.after_auto_layout(&outcome);
        Some(outcome)
    }

    /// Snapshots the layout for download.
    #[must_use]
    pub fn export_blueprint(&self) -> BlueprintDocument {
        export::export_blueprint(&self.layout)
    }

    /// Writes the blueprint JSON into `dir`; returns the file path.
    pub fn save_blueprint(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(export::blueprint_filename(&self.layout.metadata.name));
        export::save_blueprint(&self.export_blueprint(), &path)?;
        Ok(path)
    }

    /// Writes the zip download package to `zip_path`.
    pub fn write_package(&self, zip_path: &Path) -> Result<()> {
        export::write_blueprint_package(zip_path, &self.layout.metadata, &self.export_blueprint())
    }

    fn after_auto_layout(&mut self, outcome: &Result<usize, AutoLayoutError>) {
        if outcome.is_ok() {
            // A drag on a replaced item has nothing left to move
            self.interaction.pointer_up();
            self.refresh_stats();
            info!(
                total_power = self.mep_stats.total_power,
                water_points = self.mep_stats.water_points,
                "utility totals refreshed after auto-layout"
            );
        }
    }

    fn refresh_stats(&mut self) {
        self.mep_stats = MepStats::from_items(self.layout.items());
        debug!(
            items = self.layout.item_count(),
            total_power = self.mep_stats.total_power,
            water_points = self.mep_stats.water_points,
            "utility totals updated"
        );
    }
}
