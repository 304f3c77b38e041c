//! Export functionality for kitchen layouts.
//!
//! This module snapshots a layout into a blueprint document and renders the
//! companion files offered for download: a Markdown equipment schedule and a
//! zip package bundling both.

pub mod blueprint;
pub mod package;
pub mod schedule;

pub use blueprint::{blueprint_filename, export_blueprint, save_blueprint, BlueprintDocument};
pub use package::write_blueprint_package;
pub use schedule::generate_equipment_schedule;
