//! Downloadable zip package.
//!
//! The archive contains:
//!
//! - `blueprint.json`: the blueprint document
//! - `equipment-schedule.md`: the Markdown equipment schedule
//! - `manifest.json`: layout name, timestamps and summary counts

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::json;
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use super::{generate_equipment_schedule, BlueprintDocument};
use crate::constants::{APP_NAME, BLUEPRINT_VERSION};
use crate::models::LayoutMetadata;

/// Writes the download package for a blueprint to `zip_path`.
pub fn write_blueprint_package(
    zip_path: &Path,
    metadata: &LayoutMetadata,
    document: &BlueprintDocument,
) -> Result<()> {
    if let Some(parent) = zip_path.parent() {
        fs::create_dir_all(parent).context(format!(
            "Failed to create export directory: {}",
            parent.display()
        ))?;
    }

    let blueprint = document.to_json()?;
    let schedule = generate_equipment_schedule(&metadata.name, document);
    let manifest = json!({
        "generator": APP_NAME,
        "format_version": BLUEPRINT_VERSION,
        "layout_name": metadata.name,
        "layout_created": metadata.created.to_rfc3339(),
        "layout_modified": metadata.modified.to_rfc3339(),
        "exported_at": Utc::now().to_rfc3339(),
        "item_count": document.items.len(),
        "total_power_kw": document.mep_stats.total_power,
        "water_points": document.mep_stats.water_points,
        "files": ["blueprint.json", "equipment-schedule.md"],
    });
    let manifest =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;

    let file = File::create(zip_path)
        .context(format!("Failed to create zip file: {}", zip_path.display()))?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    // Fixed names only; no user input reaches archive paths
    add_file_to_zip(&mut zip, "blueprint.json", blueprint.as_bytes(), options)?;
    add_file_to_zip(&mut zip, "equipment-schedule.md", schedule.as_bytes(), options)?;
    add_file_to_zip(&mut zip, "manifest.json", manifest.as_bytes(), options)?;

    zip.finish().context("Failed to finalize zip")?;

    info!(path = %zip_path.display(), "blueprint package written");
    Ok(())
}

fn add_file_to_zip(
    zip: &mut ZipWriter<File>,
    name: &str,
    content: &[u8],
    options: SimpleFileOptions,
) -> Result<()> {
    if name.contains("..") || name.starts_with('/') || name.starts_with('\\') {
        anyhow::bail!("Invalid filename in zip: {name}");
    }

    zip.start_file(name, options)
        .context(format!("Failed to start file {name}"))?;
    zip.write_all(content)
        .context(format!("Failed to write file {name}"))?;

    Ok(())
}
