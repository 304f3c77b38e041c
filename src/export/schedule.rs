//! Equipment schedule generator.
//!
//! Produces a Markdown table of every placed item followed by the utility
//! totals, suitable for handing to a contractor alongside the blueprint.

use std::fmt::Write as _;

use super::BlueprintDocument;

/// Generates the equipment schedule for a blueprint.
///
/// # Example
///
/// ```
/// use kitchen_planner::export::{export_blueprint, generate_equipment_schedule};
/// use kitchen_planner::models::{CanvasBounds, KitchenLayout};
///
/// let layout = KitchenLayout::new("Test", CanvasBounds::new(20, 15).unwrap()).unwrap();
/// let schedule = generate_equipment_schedule("Test", &export_blueprint(&layout));
/// assert!(schedule.contains("No equipment placed"));
/// ```
pub fn generate_equipment_schedule(layout_name: &str, document: &BlueprintDocument) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# {layout_name}: Equipment Schedule\n");
    let _ = writeln!(
        output,
        "Kitchen: {} x {} ft ({} sq ft)\n",
        document.kitchen_dims.length,
        document.kitchen_dims.width,
        document.kitchen_dims.area()
    );

    output.push_str("## Equipment\n\n");
    if document.items.is_empty() {
        output.push_str("_No equipment placed._\n\n");
    } else {
        output.push_str("| # | Name | Category | Size (ft) | Position | Rotation | Power | Water |\n");
        output.push_str("|---|------|----------|-----------|----------|----------|-------|-------|\n");
        for (index, item) in document.items.iter().enumerate() {
            let _ = writeln!(
                output,
                "| {} | {} | {} | {} x {} | ({}, {}) | {}° | {} | {} |",
                index + 1,
                escape_cell(&item.name),
                item.category.display_name(),
                item.width,
                item.height,
                item.x,
                item.y,
                item.rotation.degrees(),
                escape_cell(item.specs.power.as_deref().unwrap_or("-")),
                escape_cell(item.specs.water.as_deref().unwrap_or("-")),
            );
        }
        output.push('\n');
    }

    output.push_str("## Utilities\n\n");
    let _ = writeln!(
        output,
        "- **Total power:** {:.1} kW",
        document.mep_stats.total_power
    );
    let _ = writeln!(
        output,
        "- **Water points:** {}",
        document.mep_stats.water_points
    );

    output
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
