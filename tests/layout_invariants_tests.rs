//! Integration tests for the grid invariants under mixed editing

mod fixtures;

use fixtures::{catalog, empty_layout, workspace, ScriptedGenerator, KITCHEN_ZONES};
use kitchen_planner::catalog::{parse_dimension_hint, resolve_template, Dimensions};
use kitchen_planner::models::{CanvasBounds, ItemPatch, Rotation};
use kitchen_planner::services::CanvasPoint;

fn assert_all_inside(layout: &kitchen_planner::models::KitchenLayout) {
    let bounds = layout.bounds();
    for item in layout.items() {
        assert!(
            item.x + item.width <= bounds.length && item.y + item.height <= bounds.width,
            "{} at ({}, {}) size {}x{} escapes {}x{}",
            item.name,
            item.x,
            item.y,
            item.width,
            item.height,
            bounds.length,
            bounds.width
        );
    }
}

#[test]
fn test_bounds_hold_through_editing_session() {
    let mut ws = workspace(ScriptedGenerator::responding(KITCHEN_ZONES), 20, 15);

    let table = ws.add_catalog_item_named("Prep Table").unwrap();
    let sink = ws.add_catalog_item_named("3-Compartment Sink").unwrap();
    let cooler = ws.add_catalog_item_named("Walk-in Cooler").unwrap();
    assert_all_inside(ws.layout());

    // New items start centered: the table sits at (7, 6), i.e. (280, 240) px
    let start = ws.layout().get(&table).unwrap();
    assert_eq!((start.x, start.y), (7, 6));

    // Drag the table far past the bottom-right corner
    assert!(ws.begin_drag(&table, CanvasPoint::new(300.0, 260.0)));
    ws.update_drag(CanvasPoint::new(10_000.0, 10_000.0));
    ws.end_drag();
    assert_all_inside(ws.layout());
    let moved = ws.layout().get(&table).unwrap();
    assert_eq!((moved.x, moved.y), (14, 12));

    // Rotating near the edge pulls the item back in
    ws.select(&table);
    ws.rotate_selected();
    assert_all_inside(ws.layout());

    // Patched positions and sizes are clamped too
    ws.update_item(
        &sink,
        &ItemPatch {
            x: Some(50),
            width: Some(10),
            ..ItemPatch::default()
        },
    );
    assert_all_inside(ws.layout());

    // Shrinking the canvas re-clamps everything
    ws.set_bounds(CanvasBounds::new(12, 9).unwrap());
    assert_all_inside(ws.layout());
    assert!(ws.layout().get(&cooler).is_some());
    assert!(ws.layout().validate().is_ok());
}

#[test]
fn test_four_rotations_restore_item() {
    let mut layout = empty_layout(30, 30);
    let template = catalog().find("Conveyor Dishwasher").cloned().unwrap();
    let item = template.instantiate().at(5, 5);
    let id = item.id.clone();
    layout.add(item);
    let original = layout.get(&id).cloned().unwrap();

    let mut seen = Vec::new();
    for _ in 0..4 {
        layout.rotate(&id);
        seen.push(layout.get(&id).unwrap().rotation);
    }
    assert_eq!(
        seen,
        vec![Rotation::Deg90, Rotation::Deg180, Rotation::Deg270, Rotation::Deg0]
    );

    let item = layout.get(&id).unwrap();
    assert_eq!(
        (item.width, item.height, item.rotation),
        (original.width, original.height, original.rotation)
    );
}

#[test]
fn test_unknown_ids_are_noops() {
    let mut layout = empty_layout(20, 15);
    let before = layout.clone();

    assert!(layout.remove("stale").is_none());
    assert!(!layout.update("stale", &ItemPatch::position(1, 1)));
    assert!(!layout.rotate("stale"));
    assert_eq!(layout.items(), before.items());
}

#[test]
fn test_resolver_is_deterministic() {
    let catalog = catalog();
    for query in ["Reach-in Freezer", "Combi Oven XL", "freezer", "Sink", "Espresso Robot"] {
        let first = resolve_template(&catalog, query).map(|t| t.name.clone());
        let second = resolve_template(&catalog, query).map(|t| t.name.clone());
        assert_eq!(first, second, "query {query:?}");
    }
    assert_eq!(
        resolve_template(&catalog, "Combi Oven XL").map(|t| t.name.as_str()),
        Some("Combi Oven")
    );
}

#[test]
fn test_dimension_hints() {
    assert_eq!(parse_dimension_hint("4x3"), Dimensions::new(4, 3));
    assert_eq!(parse_dimension_hint("garbage"), Dimensions::new(3, 3));
    assert_eq!(parse_dimension_hint("4x3x2"), Dimensions::new(3, 3));
    assert_eq!(parse_dimension_hint("0x5"), Dimensions::new(3, 3));
}
