//! Integration tests for blueprint export and configuration-driven setup

mod fixtures;

use std::fs;
use std::io::Read;

use fixtures::{workspace, ScriptedGenerator, KITCHEN_ZONES};
use kitchen_planner::config::Config;
use kitchen_planner::export::BlueprintDocument;
use kitchen_planner::models::CanvasBounds;
use kitchen_planner::services::CanvasPoint;
use kitchen_planner::Workspace;
use tempfile::TempDir;

#[test]
fn test_export_matches_live_model() {
    let mut ws = workspace(ScriptedGenerator::responding(KITCHEN_ZONES), 20, 15);
    let oven = ws.add_catalog_item_named("Combi Oven").unwrap();
    ws.add_catalog_item_named("Dishwasher").unwrap();
    // The oven starts centered at (8, 6), i.e. (320, 240) px
    ws.begin_drag(&oven, CanvasPoint::new(330.0, 250.0));
    assert_eq!(ws.update_drag(CanvasPoint::new(530.0, 410.0)), Some((13, 10)));
    ws.end_drag();
    ws.select(&oven);

    let document = ws.export_blueprint();
    let json = document.to_json().unwrap();
    let reread: BlueprintDocument = serde_json::from_str(&json).unwrap();

    assert_eq!(reread.items, ws.layout().items());
    assert_eq!(reread.kitchen_dims, CanvasBounds::new(20, 15).unwrap());
    assert_eq!(reread.mep_stats, ws.mep_stats());
    assert!(!json.contains("selected"));
}

#[test]
fn test_save_blueprint_into_directory() {
    let dir = TempDir::new().unwrap();
    let mut ws = workspace(ScriptedGenerator::responding(KITCHEN_ZONES), 20, 15);
    ws.rename("Main Kitchen").unwrap();
    ws.add_catalog_item_named("Ice Machine").unwrap();

    let path = ws.save_blueprint(dir.path()).unwrap();
    assert_eq!(path, dir.path().join("main-kitchen-blueprint.json"));

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["items"][0]["name"], "Ice Machine");
    assert_eq!(value["mepStats"]["waterPoints"], 1);
}

#[test]
fn test_package_bundles_schedule() {
    let dir = TempDir::new().unwrap();
    let zip_path = dir.path().join("downloads").join("kitchen.zip");
    let mut ws = workspace(ScriptedGenerator::responding(KITCHEN_ZONES), 20, 15);
    ws.add_catalog_item_named("Bain Marie").unwrap();

    ws.write_package(&zip_path).unwrap();

    let mut archive = zip::ZipArchive::new(fs::File::open(&zip_path).unwrap()).unwrap();
    let mut schedule = String::new();
    archive
        .by_name("equipment-schedule.md")
        .unwrap()
        .read_to_string(&mut schedule)
        .unwrap();
    assert!(schedule.contains("Bain Marie"));
    assert!(schedule.contains("- **Total power:** 2.0 kW"));
}

#[test]
fn test_workspace_from_config_file() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    fs::write(
        &catalog_path,
        r##"{ "version": "2.0", "categories": { "cooking": [
            { "name": "Hearth Oven", "width": 4, "height": 4, "styleTag": "#AA0000",
              "defaultSpecs": { "power": "Wood", "water": "None" } } ] } }"##,
    )
    .unwrap();

    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[canvas]\ndefault_length = 12\ndefault_width = 10\n\n[catalog]\npath = {:?}\n",
            catalog_path.display().to_string()
        ),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let generator = ScriptedGenerator::responding(KITCHEN_ZONES);
    let mut ws = Workspace::from_config("Pizzeria", &config, generator).unwrap();

    assert_eq!(ws.catalog().version(), "2.0");
    assert_eq!(ws.layout().bounds(), CanvasBounds::new(12, 10).unwrap());
    ws.add_catalog_item_named("Hearth Oven").unwrap();
    // "Wood" has no leading number
    assert!((ws.mep_stats().total_power - 1.5).abs() < 1e-9);
}
