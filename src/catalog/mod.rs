//! Equipment catalog and name resolution.
//!
//! The catalog is static configuration: embedded in the binary as JSON and
//! optionally replaced by a user-supplied file. It is loaded once and passed
//! by reference (or `Arc`) into the resolver and the planner.

pub mod resolver;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::models::{EquipmentCategory, PlacedItem, RgbColor, UtilitySpecs};

pub use resolver::{parse_dimension_hint, resolve_dimensions, resolve_template, Dimensions};

/// Equipment template from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentTemplate {
    /// Display name (e.g., "Reach-in Freezer")
    pub name: String,
    /// Category the template is listed under
    pub category: EquipmentCategory,
    /// Extent along x in grid units
    pub width: u32,
    /// Extent along y in grid units
    pub height: u32,
    /// Presentation color
    pub style_tag: RgbColor,
    /// Utility requirements copied onto new items
    pub default_specs: UtilitySpecs,
}

impl EquipmentTemplate {
    /// Dimensions of the template.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Creates a new placed item from this template at the origin; callers position it.
    #[must_use]
    pub fn instantiate(&self) -> PlacedItem {
        PlacedItem::new(self.name.clone(), self.category, self.width, self.height)
            .with_specs(self.default_specs.clone())
            .with_color(self.style_tag)
    }
}

/// Template entry as written in catalog JSON.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TemplateEntry {
    name: String,
    width: u32,
    height: u32,
    style_tag: RgbColor,
    #[serde(default)]
    default_specs: UtilitySpecs,
}

/// Catalog file schema: category id → ordered template list.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    version: String,
    categories: BTreeMap<String, Vec<TemplateEntry>>,
}

/// Immutable equipment catalog.
///
/// Templates are stored in canonical order: categories in
/// [`EquipmentCategory::ALL`] order, templates in file order within each
/// category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    version: String,
    templates: Vec<EquipmentTemplate>,
}

impl Catalog {
    /// Loads the catalog embedded in the crate.
    pub fn load() -> Result<Self> {
        Self::from_json(include_str!("catalog.json")).context("Failed to parse embedded catalog.json")
    }

    /// Loads a catalog from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
    }

    /// Loads the file at `path` if given, the embedded catalog otherwise.
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load(),
        }
    }

    /// Parses a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json).context("Invalid catalog JSON")?;

        let mut by_category: BTreeMap<EquipmentCategory, Vec<EquipmentTemplate>> = BTreeMap::new();
        for (key, entries) in file.categories {
            let category: EquipmentCategory = key.parse()?;
            let templates = by_category.entry(category).or_default();
            for entry in entries {
                Self::validate_entry(&entry, category)?;
                templates.push(EquipmentTemplate {
                    name: entry.name,
                    category,
                    width: entry.width,
                    height: entry.height,
                    style_tag: entry.style_tag,
                    default_specs: entry.default_specs,
                });
            }
        }

        // BTreeMap iterates in EquipmentCategory's Ord, which is canonical order
        let templates: Vec<EquipmentTemplate> = by_category.into_values().flatten().collect();
        debug!(
            version = %file.version,
            templates = templates.len(),
            "catalog loaded"
        );

        Ok(Self {
            version: file.version,
            templates,
        })
    }

    fn validate_entry(entry: &TemplateEntry, category: EquipmentCategory) -> Result<()> {
        if entry.name.trim().is_empty() {
            anyhow::bail!("Template in category '{}' has an empty name", category.id());
        }

        if entry.width == 0 || entry.height == 0 {
            anyhow::bail!(
                "Template '{}' must have positive dimensions (got {}x{})",
                entry.name,
                entry.width,
                entry.height
            );
        }

        Ok(())
    }

    /// Catalog schema version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// All templates in canonical order.
    #[must_use]
    pub fn templates(&self) -> &[EquipmentTemplate] {
        &self.templates
    }

    /// Templates of one category, in list order.
    pub fn templates_in(
        &self,
        category: EquipmentCategory,
    ) -> impl Iterator<Item = &EquipmentTemplate> {
        self.templates.iter().filter(move |t| t.category == category)
    }

    /// Finds a template by exact name (case-insensitive).
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&EquipmentTemplate> {
        let name = name.trim();
        self.templates
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Total number of templates.
    #[must_use]
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_catalog() -> Catalog {
        Catalog::load().expect("Failed to load embedded catalog")
    }

    #[test]
    fn test_load_embedded() {
        let catalog = get_test_catalog();
        assert_eq!(catalog.version(), "1.0");
        assert!(catalog.template_count() > 20);
        for category in EquipmentCategory::ALL {
            assert!(catalog.templates_in(category).next().is_some());
        }
    }

    #[test]
    fn test_templates_in_canonical_order() {
        let catalog = get_test_catalog();
        let categories: Vec<EquipmentCategory> =
            catalog.templates().iter().map(|t| t.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        assert_eq!(catalog.templates()[0].name, "4-Burner Range");
    }

    #[test]
    fn test_find_case_insensitive() {
        let catalog = get_test_catalog();
        let freezer = catalog.find("reach-in freezer").unwrap();
        assert_eq!(freezer.name, "Reach-in Freezer");
        assert_eq!(freezer.category, EquipmentCategory::Refrigeration);
        assert_eq!(freezer.dimensions(), Dimensions::new(3, 3));
        assert!(catalog.find("Reach-in").is_none());
    }

    #[test]
    fn test_instantiate_copies_template() {
        let catalog = get_test_catalog();
        let grill = catalog.find("Grill / Plancha").unwrap();
        let item = grill.instantiate();
        assert_eq!(item.name, "Grill / Plancha");
        assert_eq!((item.width, item.height), (3, 2));
        assert_eq!(item.color, grill.style_tag);
        assert_eq!(item.specs, grill.default_specs);
    }

    #[test]
    fn test_file_order_kept_within_category() {
        let json = r##"{
            "version": "2",
            "categories": {
                "washing": [
                    { "name": "Zeta Sink", "width": 2, "height": 2, "styleTag": "#00FFFF" },
                    { "name": "Alpha Sink", "width": 2, "height": 2, "styleTag": "#00FFFF" }
                ],
                "cooking": [
                    { "name": "Hob", "width": 2, "height": 2, "styleTag": "#FF0000" }
                ]
            }
        }"##;
        let catalog = Catalog::from_json(json).unwrap();
        let names: Vec<&str> = catalog.templates().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Hob", "Zeta Sink", "Alpha Sink"]);
    }

    #[test]
    fn test_rejects_invalid_entries() {
        let zero = r##"{"version":"1","categories":{"prep":[
            {"name":"Flat","width":0,"height":2,"styleTag":"#FFFFFF"}]}}"##;
        assert!(Catalog::from_json(zero).is_err());

        let unknown = r##"{"version":"1","categories":{"bakery":[
            {"name":"Deck Oven","width":4,"height":3,"styleTag":"#FFFFFF"}]}}"##;
        assert!(Catalog::from_json(unknown).is_err());

        let bad_color = r##"{"version":"1","categories":{"prep":[
            {"name":"Table","width":4,"height":3,"styleTag":"white"}]}}"##;
        assert!(Catalog::from_json(bad_color).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(
            &path,
            r##"{"version":"custom","categories":{"service":[
                {"name":"Expo Shelf","width":5,"height":1,"styleTag":"#FFA726"}]}}"##,
        )
        .unwrap();

        let catalog = Catalog::load_or_embedded(Some(&path)).unwrap();
        assert_eq!(catalog.version(), "custom");
        assert_eq!(catalog.template_count(), 1);

        assert!(Catalog::load_from_file(&dir.path().join("missing.json")).is_err());
    }
}
