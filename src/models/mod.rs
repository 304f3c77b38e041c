//! Data models for the kitchen grid.
//!
//! This module contains the spatial model and the entities placed on it.
//! Models are independent of UI, catalog and generation logic.

pub mod canvas;
pub mod category;
pub mod item;
pub mod layout;
pub mod rgb;
pub mod zone;

// Re-export all model types
pub use canvas::CanvasBounds;
pub use category::EquipmentCategory;
pub use item::{ItemPatch, PlacedItem, Rotation, UtilitySpecs};
pub use layout::{KitchenLayout, LayoutMetadata};
pub use rgb::RgbColor;
pub use zone::{GeneratedLayout, RequiredEquipment, Zone};
