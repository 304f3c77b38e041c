//! Equipment categories.

use crate::models::RgbColor;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Functional category of a piece of kitchen equipment.
///
/// Declaration order is the canonical order used when resolving free-text
/// equipment names against the catalog, so `Ord` follows it too.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentCategory {
    /// Ranges, ovens, fryers, grills
    Cooking,
    /// Walk-ins, reach-ins, freezers
    Refrigeration,
    /// Prep tables, mixers, slicers
    #[default]
    Prep,
    /// Sinks, dishwashers
    Washing,
    /// Pass, heat lamps, POS
    Service,
    /// Shelving, tables, carts
    Furniture,
}

impl EquipmentCategory {
    /// All categories in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Cooking,
        Self::Refrigeration,
        Self::Prep,
        Self::Washing,
        Self::Service,
        Self::Furniture,
    ];

    /// Lowercase identifier used in catalog files and exports.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Cooking => "cooking",
            Self::Refrigeration => "refrigeration",
            Self::Prep => "prep",
            Self::Washing => "washing",
            Self::Service => "service",
            Self::Furniture => "furniture",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cooking => "Cooking",
            Self::Refrigeration => "Refrigeration",
            Self::Prep => "Prep",
            Self::Washing => "Washing",
            Self::Service => "Service",
            Self::Furniture => "Furniture",
        }
    }

    /// Palette color used for items that have no template color.
    #[must_use]
    pub const fn default_color(self) -> RgbColor {
        match self {
            Self::Cooking => RgbColor::new(0xEF, 0x53, 0x50),
            Self::Refrigeration => RgbColor::new(0x42, 0xA5, 0xF5),
            Self::Prep => RgbColor::new(0x66, 0xBB, 0x6A),
            Self::Washing => RgbColor::new(0x26, 0xC6, 0xDA),
            Self::Service => RgbColor::new(0xFF, 0xA7, 0x26),
            Self::Furniture => RgbColor::new(0x8D, 0x6E, 0x63),
        }
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for EquipmentCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.id() == needle)
            .ok_or_else(|| anyhow::anyhow!("Unknown equipment category '{s}'"))
    }
}
