//! MEP (power and water) totals for a set of placed items.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::POWER_FALLBACK_KW;
use crate::models::PlacedItem;

/// Leading decimal number of a power string ("3kW Gas" -> 3).
/// Fixed literal, compiled on first use.
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)").expect("leading number pattern is a valid literal")
});

/// Aggregated utility requirements.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MepStats {
    /// Sum of parsed kW across items with a power requirement
    pub total_power: f64,
    /// Number of items with a water requirement
    pub water_points: usize,
}

impl MepStats {
    /// Computes totals over `items`.
    ///
    /// Power strings contribute their leading number; a power requirement
    /// without one (e.g. "Standard") contributes a fixed 1.5 kW. Missing
    /// specs and the "None" sentinel contribute nothing.
    #[must_use]
    pub fn from_items(items: &[PlacedItem]) -> Self {
        items.iter().fold(Self::default(), |mut stats, item| {
            if let Some(power) = item.specs.power_requirement() {
                stats.total_power += parse_power_kw(power);
            }
            if item.specs.water_requirement().is_some() {
                stats.water_points += 1;
            }
            stats
        })
    }
}

/// Parses the leading kW figure of a power string, falling back to 1.5.
#[must_use]
pub fn parse_power_kw(power: &str) -> f64 {
    LEADING_NUMBER
        .captures(power)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(POWER_FALLBACK_KW)
}
