//! RGB color handling with hex parsing and serialization.
//!
//! Colors are presentation-only style tags for placed equipment; they carry
//! no layout invariant.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Serialized as `"#RRGGBB"` so catalog files and exported blueprints stay
/// readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use kitchen_planner::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#EF5350").unwrap();
    /// assert_eq!(color, RgbColor::new(0xEF, 0x53, 0x50));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        Self::new(0x9E, 0x9E, 0x9E)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl TryFrom<String> for RgbColor {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_formats() {
        assert_eq!(
            RgbColor::from_hex("#FF0000").unwrap(),
            RgbColor::new(255, 0, 0)
        );
        assert_eq!(
            RgbColor::from_hex("00ff00").unwrap(),
            RgbColor::new(0, 255, 0)
        );
        assert_eq!(
            RgbColor::from_hex("  #0000FF ").unwrap(),
            RgbColor::new(0, 0, 255)
        );
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#FFF").is_err());
        assert!(RgbColor::from_hex("#GGGGGG").is_err());
        assert!(RgbColor::from_hex("#FF00FF00").is_err());
    }

    #[test]
    fn test_to_hex_uppercase() {
        assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&RgbColor::new(255, 167, 38)).unwrap();
        assert_eq!(json, "\"#FFA726\"");

        let parsed: RgbColor = serde_json::from_str("\"#ffa726\"").unwrap();
        assert_eq!(parsed, RgbColor::new(255, 167, 38));

        assert!(serde_json::from_str::<RgbColor>("\"red\"").is_err());
    }
}
