//! AI-generated zone descriptions.
//!
//! These types mirror the response of the layout generation collaborator:
//!
//! ```json
//! { "zones": [ { "name": "Hot Line",
//!                "required_equipment": [ { "name": "4-Burner Range",
//!                                          "power_rating": "3kW Gas",
//!                                          "water_connection": "None",
//!                                          "dimensions": "3x3" } ] } ] }
//! ```

use serde::{Deserialize, Serialize};

/// A piece of equipment a zone asks for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequiredEquipment {
    /// Free-text equipment name
    pub name: String,
    /// Free-text power requirement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_rating: Option<String>,
    /// Free-text water requirement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_connection: Option<String>,
    /// Size hint such as "4x3"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

impl RequiredEquipment {
    /// Creates an entry with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A functional kitchen zone with its equipment list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Zone {
    /// Free-text zone name (e.g., "Cold Storage")
    pub name: String,
    /// Equipment in list order
    #[serde(default)]
    pub required_equipment: Vec<RequiredEquipment>,
}

impl Zone {
    /// Creates a zone.
    pub fn new(name: impl Into<String>, required_equipment: Vec<RequiredEquipment>) -> Self {
        Self {
            name: name.into(),
            required_equipment,
        }
    }
}

/// Full generation response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneratedLayout {
    /// Zones in response order
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl GeneratedLayout {
    /// Parses a response body, unwrapping a Markdown code fence if present.
    pub fn from_response(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(strip_code_fence(body))
    }

    /// Total equipment entries across all zones.
    #[must_use]
    pub fn equipment_count(&self) -> usize {
        self.zones.iter().map(|z| z.required_equipment.len()).sum()
    }
}

/// Returns the body of a ```` ```json ... ``` ```` fence, or the trimmed input.
fn strip_code_fence(body: &str) -> &str {
    let trimmed = body.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line
    let rest = rest.split_once('\n').map_or("", |(_, after)| after);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
