//! Application-wide constants.
//!
//! Grid geometry defaults, placement heuristics and the utility sentinels
//! shared by the planner, the aggregator and the exporter.

/// The display name of the application.
pub const APP_NAME: &str = "Kitchen Planner";

/// Directory name used under the platform config directory.
pub const APP_CONFIG_DIR: &str = "KitchenPlanner";

/// Fallback extent (grid units) for equipment whose size cannot be resolved.
pub const DEFAULT_ITEM_EXTENT: u32 = 3;

/// Number of columns in the scatter grid used around a zone anchor.
pub const SCATTER_COLUMNS: u32 = 3;

/// Spacing (grid units) between scatter grid cells.
pub const SCATTER_SPACING: u32 = 4;

/// Power (kW) counted for a power spec that is present but has no leading number.
pub const POWER_FALLBACK_KW: f64 = 1.5;

/// Utility spec sentinel meaning "no requirement".
pub const SPEC_NONE: &str = "None";

/// Power spec given to generated equipment that did not state one.
pub const DEFAULT_POWER_SPEC: &str = "Standard";

/// Water spec given to generated equipment that did not state one.
pub const DEFAULT_WATER_SPEC: &str = "None";

/// Schema version written into exported documents.
pub const BLUEPRINT_VERSION: &str = "1.0";
