//! Service layer for layout logic.
//!
//! Services operate on the models in [`crate::models`]: pointer interaction,
//! zone planning, utility totals and the AI auto-layout runner.

pub mod auto_layout;
pub mod interaction;
pub mod planner;
pub mod utilities;

// Re-export commonly used types and functions
pub use auto_layout::{
    AutoLayoutError, AutoLayoutRequest, AutoLayoutRunner, CreditBalance, CreditLedger,
    LayoutGenerator,
};
pub use interaction::{CanvasPoint, DragState, InteractionController};
pub use planner::{ZoneAnchor, ZoneLayoutPlanner};
pub use utilities::{parse_power_kw, MepStats};
