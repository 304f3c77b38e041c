//! Kitchen Planner Library
//!
//! Core of the kitchen equipment layout engine: a bounded grid of placed
//! equipment, pointer-driven editing, catalog name matching, AI zone
//! auto-layout and blueprint export.

// Module declarations
pub mod catalog;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
pub mod workspace;

pub use workspace::Workspace;
