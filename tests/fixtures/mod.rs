//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use kitchen_planner::catalog::Catalog;
use kitchen_planner::config::Config;
use kitchen_planner::models::{CanvasBounds, KitchenLayout};
use kitchen_planner::services::{AutoLayoutRequest, LayoutGenerator};
use kitchen_planner::Workspace;

/// Zone list from the reference scenario: a freezer in cold storage plus a
/// range and a grill on the hot line.
pub const KITCHEN_ZONES: &str = r#"{
  "zones": [
    { "name": "Cold Storage",
      "required_equipment": [ { "name": "Reach-in Freezer" } ] },
    { "name": "Hot Line",
      "required_equipment": [ { "name": "4-Burner Range" }, { "name": "Grill / Plancha" } ] }
  ]
}"#;

/// Generator returning a fixed body (or error) after an optional delay.
pub struct ScriptedGenerator {
    body: Result<String, String>,
    delay: Duration,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    /// Answers with `body`.
    pub fn responding(body: &str) -> Arc<Self> {
        Arc::new(Self {
            body: Ok(body.to_string()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        })
    }

    /// Answers with `body` after `delay`.
    pub fn slow(body: &str, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            body: Ok(body.to_string()),
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    /// Fails with `message`.
    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            body: Err(message.to_string()),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
        })
    }

    /// Number of generate calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LayoutGenerator for ScriptedGenerator {
    fn generate(&self, _request: &AutoLayoutRequest) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        thread::sleep(self.delay);
        self.body.clone().map_err(|e| anyhow::anyhow!(e))
    }
}

/// A valid auto-layout request.
pub fn italian_request() -> AutoLayoutRequest {
    AutoLayoutRequest::new("Italian", "Commercial Line", 600.0, "Efficiency")
}

/// The embedded catalog.
pub fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::load().unwrap())
}

/// An empty layout of the given size.
pub fn empty_layout(length: u32, width: u32) -> KitchenLayout {
    KitchenLayout::new("Test Kitchen", CanvasBounds::new(length, width).unwrap()).unwrap()
}

/// A default-config workspace on a `length` x `width` canvas.
pub fn workspace(generator: Arc<ScriptedGenerator>, length: u32, width: u32) -> Workspace {
    let mut config = Config::default();
    config.canvas.default_length = length;
    config.canvas.default_width = width;
    Workspace::new("Test Kitchen", &config, catalog(), generator).unwrap()
}
