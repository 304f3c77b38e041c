//! AI auto-layout requests.
//!
//! The runner dispatches one request at a time to a [`LayoutGenerator`] on a
//! worker thread and hands the response back over an mpsc channel. The
//! interaction thread never blocks on the generator: it calls
//! [`AutoLayoutRunner::poll`] from its event loop (or [`AutoLayoutRunner::wait`]
//! when blocking is acceptable).
//!
//! ## Lifecycle
//!
//! 1. `start`: single-flight check, request validation, credit deduction,
//!    dispatch. Any failure here returns before anything is sent.
//! 2. `poll`/`wait`: once the response arrives it is parsed, planned against
//!    the layout's current bounds and swapped in with
//!    [`KitchenLayout::replace_items`]. Every failure leaves the layout
//!    untouched.
//! 3. A response arriving after the timeout is dropped with its channel.

use std::fmt;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::AutoLayoutConfig;
use crate::models::{GeneratedLayout, KitchenLayout};
use crate::services::planner::ZoneLayoutPlanner;

/// Auto-layout failures.
///
/// Each variant is a distinct outcome the caller can branch on; in every case
/// the layout is left as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AutoLayoutError {
    /// Another request is still in flight
    #[error("an auto-layout request is already in progress")]
    AlreadyInFlight,

    /// Request rejected before dispatch
    #[error("invalid auto-layout request: {0}")]
    InvalidRequest(String),

    /// Credit deduction refused
    #[error("insufficient credits: {required} required")]
    InsufficientCredits {
        /// Credits the request costs
        required: u32,
    },

    /// The generator failed or went away
    #[error("layout generation failed: {0}")]
    Transport(String),

    /// The generator answered with something that isn't a zone list
    #[error("malformed layout response: {0}")]
    MalformedResponse(String),

    /// No response within the configured window
    #[error("layout generation timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The response parsed but contained no equipment
    #[error("layout generation produced no equipment")]
    NothingGenerated,
}

/// Parameters for the generation collaborator.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoLayoutRequest {
    /// Cuisine served (e.g., "Italian")
    pub cuisine: String,
    /// Kitchen style (e.g., "Commercial Line")
    pub kitchen_type: String,
    /// Floor area in square feet
    pub area_sq_ft: f64,
    /// Free-text optimization goal (e.g., "Efficiency")
    pub optimization_hint: String,
    /// Optional floor sketch image bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_sketch_image: Option<Vec<u8>>,
}

impl fmt::Debug for AutoLayoutRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoLayoutRequest")
            .field("cuisine", &self.cuisine)
            .field("kitchen_type", &self.kitchen_type)
            .field("area_sq_ft", &self.area_sq_ft)
            .field("optimization_hint", &self.optimization_hint)
            .field(
                "reference_sketch_image",
                &self.reference_sketch_image.as_ref().map(Vec::len),
            )
            .finish()
    }
}

impl AutoLayoutRequest {
    /// Creates a request without a sketch.
    pub fn new(
        cuisine: impl Into<String>,
        kitchen_type: impl Into<String>,
        area_sq_ft: f64,
        optimization_hint: impl Into<String>,
    ) -> Self {
        Self {
            cuisine: cuisine.into(),
            kitchen_type: kitchen_type.into(),
            area_sq_ft,
            optimization_hint: optimization_hint.into(),
            reference_sketch_image: None,
        }
    }

    /// Attaches a sketch image.
    #[must_use]
    pub fn with_sketch(mut self, image: Vec<u8>) -> Self {
        self.reference_sketch_image = Some(image);
        self
    }

    /// Checks the request before any credits are spent.
    ///
    /// # Validation
    ///
    /// - `cuisine` and `kitchen_type` must not be blank
    /// - `area_sq_ft` must be a positive finite number
    pub fn validate(&self) -> Result<(), AutoLayoutError> {
        if self.cuisine.trim().is_empty() {
            return Err(AutoLayoutError::InvalidRequest(
                "cuisine cannot be empty".to_string(),
            ));
        }
        if self.kitchen_type.trim().is_empty() {
            return Err(AutoLayoutError::InvalidRequest(
                "kitchen type cannot be empty".to_string(),
            ));
        }
        if !self.area_sq_ft.is_finite() || self.area_sq_ft <= 0.0 {
            return Err(AutoLayoutError::InvalidRequest(format!(
                "area must be a positive number of square feet (got {})",
                self.area_sq_ft
            )));
        }
        Ok(())
    }
}

/// The external generation collaborator.
///
/// Implementations return the raw response body: a JSON zone list, optionally
/// wrapped in a Markdown code fence. Called on a worker thread.
pub trait LayoutGenerator: Send + Sync {
    /// Generates zones for a request.
    fn generate(&self, request: &AutoLayoutRequest) -> anyhow::Result<String>;
}

/// The credit/billing collaborator.
pub trait CreditLedger {
    /// Deducts `amount` credits; `false` when the balance is insufficient.
    fn deduct(&mut self, amount: u32) -> bool;
}

/// In-memory credit balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CreditBalance {
    remaining: u32,
}

impl CreditBalance {
    /// Creates a balance.
    #[must_use]
    pub const fn new(remaining: u32) -> Self {
        Self { remaining }
    }

    /// Credits left.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }
}

impl CreditLedger for CreditBalance {
    fn deduct(&mut self, amount: u32) -> bool {
        match self.remaining.checked_sub(amount) {
            Some(left) => {
                self.remaining = left;
                true
            }
            None => false,
        }
    }
}

/// A dispatched request awaiting its response.
struct PendingRequest {
    rx: Receiver<anyhow::Result<String>>,
    dispatched: Instant,
}

/// Single-flight auto-layout driver.
pub struct AutoLayoutRunner {
    generator: Arc<dyn LayoutGenerator>,
    catalog: Arc<Catalog>,
    config: AutoLayoutConfig,
    pending: Option<PendingRequest>,
}

impl fmt::Debug for AutoLayoutRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoLayoutRunner")
            .field("config", &self.config)
            .field("in_flight", &self.is_in_flight())
            .finish_non_exhaustive()
    }
}

impl AutoLayoutRunner {
    /// Creates an idle runner.
    pub fn new(
        generator: Arc<dyn LayoutGenerator>,
        catalog: Arc<Catalog>,
        config: AutoLayoutConfig,
    ) -> Self {
        Self {
            generator,
            catalog,
            config,
            pending: None,
        }
    }

    /// Whether a request is awaiting its response.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Validates, charges and dispatches a request.
    ///
    /// Credits are only deducted once the request is valid and no other
    /// request is in flight.
    pub fn start(
        &mut self,
        request: AutoLayoutRequest,
        ledger: &mut dyn CreditLedger,
    ) -> Result<(), AutoLayoutError> {
        if self.pending.is_some() {
            return Err(AutoLayoutError::AlreadyInFlight);
        }
        request.validate()?;

        let cost = self.config.credit_cost;
        if !ledger.deduct(cost) {
            warn!(required = cost, "auto-layout rejected: insufficient credits");
            return Err(AutoLayoutError::InsufficientCredits { required: cost });
        }

        info!(
            cuisine = %request.cuisine,
            kitchen_type = %request.kitchen_type,
            area_sq_ft = request.area_sq_ft,
            "auto-layout dispatched"
        );

        let (tx, rx) = mpsc::channel();
        let generator = Arc::clone(&self.generator);
        thread::spawn(move || {
            let result = generator.generate(&request);
            // Receiver is gone after a timeout; the late result is dropped
            let _ = tx.send(result);
        });

        self.pending = Some(PendingRequest {
            rx,
            dispatched: Instant::now(),
        });
        Ok(())
    }

    /// Non-blocking check for a finished request.
    ///
    /// Returns `None` while idle or still waiting. `Some(Ok(n))` means the
    /// layout's items were replaced with `n` new ones.
    pub fn poll(&mut self, layout: &mut KitchenLayout) -> Option<Result<usize, AutoLayoutError>> {
        // Past the deadline any response, queued or not, is discarded
        if let Some(timed_out) = self.expire_if_overdue() {
            return Some(timed_out);
        }
        let pending = self.pending.as_ref()?;

        match pending.rx.try_recv() {
            Ok(response) => {
                self.pending = None;
                Some(self.apply(response, layout))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                Some(Err(worker_exited()))
            }
        }
    }

    /// Blocks until the in-flight request finishes or times out.
    ///
    /// Returns `None` when nothing is in flight.
    pub fn wait(&mut self, layout: &mut KitchenLayout) -> Option<Result<usize, AutoLayoutError>> {
        if let Some(timed_out) = self.expire_if_overdue() {
            return Some(timed_out);
        }
        let pending = self.pending.take()?;
        let timeout = self.config.timeout();
        let remaining = timeout.saturating_sub(pending.dispatched.elapsed());

        let outcome = match pending.rx.recv_timeout(remaining) {
            Ok(response) => self.apply(response, layout),
            Err(RecvTimeoutError::Timeout) => {
                warn!(timeout_secs = timeout.as_secs(), "auto-layout timed out");
                Err(AutoLayoutError::Timeout(timeout))
            }
            Err(RecvTimeoutError::Disconnected) => Err(worker_exited()),
        };
        Some(outcome)
    }

    /// Drops the in-flight request once its deadline has passed.
    fn expire_if_overdue(&mut self) -> Option<Result<usize, AutoLayoutError>> {
        let timeout = self.config.timeout();
        let overdue = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.dispatched.elapsed() >= timeout);
        if !overdue {
            return None;
        }

        self.pending = None;
        warn!(timeout_secs = timeout.as_secs(), "auto-layout timed out");
        Some(Err(AutoLayoutError::Timeout(timeout)))
    }

    /// Turns a response into items and swaps them in, or leaves the layout alone.
    fn apply(
        &self,
        response: anyhow::Result<String>,
        layout: &mut KitchenLayout,
    ) -> Result<usize, AutoLayoutError> {
        let outcome = response
            .map_err(|e| AutoLayoutError::Transport(format!("{e:#}")))
            .and_then(|body| {
                GeneratedLayout::from_response(&body)
                    .map_err(|e| AutoLayoutError::MalformedResponse(e.to_string()))
            })
            .and_then(|generated| {
                debug!(
                    zones = generated.zones.len(),
                    equipment = generated.equipment_count(),
                    "auto-layout response parsed"
                );
                ZoneLayoutPlanner::new(&self.catalog).plan(&generated.zones, layout.bounds())
            });

        match outcome {
            Ok(items) => {
                let count = items.len();
                layout.replace_items(items);
                info!(items = count, "auto-layout applied");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "auto-layout failed; layout unchanged");
                Err(e)
            }
        }
    }
}

fn worker_exited() -> AutoLayoutError {
    AutoLayoutError::Transport("generator worker exited without a response".to_string())
}
