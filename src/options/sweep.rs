use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Smallest accepted [`SweepOptions::step`]. Below this, f32 rounding can
/// swallow the step before the scale reaches 1 and a unit never completes.
pub const MIN_STEP: f32 = 0.001;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Sweep", inline)]
#[serde(default)]
/// Animation timing and chain length.
pub struct SweepOptions {
    /// Number of nodes in the chain. Fixed for the lifetime of a sweep.
    #[schemars(title = "Node Count", range(min = 1))]
    pub node_count: usize,
    /// Scale change applied to the moving node on every tick.
    #[schemars(title = "Step", range(min = 0.001, max = 1.0), extend("step" = 0.005))]
    pub step: f32,
    /// Milliseconds between animation ticks.
    #[schemars(title = "Tick Period (ms)", range(min = 1))]
    pub tick_period_ms: u64,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            node_count: 5,
            step: 0.02,
            tick_period_ms: 20,
        }
    }
}

impl SweepOptions {
    /// Tick period as a [`Duration`].
    #[must_use]
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }
}
