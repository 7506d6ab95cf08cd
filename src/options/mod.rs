//! Animation and style options with TOML preset support.
//!
//! Every tweakable constant (chain length, step size, tick period, sizing
//! factors, colors) lives here and is handed to the renderer at
//! construction. Options serialize to/from TOML so presets can be kept in
//! `assets/presets/`.

mod style;
mod sweep;

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use style::{StyleOptions, MAX_DEGREES};
pub use sweep::{SweepOptions, MIN_STEP};

use crate::error::ArcSweepError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[sweep]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Chain length and animation timing.
    pub sweep: SweepOptions,
    /// Node sizing and colors.
    pub style: StyleOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ArcSweepError::Io`] if the file cannot be read and
    /// [`ArcSweepError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, ArcSweepError> {
        let content = std::fs::read_to_string(path).map_err(ArcSweepError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ArcSweepError::OptionsParse`] on malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, ArcSweepError> {
        toml::from_str(content)
            .map_err(|e| ArcSweepError::OptionsParse(e.to_string()))
    }

    /// Check that the options describe a runnable animation.
    ///
    /// # Errors
    ///
    /// Returns [`ArcSweepError::InvalidOptions`] naming the first offending
    /// field.
    pub fn validate(&self) -> Result<(), ArcSweepError> {
        let sweep = &self.sweep;
        let style = &self.style;
        if sweep.node_count == 0 {
            return Err(invalid("sweep.node_count must be at least 1"));
        }
        if !(MIN_STEP..=1.0).contains(&sweep.step) {
            return Err(invalid("sweep.step must be in [0.001, 1]"));
        }
        if sweep.tick_period_ms == 0 {
            return Err(invalid("sweep.tick_period_ms must be at least 1"));
        }
        if !positive(style.stroke_factor) {
            return Err(invalid("style.stroke_factor must be positive"));
        }
        if !positive(style.size_factor) {
            return Err(invalid("style.size_factor must be positive"));
        }
        if !(0.0..=MAX_DEGREES).contains(&style.max_degrees) {
            return Err(invalid("style.max_degrees must be in [0, 360]"));
        }
        Ok(())
    }
}

/// Finite and strictly greater than zero.
fn positive(x: f32) -> bool {
    x.is_finite() && x > 0.0
}

fn invalid(msg: &str) -> ArcSweepError {
    ArcSweepError::InvalidOptions(msg.to_owned())
}
