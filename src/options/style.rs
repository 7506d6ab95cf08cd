use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Widest accepted arc sweep, one full turn.
pub const MAX_DEGREES: f32 = 360.0;

/// `#3F51B5`
const INDIGO: [f32; 3] = [0.247, 0.318, 0.710];
/// `#BDBDBD`
const LIGHT_GRAY: [f32; 3] = [0.741, 0.741, 0.741];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Style", inline)]
#[serde(default)]
/// Node sizing and palette.
pub struct StyleOptions {
    /// Line width is `min(width, height) / stroke_factor`.
    #[schemars(title = "Stroke Factor")]
    pub stroke_factor: f32,
    /// Block half-extent and arc radius are `gap / size_factor`, where `gap`
    /// is the horizontal spacing between nodes.
    #[schemars(title = "Size Factor")]
    pub size_factor: f32,
    /// Arc sweep in degrees at the peak of a unit of motion.
    #[schemars(title = "Max Degrees", range(min = 0.0, max = 360.0), extend("step" = 1.0))]
    pub max_degrees: f32,
    /// RGB color of every node shape.
    #[schemars(skip)]
    pub fore_color: [f32; 3],
    /// RGB background fill.
    #[schemars(skip)]
    pub back_color: [f32; 3],
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            stroke_factor: 90.0,
            size_factor: 2.9,
            max_degrees: 180.0,
            fore_color: INDIGO,
            back_color: LIGHT_GRAY,
        }
    }
}
