//! Per-node scale state.

/// Direction of travel: along the chain, or along a node's scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Toward higher indices / growing scale (+1).
    Forward,
    /// Toward lower indices / shrinking scale (-1).
    Backward,
}

impl Heading {
    /// +1.0 or -1.0.
    #[inline]
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// The opposite heading.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }

    /// Heading that leaves `settled` toward the opposite extreme: forward
    /// from 0, backward from 1.
    fn away_from(settled: f32) -> Self {
        if 1.0 - 2.0 * settled > 0.0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }
}

/// Scale of a single node.
///
/// Holds the current scale, the direction it is moving in (`None` while at
/// rest) and the value it last settled at, always 0 or 1. While idle,
/// `scale == settled`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleState {
    scale: f32,
    direction: Option<Heading>,
    settled: f32,
    step: f32,
}

impl ScaleState {
    /// Idle state resting at 0, moving `step` per tick once started.
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self {
            scale: 0.0,
            direction: None,
            settled: 0.0,
            step,
        }
    }

    /// Current scale. May overshoot [0, 1] slightly mid-tick.
    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Direction of motion, `None` while at rest.
    #[must_use]
    pub fn direction(&self) -> Option<Heading> {
        self.direction
    }

    /// Last value the scale came to rest at.
    #[must_use]
    pub fn settled(&self) -> f32 {
        self.settled
    }

    /// Whether the node is at rest.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.direction.is_none()
    }

    /// Move the scale one step in its current direction.
    ///
    /// Returns `true` exactly on the tick a unit of motion completes: the
    /// scale has travelled more than 1 from `settled`, is snapped to
    /// `settled ± 1`, and the node goes idle. Does nothing while idle.
    pub fn advance(&mut self) -> bool {
        let Some(dir) = self.direction else {
            return false;
        };
        self.scale += dir.sign() * self.step;
        if (self.scale - self.settled).abs() > 1.0 {
            self.scale = self.settled + dir.sign();
            self.direction = None;
            self.settled = self.scale;
            return true;
        }
        false
    }

    /// Start a unit of motion away from the settled value.
    ///
    /// Returns `false`, leaving the state untouched, if already moving.
    pub fn begin_motion(&mut self) -> bool {
        if self.direction.is_some() {
            return false;
        }
        self.direction = Some(Heading::away_from(self.settled));
        true
    }
}
