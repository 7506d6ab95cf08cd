//! Scale helpers shared by the animation and drawing code.
//!
//! A node's scale is a linear progress value; drawing runs it through
//! [`sinify`] so every shape rises and falls back within one unit of motion.

use std::f32::consts::PI;

/// Half-sine easing: `sin(x·π)`.
///
/// Maps linear progress in [0, 1] onto a rise-and-fall curve that is 0 at
/// both ends and peaks at 1 when `x = 0.5`.
#[inline]
#[must_use]
pub fn sinify(x: f32) -> f32 {
    (x * PI).sin()
}

/// Progress of `scale` past the start of segment `i` out of `n`, floored at 0.
#[inline]
#[must_use]
pub fn max_scale(scale: f32, i: usize, n: usize) -> f32 {
    (scale - i as f32 / n as f32).max(0.0)
}

/// Per-segment progress fraction in [0, 1].
///
/// A global `scale` in [0, 1] is split into `n` equal segments; the result
/// is how far segment `i` has progressed, clamped to the segment width and
/// rescaled so a finished segment reads 1.
#[inline]
#[must_use]
pub fn divide_scale(scale: f32, i: usize, n: usize) -> f32 {
    let width = 1.0 / n as f32;
    max_scale(scale, i, n).min(width) * n as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinify_endpoints_and_peak() {
        assert!(sinify(0.0).abs() < 1e-6);
        assert!((sinify(0.5) - 1.0).abs() < 1e-6);
        assert!(sinify(1.0).abs() < 1e-6);
    }

    #[test]
    fn sinify_is_symmetric() {
        for x in [0.1, 0.2, 0.3, 0.45] {
            assert!((sinify(x) - sinify(1.0 - x)).abs() < 1e-5, "x = {x}");
        }
    }

    #[test]
    fn max_scale_floors_at_zero() {
        assert_eq!(max_scale(0.1, 2, 4), 0.0);
        assert!((max_scale(0.75, 2, 4) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn divide_scale_segments() {
        // Segment 1 of 4 covers [0.25, 0.5).
        assert_eq!(divide_scale(0.2, 1, 4), 0.0);
        assert!((divide_scale(0.375, 1, 4) - 0.5).abs() < 1e-6);
        assert!((divide_scale(0.9, 1, 4) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn divide_scale_single_segment_is_identity() {
        assert!((divide_scale(0.3, 0, 1) - 0.3).abs() < 1e-6);
        assert!((divide_scale(1.0, 0, 1) - 1.0).abs() < 1e-6);
    }
}
