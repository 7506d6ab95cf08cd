//! Node geometry: block, line and arc for one node at a given scale.

use glam::Vec2;

use super::canvas::Canvas;
use crate::{
    options::{StyleOptions, MAX_DEGREES},
    util::scale::sinify,
};

/// Per-frame sizing derived from the surface size and node count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeLayout {
    /// Horizontal spacing between node centers.
    pub gap: f32,
    /// Block half-extent and arc radius.
    pub size: f32,
    /// Line width.
    pub stroke: f32,
    /// Surface height.
    pub height: f32,
}

impl NodeLayout {
    /// Layout for `node_count` nodes spread across `surface`.
    #[must_use]
    pub fn new(surface: Vec2, node_count: usize, style: &StyleOptions) -> Self {
        let gap = surface.x / (node_count + 1) as f32;
        Self {
            gap,
            size: gap / style.size_factor,
            stroke: surface.x.min(surface.y) / style.stroke_factor,
            height: surface.y,
        }
    }

    /// Resting center of node `index`.
    #[must_use]
    pub fn center(&self, index: usize) -> Vec2 {
        Vec2::new(self.gap * (index + 1) as f32, self.height / 2.0)
    }
}

/// Fill the surface with the background color.
pub fn clear_background<C: Canvas + ?Sized>(canvas: &mut C, style: &StyleOptions) {
    canvas.clear(style.back_color);
}

/// Draw node `index` at `scale`.
///
/// The block lifts toward the top edge and the arc opens up to
/// `max_degrees`, both following [`sinify`] so they return to rest at
/// either end of a unit of motion. The line does not move.
pub fn draw_node<C: Canvas + ?Sized>(
    canvas: &mut C,
    layout: &NodeLayout,
    style: &StyleOptions,
    index: usize,
    scale: f32,
) {
    let center = layout.center(index);
    let size = layout.size;
    let sf = sinify(scale);
    let color = style.fore_color;

    let lift = -(layout.height / 2.0 - size) * sf;
    let block_center = center + Vec2::new(0.0, lift);
    canvas.fill_rect(
        block_center - Vec2::splat(size),
        block_center + Vec2::splat(size),
        color,
    );

    canvas.stroke_line(
        center - Vec2::new(size, 0.0),
        center + Vec2::new(size, 0.0),
        layout.stroke,
        color,
    );

    let points = arc_fan(center, size, style.max_degrees * sf);
    if points.len() >= 3 {
        canvas.fill_polygon(&points, color);
    }
}

/// Fan outline: the center followed by one rim point per whole degree in
/// `0..=degrees`, with `degrees` clamped to one full turn.
fn arc_fan(center: Vec2, radius: f32, degrees: f32) -> Vec<Vec2> {
    let steps = degrees.clamp(0.0, MAX_DEGREES).floor() as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    points.extend((0..=steps).map(|deg| {
        center + Vec2::from_angle((deg as f32).to_radians()) * radius
    }));
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::canvas::{DisplayList, DrawCommand};

    fn layout() -> (NodeLayout, StyleOptions) {
        let style = StyleOptions::default();
        (NodeLayout::new(Vec2::new(600.0, 400.0), 5, &style), style)
    }

    #[test]
    fn layout_spacing() {
        let (layout, style) = layout();
        assert!((layout.gap - 100.0).abs() < 1e-4);
        assert!((layout.size - 100.0 / style.size_factor).abs() < 1e-4);
        assert!((layout.stroke - 400.0 / 90.0).abs() < 1e-4);
        assert_eq!(layout.center(0), Vec2::new(100.0, 200.0));
        assert_eq!(layout.center(4), Vec2::new(500.0, 200.0));
    }

    #[test]
    fn node_at_rest_skips_arc() {
        let (layout, style) = layout();
        let mut list = DisplayList::new(600.0, 400.0);
        draw_node(&mut list, &layout, &style, 0, 0.0);

        assert_eq!(list.len(), 2);
        let DrawCommand::FillRect { min, max, .. } = &list.commands()[0]
        else {
            panic!("expected block first");
        };
        // Block sits on the line at rest.
        assert!(((*min + *max) / 2.0 - layout.center(0)).length() < 1e-4);
        assert!(matches!(list.commands()[1], DrawCommand::StrokeLine { .. }));
    }

    #[test]
    fn node_at_peak_lifts_block_and_opens_arc() {
        let (layout, style) = layout();
        let mut list = DisplayList::new(600.0, 400.0);
        draw_node(&mut list, &layout, &style, 2, 0.5);

        assert_eq!(list.len(), 3);
        let DrawCommand::FillRect { min, .. } = &list.commands()[0] else {
            panic!("expected block first");
        };
        // Fully lifted: top edge reaches the top of the surface.
        assert!(min.y.abs() < 1e-3, "top edge at {}", min.y);

        let DrawCommand::FillPolygon { points, .. } = &list.commands()[2]
        else {
            panic!("expected arc last");
        };
        // Center plus roughly 0..=180 degrees.
        assert!((181..=182).contains(&points.len()), "{}", points.len());
        assert_eq!(points[0], layout.center(2));
        let last = points[points.len() - 1] - layout.center(2);
        assert!(last.x < -0.99 * layout.size);
    }

    #[test]
    fn arc_fan_radius() {
        let points = arc_fan(Vec2::new(10.0, 10.0), 5.0, 90.0);
        assert_eq!(points.len(), 92);
        for p in &points[1..] {
            assert!(((*p - Vec2::new(10.0, 10.0)).length() - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn arc_fan_stops_at_a_full_turn() {
        let center = Vec2::new(10.0, 10.0);
        assert_eq!(arc_fan(center, 5.0, 1e30).len(), 362);
        assert_eq!(arc_fan(center, 5.0, f32::INFINITY).len(), 362);
        assert_eq!(arc_fan(center, 5.0, -30.0).len(), 2);
    }

    #[test]
    fn oversized_max_degrees_still_draws() {
        let (layout, mut style) = layout();
        style.max_degrees = 1e30;
        let mut list = DisplayList::new(600.0, 400.0);
        draw_node(&mut list, &layout, &style, 1, 0.5);

        let DrawCommand::FillPolygon { points, .. } = &list.commands()[2]
        else {
            panic!("expected arc last");
        };
        assert_eq!(points.len(), 362);
    }

    #[test]
    fn clear_uses_background() {
        let (_, style) = layout();
        let mut list = DisplayList::new(10.0, 10.0);
        clear_background(&mut list, &style);
        assert_eq!(list.clear_color(), Some(style.back_color));
    }
}
