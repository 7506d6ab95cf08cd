use glam::Vec2;

/// sRGB-encoded color, each channel in [0, 1].
pub type Rgb = [f32; 3];

/// Raw 2D drawing primitives in pixel coordinates (origin top-left, y down).
///
/// Implementations only render; nothing drawn feeds back into animation
/// state.
pub trait Canvas {
    /// Drawable area in pixels.
    fn size(&self) -> Vec2;

    /// Fill the whole surface.
    fn clear(&mut self, color: Rgb);

    /// Fill the axis-aligned rectangle spanning `min..max`.
    fn fill_rect(&mut self, min: Vec2, max: Vec2, color: Rgb);

    /// Stroke a straight line with round caps.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb);

    /// Fill a polygon that is star-shaped around its first point.
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb);
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear {
        /// Fill color.
        color: Rgb,
    },
    /// Axis-aligned filled rectangle.
    FillRect {
        /// Top-left corner.
        min: Vec2,
        /// Bottom-right corner.
        max: Vec2,
        /// Fill color.
        color: Rgb,
    },
    /// Round-capped line segment.
    StrokeLine {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Stroke width in pixels.
        width: f32,
        /// Stroke color.
        color: Rgb,
    },
    /// Filled polygon, fanned from its first point.
    FillPolygon {
        /// Outline, first point is the fan center.
        points: Vec<Vec2>,
        /// Fill color.
        color: Rgb,
    },
}

/// A [`Canvas`] that records commands instead of rasterizing them.
///
/// The GPU backend tessellates a finished list each frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    size: Vec2,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Empty list for a surface of `width` x `height` pixels.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Recorded commands, in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Color of the last [`DrawCommand::Clear`], if any.
    #[must_use]
    pub fn clear_color(&self) -> Option<Rgb> {
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::Clear { color } => Some(*color),
            _ => None,
        })
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DisplayList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self, color: Rgb) {
        // Anything drawn before a clear is invisible.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { color });
    }

    fn fill_rect(&mut self, min: Vec2, max: Vec2, color: Rgb) {
        self.commands.push(DrawCommand::FillRect { min, max, color });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }
}
