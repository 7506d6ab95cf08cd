//! 2D drawing: the [`Canvas`] primitive surface, a recording
//! [`DisplayList`], and the node shapes drawn on top of them.

mod canvas;
pub mod shapes;

pub use canvas::{Canvas, DisplayList, DrawCommand, Rgb};
pub use shapes::{clear_background, draw_node, NodeLayout};
