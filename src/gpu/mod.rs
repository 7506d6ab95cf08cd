//! wgpu presentation backend for the 2D canvas.
//!
//! Provides device/surface initialization, a growable vertex buffer, and the
//! shape pipeline that rasterizes a [`DisplayList`](crate::draw::DisplayList).

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Display-list tessellation and the flat-color shape pipeline.
pub mod shape_renderer;

pub use render_context::{RenderContext, RenderContextError};
pub use shape_renderer::ShapeRenderer;
