//! Draws a [`DisplayList`] with one flat-color triangle pipeline.
//!
//! Commands are tessellated on the CPU into clip-space triangles every
//! frame; the list's clear color becomes the render pass clear.

use glam::Vec2;

use super::{dynamic_buffer::DynamicBuffer, render_context::RenderContext};
use crate::draw::{Canvas, DisplayList, DrawCommand, Rgb};

/// Triangles around each round line cap.
const CAP_SEGMENTS: usize = 12;

/// Vertices reserved up front: a five-node frame with fully open arcs.
const INITIAL_VERTICES: usize = 4096;

/// One vertex of a flat-colored triangle.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeVertex {
    /// Clip-space position.
    pub position: [f32; 2],
    /// Color as written to the render target.
    pub color: [f32; 3],
}

impl ShapeVertex {
    /// Vertex buffer layout matching `assets/shaders/shape.wgsl`.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<ShapeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 8,
                    shader_location: 1,
                },
            ],
        }
    }
}

/// sRGB-encoded channel to linear.
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Accumulates triangles in clip space.
struct Tessellator {
    size: Vec2,
    linearize: bool,
    vertices: Vec<ShapeVertex>,
}

impl Tessellator {
    fn color(&self, color: Rgb) -> [f32; 3] {
        if self.linearize {
            color.map(srgb_to_linear)
        } else {
            color
        }
    }

    /// Pixel coordinates (y down) to clip space (y up).
    fn to_clip(&self, p: Vec2) -> [f32; 2] {
        [
            p.x / self.size.x * 2.0 - 1.0,
            1.0 - p.y / self.size.y * 2.0,
        ]
    }

    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 3]) {
        for p in [a, b, c] {
            let position = self.to_clip(p);
            self.vertices.push(ShapeVertex { position, color });
        }
    }

    fn fan(&mut self, center: Vec2, rim: &[Vec2], color: [f32; 3]) {
        for pair in rim.windows(2) {
            self.triangle(center, pair[0], pair[1], color);
        }
    }

    fn disc(&mut self, center: Vec2, radius: f32, color: [f32; 3]) {
        let rim: Vec<Vec2> = (0..=CAP_SEGMENTS)
            .map(|i| {
                let angle = i as f32 / CAP_SEGMENTS as f32 * std::f32::consts::TAU;
                center + Vec2::from_angle(angle) * radius
            })
            .collect();
        self.fan(center, &rim, color);
    }

    fn command(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Clear { .. } => {}
            DrawCommand::FillRect { min, max, color } => {
                let color = self.color(*color);
                let (a, c) = (*min, *max);
                let b = Vec2::new(c.x, a.y);
                let d = Vec2::new(a.x, c.y);
                self.triangle(a, b, c, color);
                self.triangle(a, c, d, color);
            }
            DrawCommand::StrokeLine {
                from,
                to,
                width,
                color,
            } => {
                let color = self.color(*color);
                let half = width / 2.0;
                let normal = (*to - *from).normalize_or_zero().perp() * half;
                if normal != Vec2::ZERO {
                    self.triangle(*from + normal, *to + normal, *to - normal, color);
                    self.triangle(*from + normal, *to - normal, *from - normal, color);
                }
                self.disc(*from, half, color);
                self.disc(*to, half, color);
            }
            DrawCommand::FillPolygon { points, color } => {
                let color = self.color(*color);
                if let Some((center, rim)) = points.split_first() {
                    self.fan(*center, rim, color);
                }
            }
        }
    }
}

/// Tessellate every command in `list` into a triangle list.
///
/// With `linearize`, colors are decoded from sRGB so an sRGB render target
/// reproduces them exactly.
#[must_use]
pub fn tessellate(list: &DisplayList, linearize: bool) -> Vec<ShapeVertex> {
    let mut tess = Tessellator {
        size: list.size().max(Vec2::ONE),
        linearize,
        vertices: Vec::new(),
    };
    for command in list.commands() {
        tess.command(command);
    }
    tess.vertices
}

/// Owns the shape pipeline and the per-frame vertex buffer.
pub struct ShapeRenderer {
    pipeline: wgpu::RenderPipeline,
    vertices: DynamicBuffer<ShapeVertex>,
    linearize: bool,
    clear: wgpu::Color,
}

impl ShapeRenderer {
    /// Build the pipeline for the context's surface format.
    #[must_use]
    pub fn new(context: &RenderContext) -> Self {
        let device = &context.device;
        let shader = device
            .create_shader_module(wgpu::include_wgsl!("../../assets/shaders/shape.wgsl"));

        let layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Shape Pipeline Layout"),
                bind_group_layouts: &[],
                push_constant_ranges: &[],
            });

        let pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Shape Pipeline"),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[ShapeVertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            });

        Self {
            pipeline,
            vertices: DynamicBuffer::new(
                device,
                "Shape Vertices",
                INITIAL_VERTICES,
                wgpu::BufferUsages::VERTEX,
            ),
            linearize: context.format().is_srgb(),
            clear: wgpu::Color::BLACK,
        }
    }

    /// Tessellate `list` and upload it for the next [`draw`](Self::draw).
    pub fn prepare(&mut self, context: &RenderContext, list: &DisplayList) {
        if let Some(color) = list.clear_color() {
            let [r, g, b] = if self.linearize {
                color.map(srgb_to_linear)
            } else {
                color
            };
            self.clear = wgpu::Color {
                r: f64::from(r),
                g: f64::from(g),
                b: f64::from(b),
                a: 1.0,
            };
        }
        let vertices = tessellate(list, self.linearize);
        self.vertices
            .write(&context.device, &context.queue, &vertices);
    }

    /// Clear `view` and draw the prepared triangles into it.
    pub fn draw(&self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Shape Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        let count = self.vertices.count() as u32;
        if count == 0 {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(
            0,
            self.vertices.buffer().slice(..self.vertices.byte_len()),
        );
        pass.draw(0..count, 0..1);
    }
}
