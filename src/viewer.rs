//! Standalone window running the sweep, backed by winit.
//!
//! A left click or touch starts the next unit of motion; the event loop
//! sleeps until the animator's next deadline and redraws on every tick.
//!
//! ```no_run
//! # use arcsweep::Viewer;
//! Viewer::builder()
//!     .with_title("Arc Bounce Sweep")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, TouchPhase, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    draw::DisplayList,
    error::ArcSweepError,
    gpu::{RenderContext, ShapeRenderer},
    options::Options,
    renderer::Renderer,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default title and options.
    fn new() -> Self {
        Self {
            options: None,
            title: "Arc Bounce Sweep".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing the node row.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`ArcSweepError::InvalidOptions`] before opening a window if
    /// the options cannot drive an animation, and
    /// [`ArcSweepError::Viewer`] if the event loop fails.
    pub fn run(self) -> Result<(), ArcSweepError> {
        self.options.validate()?;

        let event_loop = EventLoop::new()
            .map_err(|e| ArcSweepError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            gpu: None,
            renderer: Renderer::new(&self.options),
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| ArcSweepError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// GPU state, created once the window exists.
struct Gpu {
    context: RenderContext,
    shapes: ShapeRenderer,
}

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    gpu: Option<Gpu>,
    renderer: Renderer,
    title: String,
}

impl ViewerApp {
    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    fn tap(&mut self) {
        if self.renderer.handle_tap(Instant::now()) {
            self.request_redraw();
        }
    }

    fn redraw(&mut self) {
        let (Some(window), Some(gpu)) = (&self.window, &mut self.gpu) else {
            return;
        };

        let (width, height) = gpu.context.size();
        let mut list = DisplayList::new(width as f32, height as f32);
        self.renderer.render(&mut list);
        gpu.shapes.prepare(&gpu.context, &list);

        match gpu.context.get_next_frame() {
            Ok(frame) => {
                let view = frame
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                let mut encoder = gpu.context.create_encoder();
                gpu.shapes.draw(&mut encoder, &view);
                gpu.context.submit(encoder);
                window.pre_present_notify();
                frame.present();
            }
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                log::warn!("surface lost, reconfiguring");
                let inner = window.inner_size();
                gpu.context.resize(inner.width, inner.height);
                window.request_redraw();
            }
            Err(e) => {
                log::error!("render error: {e:?}");
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let inner = window.inner_size();
        let context = match pollster::block_on(RenderContext::new(
            window.clone(),
            (inner.width, inner.height),
        )) {
            Ok(context) => context,
            Err(e) => {
                log::error!("Failed to initialize GPU: {e}");
                event_loop.exit();
                return;
            }
        };
        let shapes = ShapeRenderer::new(&context);
        log::info!(
            "window ready ({}x{}, {:?})",
            inner.width,
            inner.height,
            context.format()
        );

        window.request_redraw();
        self.gpu = Some(Gpu { context, shapes });
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.context.resize(size.width, size.height);
                }
                self.request_redraw();
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.tap(),

            WindowEvent::Touch(touch) if touch.phase == TouchPhase::Started => {
                self.tap();
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.renderer.tick(Instant::now());
        if frame.redraw {
            self.request_redraw();
        }
        if frame.settled {
            log::debug!("sweep at rest on node {}", self.renderer.sweep().active());
        }

        let control_flow = self
            .renderer
            .next_deadline()
            .map_or(ControlFlow::Wait, ControlFlow::WaitUntil);
        event_loop.set_control_flow(control_flow);
    }
}
