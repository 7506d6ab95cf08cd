//! Composition root: taps start the sweep, the animator paces it, and every
//! tick asks for a redraw until the moving node comes to rest.

use web_time::Instant;

use crate::{
    animation::{Animator, Sweep, SweepUpdate},
    draw::{clear_background, Canvas},
    options::{Options, StyleOptions},
};

/// What the event loop should do after [`Renderer::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame {
    /// Ticks run during this call.
    pub ticks: u32,
    /// Whether the surface needs repainting.
    pub redraw: bool,
    /// Whether the moving node came to rest and the animator stopped.
    pub settled: bool,
}

/// Owns the sweep and its animator and turns taps and clock time into
/// redraw requests.
#[derive(Debug, Clone)]
pub struct Renderer {
    sweep: Sweep,
    animator: Animator,
    style: StyleOptions,
}

impl Renderer {
    /// Build the chain and an idle animator from `options`.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            sweep: Sweep::new(options.sweep.node_count, options.sweep.step),
            animator: Animator::new(options.sweep.tick_period()),
            style: options.style.clone(),
        }
    }

    /// The sweep being animated.
    #[must_use]
    pub fn sweep(&self) -> &Sweep {
        &self.sweep
    }

    /// Whether a unit of motion is in progress.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// When the event loop should next call [`tick`](Self::tick), `None`
    /// while at rest.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.animator.next_deadline()
    }

    /// Paint the background and every node.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        clear_background(&mut *canvas, &self.style);
        self.sweep.draw(canvas, &self.style);
    }

    /// Primary tap/click: start the active node's next unit of motion.
    ///
    /// Returns `false` when a unit is already running; the tap is dropped.
    pub fn handle_tap(&mut self, now: Instant) -> bool {
        if !self.sweep.start_motion() {
            log::debug!("tap ignored, node {} still moving", self.sweep.active());
            return false;
        }
        let _ = self.animator.start(now);
        let snapshot = self.sweep.snapshot();
        log::info!(
            "node {} starts moving {:?}",
            snapshot.active,
            snapshot.direction
        );
        true
    }

    /// Run every tick that fell due by `now`.
    ///
    /// Each tick requests a redraw and advances the sweep; the tick on which
    /// the moving node settles stops the animator.
    pub fn tick(&mut self, now: Instant) -> Frame {
        let due = self.animator.poll(now);
        let mut frame = Frame::default();
        for _ in 0..due {
            frame.ticks += 1;
            frame.redraw = true;
            let update = self.sweep.update();
            log::trace!("tick: {update:?}");
            if update.is_complete() || update == SweepUpdate::Idle {
                let _ = self.animator.stop();
                frame.settled = true;
                break;
            }
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::draw::{DisplayList, DrawCommand};

    /// Tick every period until the animator stops; returns the tick count.
    fn run_until_rest(renderer: &mut Renderer, start: Instant) -> u32 {
        let period = Duration::from_millis(20);
        let mut now = start;
        let mut ticks = 0;
        while renderer.is_animating() {
            now += period;
            let frame = renderer.tick(now);
            assert!(frame.redraw);
            ticks += frame.ticks;
            assert!(ticks < 1000, "never came to rest");
        }
        ticks
    }

    #[test]
    fn tap_animates_one_unit_then_stops() {
        let mut renderer = Renderer::new(&Options::default());
        let t0 = Instant::now();

        assert!(renderer.handle_tap(t0));
        assert!(renderer.is_animating());

        let ticks = run_until_rest(&mut renderer, t0);
        assert!((50..=51).contains(&ticks), "took {ticks} ticks");

        let node0 = renderer.sweep().chain().get(0).unwrap().state();
        assert_eq!(node0.scale(), 1.0);
        assert!(node0.is_idle());
        assert_eq!(renderer.sweep().active(), 1);
        assert_eq!(renderer.next_deadline(), None);
    }

    #[test]
    fn tap_while_animating_is_ignored() {
        let mut renderer = Renderer::new(&Options::default());
        let t0 = Instant::now();
        assert!(renderer.handle_tap(t0));
        let _ = renderer.tick(t0 + Duration::from_millis(20));

        let before = renderer.sweep().snapshot();
        let deadline = renderer.next_deadline();
        assert!(!renderer.handle_tap(t0 + Duration::from_millis(25)));
        assert_eq!(renderer.sweep().snapshot(), before);
        assert_eq!(renderer.next_deadline(), deadline);
    }

    #[test]
    fn second_tap_resumes_from_next_node() {
        let mut renderer = Renderer::new(&Options::default());
        let mut now = Instant::now();
        let _ = renderer.handle_tap(now);
        let _ = run_until_rest(&mut renderer, now);

        now += Duration::from_secs(3);
        assert!(renderer.handle_tap(now));
        let _ = run_until_rest(&mut renderer, now);
        assert_eq!(renderer.sweep().active(), 2);
    }

    #[test]
    fn tick_without_tap_does_nothing() {
        let mut renderer = Renderer::new(&Options::default());
        let frame = renderer.tick(Instant::now() + Duration::from_secs(1));
        assert_eq!(frame, Frame::default());
    }

    #[test]
    fn render_clears_then_draws_every_node() {
        let renderer = Renderer::new(&Options::default());
        let mut list = DisplayList::new(600.0, 400.0);
        renderer.render(&mut list);

        assert!(matches!(list.commands()[0], DrawCommand::Clear { .. }));
        // At rest each node is a block and a line; arcs are closed.
        assert_eq!(list.len(), 1 + 5 * 2);
    }

    #[test]
    fn mid_unit_render_includes_arc() {
        let mut renderer = Renderer::new(&Options::default());
        let t0 = Instant::now();
        let _ = renderer.handle_tap(t0);
        for i in 1..=10 {
            let _ = renderer.tick(t0 + Duration::from_millis(20 * i));
        }
        let mut list = DisplayList::new(600.0, 400.0);
        renderer.render(&mut list);
        let arcs = list
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::FillPolygon { .. }))
            .count();
        assert_eq!(arcs, 1);
    }
}
