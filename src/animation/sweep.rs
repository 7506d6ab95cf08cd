//! Back-and-forth sweep over the node chain.

use super::{
    chain::NodeChain,
    state::{Heading, ScaleState},
};
use crate::{draw::Canvas, options::StyleOptions};

/// Result of one [`Sweep::update`] tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepUpdate {
    /// Nothing is moving.
    Idle,
    /// The active node is mid-unit.
    Moving,
    /// The active node finished its unit and the sweep moved on.
    Advanced {
        /// Node that just finished.
        from: usize,
        /// New active node.
        to: usize,
    },
    /// The active node finished its unit at an end of the chain; the sweep
    /// turned around and stays on the same node.
    Reversed {
        /// Node that just finished, still active.
        at: usize,
        /// New sweep heading.
        heading: Heading,
    },
}

impl SweepUpdate {
    /// Whether a unit of motion completed on this tick.
    #[must_use]
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Advanced { .. } | Self::Reversed { .. })
    }
}

/// The `(active index, heading, scale, node direction)` tuple that fully
/// determines the next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSnapshot {
    /// Currently active node.
    pub active: usize,
    /// Sweep heading along the chain.
    pub heading: Heading,
    /// Scale of the active node.
    pub scale: f32,
    /// Direction of the active node, `None` at rest.
    pub direction: Option<Heading>,
}

/// Animates one node at a time, walking the chain head to tail and back.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    chain: NodeChain,
    active: usize,
    heading: Heading,
}

impl Sweep {
    /// Sweep over a fresh chain of `len` nodes, starting at the head and
    /// heading forward.
    #[must_use]
    pub fn new(len: usize, step: f32) -> Self {
        Self {
            chain: NodeChain::new(len, step),
            active: 0,
            heading: Heading::Forward,
        }
    }

    /// The node chain.
    #[must_use]
    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    /// Index of the active node.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Current sweep heading.
    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Scale state of the active node.
    #[must_use]
    pub fn active_state(&self) -> Option<&ScaleState> {
        self.chain.get(self.active).map(|node| node.state())
    }

    /// Snapshot of the state driving the next tick.
    #[must_use]
    pub fn snapshot(&self) -> SweepSnapshot {
        let state = self.active_state();
        SweepSnapshot {
            active: self.active,
            heading: self.heading,
            scale: state.map_or(0.0, ScaleState::scale),
            direction: state.and_then(ScaleState::direction),
        }
    }

    /// Draw every node.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, style: &StyleOptions) {
        self.chain.draw_all(canvas, style);
    }

    /// Start a unit of motion on the active node.
    ///
    /// Returns `false` without touching anything if it is already moving.
    pub fn start_motion(&mut self) -> bool {
        self.chain.begin_motion(self.active)
    }

    /// Advance the active node one tick.
    ///
    /// When its unit completes, the next node in the sweep heading becomes
    /// active; at either end the heading flips instead and the same node
    /// will make the next move.
    pub fn update(&mut self) -> SweepUpdate {
        let moving = self
            .active_state()
            .is_some_and(|state| !state.is_idle());
        if !moving {
            return SweepUpdate::Idle;
        }
        if !self.chain.advance(self.active) {
            return SweepUpdate::Moving;
        }

        let from = self.active;
        match self.chain.neighbor(from, self.heading) {
            Some(to) => {
                self.active = to;
                log::debug!("node {from} settled, sweep moves to node {to}");
                SweepUpdate::Advanced { from, to }
            }
            None => {
                self.heading = self.heading.reversed();
                log::debug!(
                    "node {from} settled at chain end, heading {:?}",
                    self.heading
                );
                SweepUpdate::Reversed {
                    at: from,
                    heading: self.heading,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run the active node's unit to completion.
    fn run_unit(sweep: &mut Sweep) -> SweepUpdate {
        assert!(sweep.start_motion());
        for _ in 0..1000 {
            let update = sweep.update();
            if update.is_complete() {
                return update;
            }
            assert_eq!(update, SweepUpdate::Moving);
        }
        panic!("unit never completed");
    }

    fn moving_nodes(sweep: &Sweep) -> usize {
        sweep
            .chain()
            .iter()
            .filter(|node| !node.state().is_idle())
            .count()
    }

    #[test]
    fn update_while_idle_does_nothing() {
        let mut sweep = Sweep::new(5, 0.02);
        assert_eq!(sweep.update(), SweepUpdate::Idle);
        assert_eq!(sweep.active(), 0);
    }

    #[test]
    fn first_unit_moves_to_second_node() {
        let mut sweep = Sweep::new(5, 0.02);
        assert_eq!(run_unit(&mut sweep), SweepUpdate::Advanced { from: 0, to: 1 });
        assert_eq!(sweep.chain().get(0).map(|n| n.state().settled()), Some(1.0));
        assert_eq!(sweep.snapshot().direction, None);
    }

    #[test]
    fn bounce_visits_nodes_in_both_directions() {
        let mut sweep = Sweep::new(5, 0.05);
        let mut visited = Vec::new();
        for _ in 0..20 {
            visited.push(sweep.active());
            let _ = run_unit(&mut sweep);
        }
        assert_eq!(
            visited,
            vec![
                0, 1, 2, 3, 4, 4, 3, 2, 1, 0, //
                0, 1, 2, 3, 4, 4, 3, 2, 1, 0,
            ]
        );
        assert_eq!(sweep.heading(), Heading::Forward);
    }

    #[test]
    fn reversal_at_tail_keeps_the_node() {
        let mut sweep = Sweep::new(3, 0.1);
        let _ = run_unit(&mut sweep);
        let _ = run_unit(&mut sweep);
        assert_eq!(
            run_unit(&mut sweep),
            SweepUpdate::Reversed {
                at: 2,
                heading: Heading::Backward
            }
        );
        assert_eq!(sweep.active(), 2);

        // Reversal does not start the next unit on its own.
        assert_eq!(sweep.update(), SweepUpdate::Idle);

        // The next unit on the tail shrinks it back to zero.
        assert_eq!(run_unit(&mut sweep), SweepUpdate::Advanced { from: 2, to: 1 });
        assert_eq!(sweep.chain().get(2).map(|n| n.state().settled()), Some(0.0));
    }

    #[test]
    fn at_most_one_node_moves() {
        let mut sweep = Sweep::new(4, 0.1);
        for _ in 0..12 {
            assert!(sweep.start_motion());
            loop {
                assert!(moving_nodes(&sweep) <= 1);
                if sweep.update().is_complete() {
                    break;
                }
            }
            assert_eq!(moving_nodes(&sweep), 0);
        }
    }

    #[test]
    fn start_motion_mid_unit_is_ignored() {
        let mut sweep = Sweep::new(5, 0.02);
        assert!(sweep.start_motion());
        for _ in 0..5 {
            let _ = sweep.update();
        }
        let before = sweep.snapshot();
        assert!(!sweep.start_motion());
        assert_eq!(sweep.snapshot(), before);
    }

    #[test]
    fn single_node_sweep_reverses_every_unit() {
        let mut sweep = Sweep::new(1, 0.25);
        assert!(matches!(run_unit(&mut sweep), SweepUpdate::Reversed { at: 0, .. }));
        assert!(matches!(run_unit(&mut sweep), SweepUpdate::Reversed { at: 0, .. }));
        assert_eq!(sweep.chain().get(0).map(|n| n.state().scale()), Some(0.0));
    }
}
