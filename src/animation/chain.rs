//! Fixed-length chain of nodes.

use super::state::{Heading, ScaleState};
use crate::{
    draw::{draw_node, Canvas, NodeLayout},
    options::StyleOptions,
};

/// One position in the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    index: usize,
    state: ScaleState,
}

impl Node {
    /// Position in the chain, 0 at the head.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The node's scale state.
    #[must_use]
    pub fn state(&self) -> &ScaleState {
        &self.state
    }
}

/// Ordered nodes `0..len`, built once and never resized.
///
/// Neighbors are found by index, so the chain has no back-references and
/// cannot form a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeChain {
    nodes: Vec<Node>,
}

impl NodeChain {
    /// Build `len` idle nodes that move `step` per tick.
    #[must_use]
    pub fn new(len: usize, step: f32) -> Self {
        let nodes = (0..len)
            .map(|index| Node {
                index,
                state: ScaleState::new(step),
            })
            .collect();
        Self { nodes }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the chain has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Nodes head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Draw every node head to tail at its current scale.
    pub fn draw_all<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        style: &StyleOptions,
    ) {
        let layout = NodeLayout::new(canvas.size(), self.nodes.len(), style);
        for node in &self.nodes {
            draw_node(&mut *canvas, &layout, style, node.index, node.state.scale());
        }
    }

    /// Advance node `index` one tick; `true` when its unit of motion
    /// completed on this tick.
    pub fn advance(&mut self, index: usize) -> bool {
        self.nodes
            .get_mut(index)
            .is_some_and(|node| node.state.advance())
    }

    /// Start a unit of motion on node `index`; `false` if it is already
    /// moving or out of range.
    pub fn begin_motion(&mut self, index: usize) -> bool {
        self.nodes
            .get_mut(index)
            .is_some_and(|node| node.state.begin_motion())
    }

    /// Index of the neighbor of `index` in `heading`, or `None` at either
    /// end of the chain.
    #[must_use]
    pub fn neighbor(&self, index: usize, heading: Heading) -> Option<usize> {
        match heading {
            Heading::Forward => {
                let next = index + 1;
                (next < self.nodes.len()).then_some(next)
            }
            Heading::Backward => index.checked_sub(1),
        }
    }
}
