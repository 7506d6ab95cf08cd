//! Animation core: per-node scale state, the node chain, the bounce sweep
//! over it, and the tick scheduler that drives it.

pub mod animator;
pub mod chain;
pub mod state;
pub mod sweep;

pub use animator::Animator;
pub use chain::{Node, NodeChain};
pub use state::{Heading, ScaleState};
pub use sweep::{Sweep, SweepSnapshot, SweepUpdate};
