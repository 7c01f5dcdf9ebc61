//! Domain layer: graph model, traversal state and ports. No IO.

pub mod error;
pub mod graph;
pub mod traits;
pub mod vertex;
