use crate::domain::error::GraphError;
use crate::domain::graph::{Graph, SccResult};

pub trait SccDetector {
    /// Partitions `graph` into strongly connected components.
    ///
    /// Only the traversal fields of the vertices are written.
    fn compute_scc(&self, graph: &mut Graph) -> Result<SccResult, GraphError>;
}
