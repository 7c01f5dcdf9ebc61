use crate::domain::error::GraphError;
use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccDetector;
use crate::infrastructure::dfs::run_dfs;
use std::collections::HashMap;
use std::time::Instant;

pub struct KosarajuSccDetector;

impl SccDetector for KosarajuSccDetector {
    fn compute_scc(&self, graph: &mut Graph) -> Result<SccResult, GraphError> {
        kosaraju_scc(graph)
    }
}

fn kosaraju_scc(graph: &mut Graph) -> Result<SccResult, GraphError> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let started = Instant::now();

    let order = graph.order().to_vec();
    run_dfs(graph, &order);

    // Descending finish time puts a vertex of a source component of the
    // condensation first; in the transpose that component is a sink, so each
    // tree below stays inside exactly one component.
    let mut transposed = graph.transpose();
    transposed.sort_by_finish_time_desc();
    let order = transposed.order().to_vec();
    let forest = run_dfs(&mut transposed, &order);

    let components: Vec<Vec<String>> = forest
        .trees
        .iter()
        .map(|tree| {
            tree.iter()
                .map(|&id| transposed.vertex(id).name.clone())
                .collect()
        })
        .collect();

    let mut component_of = HashMap::with_capacity(graph.vertex_count());
    for (cid, comp) in components.iter().enumerate() {
        for name in comp {
            component_of.insert(name.clone(), cid);
        }
    }

    let self_loops = graph.self_loops();
    let cyclic_component = components
        .iter()
        .map(|comp| comp.len() > 1 || self_loops.contains(comp[0].as_str()))
        .collect();

    let elapsed = started.elapsed();
    Ok(SccResult {
        components,
        component_of,
        cyclic_component,
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_pass_state_stays_on_input_graph() {
        let mut g = Graph::new();
        g.insert("a b").unwrap();
        g.insert("b a").unwrap();

        KosarajuSccDetector.compute_scc(&mut g).expect("scc");

        // a was the first forward root, so it finishes last.
        let a = g.vertex_by_name("a").unwrap();
        let b = g.vertex_by_name("b").unwrap();
        assert_eq!(a.discovery_time, Some(1));
        assert_eq!(a.finish_time, Some(4));
        assert_eq!(b.finish_time, Some(3));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn elapsed_covers_the_whole_computation() {
        let mut g = Graph::new();
        for i in 0..500 {
            g.insert_edge(&i.to_string(), &((i + 1) % 500).to_string())
                .unwrap();
        }
        let before = Instant::now();
        let scc = KosarajuSccDetector.compute_scc(&mut g).expect("scc");
        let outer = before.elapsed();

        assert_eq!(scc.components.len(), 1);
        assert_eq!(scc.component_of.len(), 500);
        assert!(scc.elapsed > std::time::Duration::ZERO);
        assert!(scc.elapsed <= outer);
    }

    #[test]
    fn empty_graph_is_rejected() {
        let mut g = Graph::new();
        let err = KosarajuSccDetector.compute_scc(&mut g).unwrap_err();
        assert_eq!(err, GraphError::EmptyGraph);
    }
}
