use crate::domain::graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Most out-edges a vertex gets in [`random_graph`] (exclusive bound).
pub const MAX_RANDOM_OUT_DEGREE: usize = 10;

/// Vertices per link of [`daisy_chain_graph`].
pub const DAISY_LINK_SIZE: usize = 5;

// Upper bound on what is reserved up front; larger graphs grow as they fill.
const PREALLOC_LIMIT: usize = 1 << 20;

fn capacity_hint(count: usize, per_item: usize) -> usize {
    count.saturating_mul(per_item).min(PREALLOC_LIMIT)
}

/// `size` vertices named `0..size`, each with up to nine random out-edges.
/// The same seed always yields the same graph.
pub fn random_graph(size: usize, seed: Option<u64>) -> Graph {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let names: Vec<String> = (0..size).map(|u| u.to_string()).collect();
    let mut graph = Graph::with_capacity(
        capacity_hint(size, 1),
        capacity_hint(size, MAX_RANDOM_OUT_DEGREE / 2),
    );

    // Self-loops register every vertex, isolated ones included.
    for name in names.iter() {
        link(&mut graph, name, name);
    }

    for name in names.iter() {
        let out_degree = rng.gen_range(0..MAX_RANDOM_OUT_DEGREE);
        for _ in 0..out_degree {
            let target = &names[rng.gen_range(0..size)];
            link(&mut graph, name, target);
        }
    }
    graph
}

/// `links` directed 5-cycles, each joined to the next by one edge, so the
/// graph has exactly `links` components of five vertices.
pub fn daisy_chain_graph(links: usize) -> Graph {
    let mut graph = Graph::with_capacity(
        capacity_hint(links, DAISY_LINK_SIZE),
        capacity_hint(links, DAISY_LINK_SIZE + 1),
    );
    let mut count = 0usize;

    for link_index in 0..links {
        for _ in 0..DAISY_LINK_SIZE - 1 {
            link(&mut graph, &count.to_string(), &(count + 1).to_string());
            count += 1;
        }
        let first = count + 1 - DAISY_LINK_SIZE;
        link(&mut graph, &count.to_string(), &first.to_string());
        if link_index + 1 < links {
            link(&mut graph, &count.to_string(), &(count + 1).to_string());
        }
        count += 1;
    }
    graph
}

// Generated names are decimal integers: non-empty, no whitespace.
fn link(graph: &mut Graph, source: &str, target: &str) {
    graph.link(source, target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::edge_list::{format_edge_list, parse_edge_list};

    #[test]
    fn random_graph_registers_every_vertex() {
        let g = random_graph(50, Some(7));
        assert_eq!(g.vertex_count(), 50);
        assert_eq!(g.self_loops().len(), 50);
        for id in g.order() {
            assert!(g.neighbors(*id).len() < MAX_RANDOM_OUT_DEGREE);
        }
    }

    #[test]
    fn random_graph_is_reproducible_with_a_seed() {
        let a = random_graph(30, Some(42));
        let b = random_graph(30, Some(42));
        assert_eq!(a.edge_set(), b.edge_set());
        assert_eq!(a.edge_count(), b.edge_count());
    }

    #[test]
    fn random_graph_of_size_zero_is_empty() {
        assert!(random_graph(0, Some(1)).is_empty());
    }

    #[test]
    fn capacity_hint_saturates_instead_of_overflowing() {
        assert_eq!(capacity_hint(10, DAISY_LINK_SIZE), 50);
        assert_eq!(capacity_hint(usize::MAX, DAISY_LINK_SIZE + 1), PREALLOC_LIMIT);
        assert_eq!(
            capacity_hint(usize::MAX / 2, MAX_RANDOM_OUT_DEGREE / 2),
            PREALLOC_LIMIT
        );
    }

    #[test]
    fn generated_edges_reparse_without_rejections() {
        for graph in [random_graph(25, Some(11)), daisy_chain_graph(4)] {
            let reparsed = parse_edge_list(&format_edge_list(&graph));
            assert!(reparsed.rejected.is_empty());
            assert_eq!(reparsed.graph.edge_set(), graph.edge_set());
        }
    }

    #[test]
    fn daisy_chain_shape() {
        let g = daisy_chain_graph(3);
        assert_eq!(g.vertex_count(), 15);
        // 5 per cycle plus 2 bridges
        assert_eq!(g.edge_count(), 17);
        assert!(g.edge_set().contains(&("4".to_string(), "0".to_string())));
        assert!(g.edge_set().contains(&("4".to_string(), "5".to_string())));
        assert!(g.edge_set().contains(&("14".to_string(), "10".to_string())));
        assert!(!g.edge_set().contains(&("14".to_string(), "15".to_string())));
    }
}
