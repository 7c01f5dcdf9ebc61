use crate::domain::graph::Graph;
use crate::domain::vertex::{Color, VertexId};

/// Shared discovery/finish counter for one traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalClock {
    time: usize,
}

impl TraversalClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> usize {
        self.time
    }

    fn tick(&mut self) -> usize {
        self.time += 1;
        self.time
    }
}

/// Trees produced by one [`run_dfs`], each listed in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DfsForest {
    pub trees: Vec<Vec<VertexId>>,
}

impl DfsForest {
    pub fn roots(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.trees.iter().filter_map(|t| t.first().copied())
    }
}

struct Frame {
    vertex: VertexId,
    cursor: usize,
}

/// Resets every vertex, then starts a tree from each vertex of `order`
/// that is still unvisited when reached.
pub fn run_dfs(graph: &mut Graph, order: &[VertexId]) -> DfsForest {
    graph.reset_traversal();

    let mut clock = TraversalClock::new();
    let mut forest = DfsForest::default();

    for &root in order {
        if graph.vertex(root).color != Color::Unvisited {
            continue;
        }
        let mut tree = Vec::new();
        visit(graph, root, &mut clock, &mut tree);
        forest.trees.push(tree);
    }
    forest
}

/// Explores everything reachable from `root` that is still unvisited,
/// appending discovered vertices to `tree`. Returns the clock value after
/// `root` finishes.
pub fn visit(
    graph: &mut Graph,
    root: VertexId,
    clock: &mut TraversalClock,
    tree: &mut Vec<VertexId>,
) -> usize {
    discover(graph, root, clock, tree);
    let mut stack = vec![Frame {
        vertex: root,
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let u = frame.vertex;
        let next = graph.neighbors(u).get(frame.cursor).copied();

        match next {
            Some(v) => {
                frame.cursor += 1;
                if graph.vertex(v).color == Color::Unvisited {
                    graph.vertex_mut(v).parent = Some(u);
                    discover(graph, v, clock, tree);
                    stack.push(Frame {
                        vertex: v,
                        cursor: 0,
                    });
                }
            }
            None => {
                let vertex = graph.vertex_mut(u);
                vertex.color = Color::Finished;
                vertex.finish_time = Some(clock.tick());
                stack.pop();
            }
        }
    }

    clock.now()
}

fn discover(
    graph: &mut Graph,
    id: VertexId,
    clock: &mut TraversalClock,
    tree: &mut Vec<VertexId>,
) {
    let vertex = graph.vertex_mut(id);
    vertex.color = Color::Discovered;
    vertex.discovery_time = Some(clock.tick());
    tree.push(id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(lines: &[&str]) -> Graph {
        let mut g = Graph::new();
        for line in lines {
            g.insert(line).expect("insert");
        }
        g
    }

    fn times(g: &Graph, name: &str) -> (Option<usize>, Option<usize>) {
        let v = g.vertex_by_name(name).expect("vertex");
        (v.discovery_time, v.finish_time)
    }

    fn names(g: &Graph, ids: &[VertexId]) -> Vec<String> {
        ids.iter().map(|&id| g.vertex(id).name.clone()).collect()
    }

    #[test]
    fn chain_gets_nested_timestamps() {
        let mut g = graph_of(&["a b", "b c"]);
        let order = g.order().to_vec();
        let forest = run_dfs(&mut g, &order);

        assert_eq!(forest.trees.len(), 1);
        assert_eq!(times(&g, "a"), (Some(1), Some(6)));
        assert_eq!(times(&g, "b"), (Some(2), Some(5)));
        assert_eq!(times(&g, "c"), (Some(3), Some(4)));
        assert!(g
            .order()
            .iter()
            .all(|&id| g.vertex(id).color == Color::Finished));
    }

    #[test]
    fn neighbours_follow_adjacency_order() {
        // a -> c, a -> b ; c is visited first because it was inserted first.
        let mut g = graph_of(&["a c", "a b"]);
        let order = g.order().to_vec();
        let forest = run_dfs(&mut g, &order);

        assert_eq!(names(&g, &forest.trees[0]), vec!["a", "c", "b"]);
        assert_eq!(times(&g, "c"), (Some(2), Some(3)));
        assert_eq!(times(&g, "b"), (Some(4), Some(5)));
        assert_eq!(times(&g, "a"), (Some(1), Some(6)));
    }

    #[test]
    fn parents_point_at_discoverer_and_roots_have_none() {
        let mut g = graph_of(&["a b", "a c", "d a"]);
        let order = g.order().to_vec();
        let forest = run_dfs(&mut g, &order);

        // a, b, c in the first tree; d starts a second one since a is done.
        assert_eq!(forest.trees.len(), 2);
        assert_eq!(names(&g, &forest.roots().collect::<Vec<_>>()), vec!["a", "d"]);

        let a = g.vertex_id("a").unwrap();
        assert_eq!(g.vertex_by_name("b").unwrap().parent, Some(a));
        assert_eq!(g.vertex_by_name("c").unwrap().parent, Some(a));
        assert_eq!(g.vertex_by_name("a").unwrap().parent, None);
        assert_eq!(g.vertex_by_name("d").unwrap().parent, None);
    }

    #[test]
    fn order_decides_tree_roots() {
        let mut g = graph_of(&["a b"]);
        let b = g.vertex_id("b").unwrap();
        let a = g.vertex_id("a").unwrap();
        let forest = run_dfs(&mut g, &[b, a]);

        assert_eq!(forest.trees, vec![vec![b], vec![a]]);
        assert_eq!(times(&g, "b"), (Some(1), Some(2)));
        assert_eq!(times(&g, "a"), (Some(3), Some(4)));
    }

    #[test]
    fn rerun_resets_previous_state() {
        let mut g = graph_of(&["a b", "b a"]);
        let order = g.order().to_vec();
        run_dfs(&mut g, &order);
        let first = (times(&g, "a"), times(&g, "b"));

        let forest = run_dfs(&mut g, &order);
        assert_eq!((times(&g, "a"), times(&g, "b")), first);
        assert_eq!(forest.trees.len(), 1);
    }

    #[test]
    fn visit_returns_clock_after_root_finishes() {
        let mut g = graph_of(&["a b", "c d"]);
        g.reset_traversal();
        let mut clock = TraversalClock::new();
        let mut tree = Vec::new();

        let a = g.vertex_id("a").unwrap();
        assert_eq!(visit(&mut g, a, &mut clock, &mut tree), 4);

        let c = g.vertex_id("c").unwrap();
        let mut tree = Vec::new();
        assert_eq!(visit(&mut g, c, &mut clock, &mut tree), 8);
        assert_eq!(times(&g, "d"), (Some(6), Some(7)));
    }

    #[test]
    fn deep_chain_does_not_exhaust_the_stack() {
        let n = 200_000;
        let mut g = Graph::with_capacity(n, n);
        for i in 0..n - 1 {
            g.insert_edge(&i.to_string(), &(i + 1).to_string())
                .expect("insert");
        }
        let order = g.order().to_vec();
        let forest = run_dfs(&mut g, &order);

        assert_eq!(forest.trees.len(), 1);
        assert_eq!(forest.trees[0].len(), n);
        assert_eq!(times(&g, "0"), (Some(1), Some(2 * n)));
    }
}
