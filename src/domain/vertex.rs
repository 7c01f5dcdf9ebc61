/// Stable handle into a graph's vertex storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// DFS visitation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Unvisited,
    Discovered,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Vertex {
    pub name: String,
    pub color: Color,
    pub discovery_time: Option<usize>,
    pub finish_time: Option<usize>,
    pub adjacency: Vec<VertexId>,
    pub parent: Option<VertexId>,
}

impl Vertex {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: Color::Unvisited,
            discovery_time: None,
            finish_time: None,
            adjacency: Vec::new(),
            parent: None,
        }
    }

    /// Clears everything a traversal writes. Adjacency is left alone.
    pub fn reset_traversal_state(&mut self) {
        self.color = Color::Unvisited;
        self.discovery_time = None;
        self.finish_time = None;
        self.parent = None;
    }
}

// Identity is the name only; traversal state never takes part in equality.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Vertex {}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
