use crate::domain::error::GraphError;
use crate::domain::vertex::{Vertex, VertexId};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::time::Duration;

/// A raw `source target` pair exactly as it was inserted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Directed graph keyed by vertex name.
///
/// Vertices live in an arena addressed by [`VertexId`]; `order` is the
/// sequence traversals walk, starting as insertion order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    order: Vec<VertexId>,
    edges: Vec<Edge>,
    lookup: HashMap<String, VertexId>,
}

/// Splits one line of edge text into its two endpoint names.
pub fn parse_edge(text: &str) -> Result<(&str, &str), GraphError> {
    let mut tokens = text.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(source), Some(target), None) => Ok((source, target)),
        _ => Err(GraphError::MalformedEdge {
            line: text.to_string(),
            tokens: text.split_whitespace().count(),
        }),
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            order: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            lookup: HashMap::with_capacity(vertices),
        }
    }

    /// Inserts an edge written as `"u v"`.
    pub fn insert(&mut self, edge_text: &str) -> Result<(), GraphError> {
        let (source, target) = parse_edge(edge_text)?;
        self.link(source, target);
        Ok(())
    }

    /// Inserts an edge from already separated names.
    pub fn insert_edge(&mut self, source: &str, target: &str) -> Result<(), GraphError> {
        let valid = |name: &str| !name.is_empty() && !name.contains(char::is_whitespace);
        if !valid(source) || !valid(target) {
            let line = format!("{source} {target}");
            let tokens = line.split_whitespace().count();
            return Err(GraphError::MalformedEdge { line, tokens });
        }
        self.link(source, target);
        Ok(())
    }

    /// Inserts without validating names. Callers must pass non-empty names
    /// free of whitespace.
    pub(crate) fn link(&mut self, source: &str, target: &str) {
        let u = self.find_or_create(source);
        let v = self.find_or_create(target);
        self.edges.push(Edge {
            source: source.to_string(),
            target: target.to_string(),
        });

        let adjacency = &mut self.vertices[u.0].adjacency;
        if u != v && !adjacency.contains(&v) {
            adjacency.push(v);
        }
    }

    fn find_or_create(&mut self, name: &str) -> VertexId {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(name));
        self.order.push(id);
        self.lookup.insert(name.to_string(), id);
        id
    }

    /// Builds the reversed graph. Finish times from the last traversal of
    /// `self` are copied onto the matching vertices.
    pub fn transpose(&self) -> Graph {
        let mut transposed = Graph::with_capacity(self.vertices.len(), self.edges.len());
        for edge in self.edges.iter() {
            transposed.link(&edge.target, &edge.source);
        }

        for vertex in transposed.vertices.iter_mut() {
            if let Some(&id) = self.lookup.get(&vertex.name) {
                vertex.finish_time = self.vertices[id.0].finish_time;
            }
        }
        transposed
    }

    /// Orders vertices and every adjacency list by name, so traversal output
    /// no longer depends on insertion order.
    pub fn sort_by_name(&mut self) {
        let vertices = &self.vertices;
        self.order
            .sort_by(|a, b| vertices[a.0].name.cmp(&vertices[b.0].name));

        let mut rank = vec![0usize; self.vertices.len()];
        for (pos, id) in self.order.iter().enumerate() {
            rank[id.0] = pos;
        }
        for vertex in self.vertices.iter_mut() {
            vertex.adjacency.sort_by_key(|id| rank[id.0]);
        }
    }

    /// Stable sort of the traversal order, latest finish time first.
    /// Vertices never finished go last.
    pub fn sort_by_finish_time_desc(&mut self) {
        let vertices = &self.vertices;
        self.order
            .sort_by(|a, b| vertices[b.0].finish_time.cmp(&vertices[a.0].finish_time));
    }

    pub fn reset_traversal(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.reset_traversal_state();
        }
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.0]
    }

    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id.0]
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.lookup.get(name).copied()
    }

    pub fn vertex_by_name(&self, name: &str) -> Option<&Vertex> {
        self.vertex_id(name).map(|id| self.vertex(id))
    }

    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        &self.vertices[id.0].adjacency
    }

    pub fn order(&self) -> &[VertexId] {
        &self.order
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Vertex names in traversal order.
    pub fn names(&self) -> Vec<&str> {
        self.order
            .iter()
            .map(|id| self.vertices[id.0].name.as_str())
            .collect()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of raw edges stored, repeats and self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn adjacency_count(&self) -> usize {
        self.vertices.iter().map(|v| v.adjacency.len()).sum()
    }

    /// Distinct raw edges as `(source, target)` name pairs.
    pub fn edge_set(&self) -> BTreeSet<(String, String)> {
        self.edges
            .iter()
            .map(|e| (e.source.clone(), e.target.clone()))
            .collect()
    }

    /// Names of vertices with a stored `u u` edge.
    pub fn self_loops(&self) -> HashSet<&str> {
        self.edges
            .iter()
            .filter(|e| e.source == e.target)
            .map(|e| e.source.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SccResult {
    /// Components in discovery order, members in visitation order.
    pub components: Vec<Vec<String>>,
    pub component_of: HashMap<String, usize>,
    pub cyclic_component: Vec<bool>,
    pub elapsed: Duration,
}

impl SccResult {
    pub fn cyclic_count(&self) -> usize {
        self.cyclic_component.iter().filter(|&&b| b).count()
    }

    pub fn largest_component(&self) -> usize {
        self.components.iter().map(|c| c.len()).max().unwrap_or(0)
    }
}
