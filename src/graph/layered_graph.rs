//! Arena-backed graph of depth-leveled vertices and colored edges.
//!
//! Vertices and edges live in vectors indexed by their ids, so ids stay dense
//! and zero-based for the whole lifetime of a graph. Nothing is ever removed.

use std::collections::BTreeMap;
use std::fmt;
use std::io;

use super::Color;
use crate::export::{export_to_string, JsonExporter};

/// Identifier of a vertex; equal to its position in the graph.
pub type VertexId = usize;

/// Identifier of an edge; equal to its position in the graph.
pub type EdgeId = usize;

/// Errors raised by graph mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An endpoint does not name an existing vertex.
    #[error("Vertex {id} does not exist (graph has {vertex_count} vertices)")]
    VertexOutOfRange {
        /// The offending id
        id: VertexId,
        /// Number of vertices at the time of the call
        vertex_count: usize,
    },

    /// The strict policy forbids a second edge between the same pair.
    #[error("Vertices {a} and {b} are already connected")]
    AlreadyConnected {
        /// First endpoint
        a: VertexId,
        /// Second endpoint
        b: VertexId,
    },
}

/// Result type alias for graph mutations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Controls whether parallel edges may be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BindPolicy {
    /// Any pair may be bound any number of times
    #[default]
    Permissive,
    /// Binding an already connected pair is an error
    Strict,
}

impl fmt::Display for BindPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permissive => write!(f, "permissive"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// A vertex and the edges incident to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    depth: usize,
    incident_edges: Vec<EdgeId>,
}

impl Vertex {
    fn new(id: VertexId, depth: usize) -> Self {
        Self {
            id,
            depth,
            incident_edges: Vec::new(),
        }
    }

    /// Returns the vertex id.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the level the vertex was created at.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns incident edge ids in the order they were bound.
    pub fn incident_edges(&self) -> &[EdgeId] {
        &self.incident_edges
    }

    fn attach(&mut self, edge: EdgeId) {
        if !self.incident_edges.contains(&edge) {
            self.incident_edges.push(edge);
        }
    }
}

/// An edge between two vertices. Both endpoints may be the same vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    id: EdgeId,
    endpoint_a: VertexId,
    endpoint_b: VertexId,
    color: Color,
}

impl Edge {
    /// Returns the edge id.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns both endpoints in the order they were bound.
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.endpoint_a, self.endpoint_b)
    }

    /// Returns the edge color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns true if both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.endpoint_a == self.endpoint_b
    }
}

/// Graph of depth-leveled vertices joined by colored edges.
///
/// Besides the vertex and edge arenas the graph keeps, for every vertex, a map
/// from incident edge id to the vertex on the other end, plus a count of edges
/// per color.
///
/// # Example
///
/// ```rust
/// use graphgen::graph::{Color, Graph};
///
/// let mut graph = Graph::new();
/// let root = graph.add_vertex(0);
/// let child = graph.add_vertex(1);
///
/// graph.bind(root, child).unwrap();
/// graph.bind_vertices(child, child, Color::Green).unwrap();
///
/// assert!(graph.are_connected(root, child));
/// assert_eq!(graph.edges_amount(), 2);
/// assert_eq!(graph.color_count(Color::Green), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    /// vertex -> incident edge -> neighbor
    adjacency: Vec<BTreeMap<EdgeId, VertexId>>,
    color_counts: [usize; Color::COUNT],
    target_depth: Option<usize>,
    policy: BindPolicy,
}

impl Graph {
    /// Creates an empty permissive graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph that remembers the depth it will be grown to.
    pub fn with_target_depth(depth: usize) -> Self {
        Self {
            target_depth: Some(depth),
            ..Self::default()
        }
    }

    /// Sets the bind policy.
    pub fn with_policy(mut self, policy: BindPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the active bind policy.
    pub fn policy(&self) -> BindPolicy {
        self.policy
    }

    /// Returns the depth given at construction, if any.
    pub fn target_depth(&self) -> Option<usize> {
        self.target_depth
    }

    /// Appends a vertex at `depth` and returns its id.
    pub fn add_vertex(&mut self, depth: usize) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(Vertex::new(id, depth));
        self.adjacency.push(BTreeMap::new());
        id
    }

    /// Binds two vertices with a grey edge.
    ///
    /// # Errors
    ///
    /// See [`Graph::bind_vertices`].
    pub fn bind(&mut self, a: VertexId, b: VertexId) -> GraphResult<EdgeId> {
        self.bind_vertices(a, b, Color::default())
    }

    /// Creates an edge of the given color between `a` and `b`.
    ///
    /// The new edge id is appended to both endpoints' incident lists (once
    /// for a self-loop). On error the graph is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint does not
    /// exist, or [`GraphError::AlreadyConnected`] if the policy is strict and
    /// the pair already shares an edge.
    pub fn bind_vertices(&mut self, a: VertexId, b: VertexId, color: Color) -> GraphResult<EdgeId> {
        self.check_vertex(a)?;
        self.check_vertex(b)?;
        if self.policy == BindPolicy::Strict && self.are_connected(a, b) {
            return Err(GraphError::AlreadyConnected { a, b });
        }

        let id = self.edges.len();
        self.edges.push(Edge {
            id,
            endpoint_a: a,
            endpoint_b: b,
            color,
        });
        self.attach(a, id, b);
        if a != b {
            self.attach(b, id, a);
        }
        self.color_counts[color.index()] += 1;
        Ok(id)
    }

    /// Returns true if some edge joins `a` and `b`.
    ///
    /// Unknown ids are never connected.
    pub fn are_connected(&self, a: VertexId, b: VertexId) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbors| neighbors.values().any(|&n| n == b))
    }

    /// Returns the neighbors of `id` keyed by the edge leading to them.
    pub fn neighbors(&self, id: VertexId) -> Option<&BTreeMap<EdgeId, VertexId>> {
        self.adjacency.get(id)
    }

    /// Serializes the graph to the JSON document layout.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> io::Result<String> {
        export_to_string(&JsonExporter::default(), self)
    }

    /// Looks up a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Looks up an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// All vertices in id order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges in id order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of vertices.
    pub fn vertices_amount(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    pub fn edges_amount(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns how many edges carry `color`.
    pub fn color_count(&self, color: Color) -> usize {
        self.color_counts[color.index()]
    }

    /// Returns the edge count of every color, in [`Color::ALL`] order.
    pub fn color_histogram(&self) -> [(Color, usize); Color::COUNT] {
        Color::ALL.map(|color| (color, self.color_count(color)))
    }

    fn check_vertex(&self, id: VertexId) -> GraphResult<()> {
        if id < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                id,
                vertex_count: self.vertices.len(),
            })
        }
    }

    fn attach(&mut self, vertex: VertexId, edge: EdgeId, neighbor: VertexId) {
        if let Some(v) = self.vertices.get_mut(vertex) {
            v.attach(edge);
        }
        if let Some(neighbors) = self.adjacency.get_mut(vertex) {
            neighbors.insert(edge, neighbor);
        }
    }
}
