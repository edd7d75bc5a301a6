//! Graph module for layered, colored graphs.
//!
//! This module provides the [`Graph`] struct, the [`Vertex`] and [`Edge`]
//! records it owns, and the [`Color`] tags carried by edges.
//!
//! # Example
//!
//! ```rust
//! use graphgen::graph::{BindPolicy, Color, Graph};
//!
//! let mut graph = Graph::new().with_policy(BindPolicy::Strict);
//! let root = graph.add_vertex(0);
//! let leaf = graph.add_vertex(1);
//! graph.bind(root, leaf).unwrap();
//!
//! // Strict graphs refuse a second edge between the same pair
//! assert!(graph.bind_vertices(leaf, root, Color::Yellow).is_err());
//! assert_eq!(graph.vertices_amount(), 2);
//! assert_eq!(graph.edges_amount(), 1);
//! ```

mod color;
mod layered_graph;
pub mod summary;

pub use color::Color;
pub use layered_graph::{
    BindPolicy, Edge, EdgeId, Graph, GraphError, GraphResult, Vertex, VertexId,
};
pub use summary::{tree_edges_span, GraphSummary};
