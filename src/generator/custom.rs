//! Hand-specified graphs.

use crate::graph::{BindPolicy, Graph, GraphResult, VertexId};

/// Builds a graph from a vertex count and an explicit list of connections.
///
/// Every vertex sits at depth 0 and every connection becomes a grey edge, in
/// the order given.
///
/// # Errors
///
/// Propagates the first [`GraphError`](crate::graph::GraphError) raised while
/// binding, e.g. for a connection naming a vertex past `vertex_count`.
///
/// # Example
///
/// ```rust
/// use graphgen::generator::build_custom;
/// use graphgen::graph::BindPolicy;
///
/// let graph = build_custom(3, &[(0, 1), (1, 2)], BindPolicy::Strict).unwrap();
/// assert_eq!(graph.edges_amount(), 2);
/// assert!(build_custom(2, &[(0, 2)], BindPolicy::Permissive).is_err());
/// ```
pub fn build_custom(
    vertex_count: usize,
    connections: &[(VertexId, VertexId)],
    policy: BindPolicy,
) -> GraphResult<Graph> {
    let mut graph = Graph::new().with_policy(policy);
    for _ in 0..vertex_count {
        graph.add_vertex(0);
    }
    for &(a, b) in connections {
        graph.bind(a, b)?;
    }
    Ok(graph)
}
