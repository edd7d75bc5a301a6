//! Structural summary of a finished graph, computed with petgraph.

use petgraph::algo::{connected_components, is_cyclic_undirected};
use petgraph::graph::{NodeIndex, UnGraph};

use super::{Color, Graph};

/// Copies a graph into a petgraph `UnGraph`.
///
/// Node weights are vertex depths and edge weights are colors. Node and edge
/// indices equal the vertex and edge ids.
pub fn to_petgraph(graph: &Graph) -> UnGraph<usize, Color> {
    let mut pg = UnGraph::with_capacity(graph.vertices_amount(), graph.edges_amount());
    for vertex in graph.vertices() {
        pg.add_node(vertex.depth());
    }
    for edge in graph.edges() {
        let (a, b) = edge.endpoints();
        pg.add_edge(NodeIndex::new(a), NodeIndex::new(b), edge.color());
    }
    pg
}

/// Returns true if the grey edges alone form a spanning tree.
///
/// That is: exactly `V - 1` grey edges, no cycle among them, and every
/// vertex reachable from every other.
pub fn tree_edges_span(graph: &Graph) -> bool {
    let tree = to_petgraph(graph).filter_map(
        |_, depth| Some(*depth),
        |_, color| (*color == Color::Grey).then_some(*color),
    );

    tree.node_count() > 0
        && tree.edge_count() + 1 == tree.node_count()
        && !is_cyclic_undirected(&tree)
        && connected_components(&tree) == 1
}

/// Counts and shape of a graph, used for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSummary {
    /// Number of vertices
    pub vertices: usize,
    /// Number of edges
    pub edges: usize,
    /// Deepest level that holds a vertex
    pub deepest_level: Option<usize>,
    /// Number of self-loops
    pub self_loops: usize,
    /// Number of connected components
    pub components: usize,
    /// Edge count per color
    pub colors: [(Color, usize); Color::COUNT],
}

impl GraphSummary {
    /// Summarizes `graph`.
    pub fn of(graph: &Graph) -> Self {
        Self {
            vertices: graph.vertices_amount(),
            edges: graph.edges_amount(),
            deepest_level: graph.vertices().iter().map(|v| v.depth()).max(),
            self_loops: graph.edges().iter().filter(|e| e.is_self_loop()).count(),
            components: connected_components(&to_petgraph(graph)),
            colors: graph.color_histogram(),
        }
    }

    /// Number of non-grey edges.
    pub fn cross_links(&self) -> usize {
        self.colors
            .iter()
            .filter(|(color, _)| color.is_cross_link())
            .map(|(_, count)| count)
            .sum()
    }
}
