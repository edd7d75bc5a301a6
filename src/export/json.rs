//! JSON export implementation.
//!
//! Writes a graph as a document with a `vertices` array and an `edges` array.
//! Key order inside each record is fixed: `id`, `edge_ids`, `depth` for
//! vertices and `id`, `vertex_ids`, `color` for edges.

use super::{ExportOptions, Exporter};
use crate::graph::{Color, EdgeId, Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// JSON exporter implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    options: ExportOptions,
}

impl JsonExporter {
    /// Creates an exporter with the given options.
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }
}

/// Serializable vertex for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexRecord {
    /// Vertex id
    pub id: VertexId,
    /// Incident edge ids in insertion order
    pub edge_ids: Vec<EdgeId>,
    /// Level the vertex was created on
    pub depth: usize,
}

/// Serializable edge for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Edge id
    pub id: EdgeId,
    /// Both endpoints, equal for a self-loop
    pub vertex_ids: [VertexId; 2],
    /// Edge color
    pub color: Color,
}

/// Root JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Target depth, present only when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    /// Every vertex, ordered by id
    pub vertices: Vec<VertexRecord>,
    /// Every edge, ordered by id
    pub edges: Vec<EdgeRecord>,
}

impl GraphDocument {
    /// Snapshots a graph.
    pub fn from_graph(graph: &Graph, options: ExportOptions) -> Self {
        let vertices = graph
            .vertices()
            .iter()
            .map(|v| VertexRecord {
                id: v.id(),
                edge_ids: v.incident_edges().to_vec(),
                depth: v.depth(),
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|e| {
                let (a, b) = e.endpoints();
                EdgeRecord {
                    id: e.id(),
                    vertex_ids: [a, b],
                    color: e.color(),
                }
            })
            .collect();

        Self {
            depth: graph.target_depth().filter(|_| options.include_depth),
            vertices,
            edges,
        }
    }
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, graph: &Graph, writer: &mut W) -> io::Result<()> {
        let document = GraphDocument::from_graph(graph, self.options);

        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
