//! Export functionality for generated graphs.
//!
//! Graphs are written as JSON. The whole document is rendered in memory
//! before anything touches the disk, so a failed export never leaves a
//! partial file behind.

pub mod json;

pub use json::{EdgeRecord, GraphDocument, JsonExporter, VertexRecord};

use crate::graph::Graph;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Options shared by exporters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Emit the target depth as a top-level field when the graph has one
    pub include_depth: bool,
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the graph to the given writer.
    fn export<W: Write>(&self, graph: &Graph, writer: &mut W) -> io::Result<()>;
}

/// Export a graph to a string.
pub fn export_to_string<E: Exporter>(exporter: &E, graph: &Graph) -> io::Result<String> {
    let mut buffer = Vec::new();
    exporter.export(graph, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Export a graph to `path`, replacing any existing file.
pub fn write_to_path<E: Exporter>(exporter: &E, graph: &Graph, path: &Path) -> io::Result<()> {
    let contents = export_to_string(exporter, graph)?;
    fs::write(path, contents)
}

/// Output paths for a batch of `count` graphs.
///
/// A single graph goes to `base` itself. Larger batches number the files
/// from 1, so `graph.json` becomes `graph1.json`, `graph2.json`, and so on.
pub fn numbered_output_paths(base: &Path, count: usize) -> Vec<PathBuf> {
    if count == 1 {
        return vec![base.to_path_buf()];
    }

    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = base.extension().map(|e| e.to_string_lossy().into_owned());

    (1..=count)
        .map(|index| {
            let name = match &extension {
                Some(ext) => format!("{}{}.{}", stem, index, ext),
                None => format!("{}{}", stem, index),
            };
            base.with_file_name(name)
        })
        .collect()
}
