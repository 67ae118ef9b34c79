//! Export of read-only graph snapshots.
//!
//! DOT (Graphviz) and GraphML render the graph for viewers; the JSON form
//! ([`GraphExport`]) is a plain serde structure for tooling. None of the
//! formats is read back.

use std::fmt::{self, Write as _};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::graph::{CredibilityGraph, Label, Vertex};

/// Graphviz `rankdir`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RankDir {
    Lr,
    Rl,
    Tb,
    #[default]
    Bt,
}

impl RankDir {
    pub fn as_str(self) -> &'static str {
        match self {
            RankDir::Lr => "LR",
            RankDir::Rl => "RL",
            RankDir::Tb => "TB",
            RankDir::Bt => "BT",
        }
    }
}

/// Rendering options for [`to_dot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotOptions {
    pub rank_dir: RankDir,
    /// Label edges with their reporter.
    pub edge_labels: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            rank_dir: RankDir::default(),
            edge_labels: true,
        }
    }
}

fn dot_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render as a Graphviz digraph. Every vertex is listed, isolated ones included.
pub fn to_dot<N, L>(graph: &CredibilityGraph<N, L>, options: &DotOptions) -> String
where
    N: Vertex + fmt::Display,
    L: Label + fmt::Display,
{
    let mut out = String::from("digraph G {\n");
    let _ = writeln!(out, "  rankdir={};", options.rank_dir.as_str());
    for vertex in graph.vertices() {
        let _ = writeln!(out, "  {};", dot_quote(&vertex.to_string()));
    }
    for obj in graph.edges() {
        let source = dot_quote(&obj.source.to_string());
        let target = dot_quote(&obj.target.to_string());
        if options.edge_labels {
            let label = dot_quote(&obj.reporter.to_string());
            let _ = writeln!(out, "  {source} -> {target} [label={label}];");
        } else {
            let _ = writeln!(out, "  {source} -> {target};");
        }
    }
    out.push_str("}\n");
    out
}

/// Render as GraphML with vertex and edge labels in a `Text` attribute.
pub fn to_graphml<N, L>(graph: &CredibilityGraph<N, L>) -> String
where
    N: Vertex + fmt::Display,
    L: Label + fmt::Display,
{
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<graphml xmlns=\"http://graphml.graphdrawing.org/xmlns\">\n");
    out.push_str("  <key id=\"vertex_label\" for=\"node\" attr.name=\"Text\" attr.type=\"string\"/>\n");
    out.push_str("  <key id=\"edge_label\" for=\"edge\" attr.name=\"Text\" attr.type=\"string\"/>\n");
    out.push_str("  <graph edgedefault=\"directed\">\n");
    for vertex in graph.vertices() {
        let id = xml_escape(&vertex.to_string());
        let _ = writeln!(
            out,
            "    <node id=\"{id}\">\n      <data key=\"vertex_label\">{id}</data>\n    </node>"
        );
    }
    for (i, obj) in graph.edges().enumerate() {
        let _ = writeln!(
            out,
            "    <edge id=\"e{i}\" source=\"{}\" target=\"{}\">\n      <data key=\"edge_label\">{}</data>\n    </edge>",
            xml_escape(&obj.source.to_string()),
            xml_escape(&obj.target.to_string()),
            xml_escape(&obj.reporter.to_string()),
        );
    }
    out.push_str("  </graph>\n</graphml>\n");
    out
}

/// Exported edge with display-formatted endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeExport {
    pub source: String,
    pub target: String,
    pub reporter: String,
}

/// JSON-friendly snapshot of a credibility graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    /// Vertices in insertion order.
    pub vertices: Vec<String>,
    /// Edges in insertion order.
    pub edges: Vec<EdgeExport>,
}

impl GraphExport {
    pub fn from_graph<N, L>(graph: &CredibilityGraph<N, L>) -> Self
    where
        N: Vertex + fmt::Display,
        L: Label + fmt::Display,
    {
        Self {
            vertices: graph.vertices().map(ToString::to_string).collect(),
            edges: graph
                .edges()
                .map(|obj| EdgeExport {
                    source: obj.source.to_string(),
                    target: obj.target.to_string(),
                    reporter: obj.reporter.to_string(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(|e| ExportError::Serialization {
            message: e.to_string(),
        })
    }
}

/// Write rendered output to `path`.
pub fn write_to(path: &Path, content: &str) -> Result<(), ExportError> {
    std::fs::write(path, content).map_err(|e| ExportError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
