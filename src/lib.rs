// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # credibility-graphs
//!
//! Belief revision over credibility graphs. A credibility graph is a directed
//! multigraph whose edges are claims "source is less credible than target,
//! according to reporter"; its reachability relation is a partial order of
//! credibility.
//!
//! ## Architecture
//!
//! - **Graph** (`graph`): petgraph-backed multigraph, reachability, path and cycle enumeration
//! - **Credibility** (`credibility`): pluggable policies ranking reporters
//! - **Extremes** (`extremes`): least/most credible subsets under a partial order
//! - **Knowledge base** (`kb`): expansion, contraction, revisions, reliability, merge
//! - **Order** (`order`): `PartialOrd` view of vertices and rank layering
//! - **I/O** (`parse`, `export`, `config`): text format, DOT/GraphML/JSON, TOML settings
//!
//! ## Library usage
//!
//! ```
//! use credibility_graphs::credibility::Reachability;
//! use credibility_graphs::graph::CredibilityObject;
//! use credibility_graphs::kb::ReporterKb;
//!
//! let mut kb: ReporterKb = ReporterKb::parse(
//!     "(B,F1,F2),(F1,F2,F3),(F2,F3,B),(A1,A2,F1),(A1,A3,F1),(A2,A4,B),(A2,A4,F3),(A3,A4,F2)",
//!     Reachability,
//! )
//! .unwrap();
//!
//! let a1 = "A1".to_string();
//! let a4 = "A4".to_string();
//! assert!(kb.is_less(&a1, &a4));
//! assert!(kb.reliability(&a1, &a4).contains("F1"));
//!
//! // F3 outranks F1, so the contradicting claim wins.
//! let claim = CredibilityObject::new(a4.clone(), a1.clone(), "F3".to_string());
//! assert!(kb.non_prioritized_revision(claim));
//! assert!(kb.is_less(&a4, &a1));
//! ```

pub mod config;
pub mod credibility;
pub mod error;
pub mod export;
pub mod extremes;
pub mod graph;
pub mod kb;
pub mod order;
pub mod parse;
