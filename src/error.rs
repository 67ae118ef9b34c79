//! Rich diagnostic error types for credibility graphs.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text. Rejected revisions are *not* errors:
//! expansion and revision report refusal through their `bool` return value.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error, Diagnostic)]
pub enum CredError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Graph errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    #[error("inconsistent knowledge base: {left} < {right} and {right} < {left}")]
    #[diagnostic(
        code(cred::graph::inconsistent),
        help(
            "Both vertices reach each other, so the knowledge base contains a cycle. \
             Only `expansion` and `merge` may add edges; a graph built with \
             `KnowledgeBase::from_graph` must already be acyclic, or be merged so \
             its cycles are resolved."
        )
    )]
    Inconsistent { left: String, right: String },

    #[error("credibility graph contains a cycle through {vertex}")]
    #[diagnostic(
        code(cred::graph::cyclic),
        help("Ranks are only defined on acyclic graphs. Merge or contract the cycle first.")
    )]
    Cyclic { vertex: String },
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("expected {expected}, found \"{found}\" at offset {offset}")]
    #[diagnostic(
        code(cred::parse::unexpected_token),
        help(
            "Credibility objects are written as comma-separated triples: \
             `(source, target, reporter), (source, target, reporter)`."
        )
    )]
    UnexpectedToken {
        expected: String,
        found: String,
        offset: usize,
    },

    #[error("unexpected end of input, expected {expected}")]
    #[diagnostic(
        code(cred::parse::unexpected_end),
        help("Every triple needs three comma-separated values and a closing parenthesis.")
    )]
    UnexpectedEnd { expected: String },

    #[error("invalid value \"{atom}\" at offset {offset}: {message}")]
    #[diagnostic(
        code(cred::parse::invalid_atom),
        help(
            "The token could not be converted into a vertex or reporter. \
             Numeric knowledge bases need integer vertices and numeric reporters."
        )
    )]
    InvalidAtom {
        atom: String,
        offset: usize,
        message: String,
    },
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ExportError {
    #[error("failed to write export to {path}")]
    #[diagnostic(
        code(cred::export::io),
        help("Check that the output directory exists and is writable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {message}")]
    #[diagnostic(
        code(cred::export::serde),
        help("The graph snapshot could not be serialized to JSON.")
    )]
    Serialization { message: String },
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(cred::config::read),
        help("Ensure the config file exists and is valid TOML.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {path}: {message}")]
    #[diagnostic(
        code(cred::config::parse),
        help(
            "Check the TOML syntax. Valid policies are `reachability`, `accuracy` \
             and `similarity`; valid rank directions are LR, RL, TB and BT."
        )
    )]
    Parse { path: String, message: String },

    #[error("failed to write config: {path}")]
    #[diagnostic(
        code(cred::config::write),
        help("Ensure you have write permissions to the config directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for functions returning crate results.
pub type CredResult<T> = std::result::Result<T, CredError>;
