//! Knowledge-base configuration, persisted as TOML.
//!
//! ```toml
//! policy = "accuracy"
//! max_path_len = 12
//! rank_dir = "LR"
//! edge_labels = true
//! log_filter = "credibility_graphs=debug"
//!
//! [accuracy.3]
//! correct = 3
//! incorrect = 0
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::credibility::{AccuracyTable, PastAccuracy};
use crate::error::ConfigError;
use crate::export::{DotOptions, RankDir};
use crate::graph::Label;

/// Which credibility policy a knowledge base is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// Reporters are vertices, ranked by reachability.
    #[default]
    Reachability,
    /// Reporters are ranked by recorded past accuracy.
    Accuracy,
    /// Reporters are similarity scores, ranked numerically.
    Similarity,
}

/// Knowledge-base settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KbConfig {
    #[serde(default)]
    pub policy: PolicyKind,
    /// Cap on the length of listed paths. Unset means the current edge
    /// count. Revision operations always use the edge count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_path_len: Option<usize>,
    /// DOT rank direction.
    #[serde(default)]
    pub rank_dir: RankDir,
    /// Label DOT edges with their reporter.
    #[serde(default = "default_edge_labels")]
    pub edge_labels: bool,
    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Seed records for the accuracy policy, keyed by reporter.
    #[serde(default)]
    pub accuracy: BTreeMap<String, PastAccuracy>,
}

fn default_edge_labels() -> bool {
    true
}
fn default_log_filter() -> String {
    "info".into()
}

impl Default for KbConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            max_path_len: None,
            rank_dir: RankDir::default(),
            edge_labels: default_edge_labels(),
            log_filter: default_log_filter(),
            accuracy: BTreeMap::new(),
        }
    }
}

impl KbConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Save to a TOML file, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
        std::fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.display().to_string(),
            source: e,
        })
    }

    pub fn dot_options(&self) -> DotOptions {
        DotOptions {
            rank_dir: self.rank_dir,
            edge_labels: self.edge_labels,
        }
    }

    /// Convert the seed records into an accuracy table. Keys that do not
    /// parse as `L` are skipped with a warning.
    pub fn accuracy_table<L>(&self) -> AccuracyTable<L>
    where
        L: Label + FromStr,
    {
        self.accuracy
            .iter()
            .filter_map(|(key, record)| match key.parse::<L>() {
                Ok(reporter) => Some((reporter, *record)),
                Err(_) => {
                    tracing::warn!(reporter = %key, "skipping accuracy record with unparsable reporter");
                    None
                }
            })
            .collect()
    }
}
