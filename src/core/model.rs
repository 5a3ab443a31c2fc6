//! Report model
//!
//! Serializable view of a finished scan. Machine-readable output formats
//! (json/jsonl) are rendered from these types; the text format reads the
//! index directly.

use serde::{Deserialize, Serialize};

use crate::scan::engine::{EngineState, Mode};
use crate::scan::index::{IndexStats, OccurrenceEntry};

/// Occurrences of a token in one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    pub file: String,
    /// Ascending 1-based line numbers
    pub lines: Vec<u32>,
}

/// One token with everywhere it occurs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenReport {
    pub token: String,
    pub references: usize,
    pub files: Vec<FileReport>,
}

impl TokenReport {
    pub fn new(token: &str, entry: &OccurrenceEntry) -> Self {
        Self {
            token: token.to_string(),
            references: entry.references(),
            files: entry
                .files()
                .map(|(file, lines)| FileReport {
                    file: file.to_string(),
                    lines: lines.iter().copied().collect(),
                })
                .collect(),
        }
    }
}

/// A token line: the full record, or only its name with `--tokens-only`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenLine {
    Full(TokenReport),
    Name(String),
}

/// Summary statistics of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    pub total_tokens: usize,
    pub single_reference: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_token: Option<String>,
    pub max_references: usize,
    /// Only meaningful in spell-check mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_checked: Option<usize>,
}

impl StatsReport {
    pub fn new(stats: &IndexStats, mode: Mode, state: &EngineState) -> Self {
        Self {
            total_tokens: stats.total_tokens,
            single_reference: stats.single_reference,
            max_token: stats.max_references.as_ref().map(|max| max.token.clone()),
            max_references: stats
                .max_references
                .as_ref()
                .map_or(0, |max| max.references),
            tokens_checked: (mode == Mode::SpellCheck).then_some(state.tokens_checked),
        }
    }
}

/// Whole report as a single document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    pub tokens: Vec<TokenLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsReport>,
}
