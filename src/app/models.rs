use std::path::PathBuf;

use crate::app::params::SearchParameters;

/// Represents the final criteria for one run after merging presets and CLI toggles.
#[derive(Debug, Clone)]
pub struct RuntimeCriteria {
    pub query: String,
    pub params: SearchParameters,
    pub explain: bool,
    pub in_file: Option<PathBuf>, // Some => occurrence mode instead of name matching
}

/// Outcome of evaluating a single candidate name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameVerdict {
    /// The name satisfies the query under the active parameters.
    Matched,
    /// The name was considered but did not match.
    NoMatch,
    /// The name is a dot-name and SHOW_HIDDEN_FILES is not set.
    SkippedHidden,
}

/// A single hit of the query inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// Byte offset of the first byte of the hit.
    pub start: usize,
    /// Byte offset one past the last byte of the hit.
    pub end: usize,
    /// 1-based line number the hit starts on.
    pub line: usize,
}
