use regex::{Regex, RegexBuilder};
use std::path::Path;
use thiserror::Error;

use crate::app::models::NameVerdict;
use crate::app::params::SearchParameters;

/// Errors from compiling a query into a [`NameMatcher`].
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("search query is empty")]
    EmptyQuery,
    #[error("invalid regular expression '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A compiled name matcher for one search request.
///
/// Candidates may be bare names or paths; matching always applies to the
/// final path component.
#[derive(Debug)]
pub struct NameMatcher {
    pattern: Regex,
    show_hidden: bool,
}

impl NameMatcher {
    /// Compiles `query` under `params`.
    ///
    /// Without REGEX the query is a literal fragment with `*`/`?`
    /// wildcards, matched case-insensitively; other metacharacters stay
    /// literal. With REGEX the query is a raw regular expression, matched
    /// case-sensitively. REGEX_MATCHES anchors the pattern to the whole
    /// name in both modes.
    pub fn compile(query: &str, params: SearchParameters) -> Result<Self, PatternError> {
        if query.is_empty() {
            return Err(PatternError::EmptyQuery);
        }

        let is_regex = params.contains(SearchParameters::REGEX);
        let base = if is_regex {
            query.to_string()
        } else {
            wildcards_to_regex(query)
        };

        let anchored = if params.contains(SearchParameters::REGEX_MATCHES) {
            format!("^(?:{base})$")
        } else {
            base
        };

        let pattern = RegexBuilder::new(&anchored)
            .case_insensitive(!is_regex)
            .build()
            .map_err(|source| PatternError::InvalidRegex {
                pattern: query.to_string(),
                source,
            })?;

        Ok(Self {
            pattern,
            show_hidden: params.contains(SearchParameters::SHOW_HIDDEN_FILES),
        })
    }

    /// True if the file-name portion of `candidate` matches the pattern.
    /// Hidden-file gating is not applied here; see [`NameMatcher::evaluate`].
    pub fn matches(&self, candidate: &str) -> bool {
        let name = file_name_of(candidate);
        !name.is_empty() && self.pattern.is_match(name)
    }

    /// Full per-candidate evaluation, including hidden-file gating.
    pub fn evaluate(&self, candidate: &str) -> NameVerdict {
        let name = file_name_of(candidate);
        if name.is_empty() {
            return NameVerdict::NoMatch;
        }
        if !self.show_hidden && name.starts_with('.') {
            return NameVerdict::SkippedHidden;
        }
        if self.pattern.is_match(name) {
            NameVerdict::Matched
        } else {
            NameVerdict::NoMatch
        }
    }
}

/// Final path component of a candidate, or "" when it has none (e.g. `..`).
fn file_name_of(candidate: &str) -> &str {
    Path::new(candidate)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("")
}

/// Translates a simple query into regex syntax: `*` becomes `.*`, `?`
/// becomes `.`, every other character is matched literally.
fn wildcards_to_regex(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 8);
    let mut literal = String::new();
    for ch in query.chars() {
        match ch {
            '*' => {
                pattern.push_str(&regex::escape(&literal));
                literal.clear();
                pattern.push_str(".*");
            }
            '?' => {
                pattern.push_str(&regex::escape(&literal));
                literal.clear();
                pattern.push('.');
            }
            other => literal.push(other),
        }
    }
    pattern.push_str(&regex::escape(&literal));
    pattern
}
