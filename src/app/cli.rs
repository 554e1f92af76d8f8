use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Check file names against file-manager search criteria"
)]
pub struct Cli {
    /// The search query: a literal fragment with '*'/'?' wildcards, or a
    /// regular expression with --regex
    pub query: String,

    /// Candidate names or paths to evaluate; read from stdin when omitted
    #[arg(conflicts_with = "in_file")]
    pub candidates: Vec<String>,

    /// Use a predefined set of toggles from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Consider hidden (dot) files as candidates
    #[arg(long)]
    pub show_hidden: bool,

    /// Treat the query as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Require the pattern to match the whole name, not a substring
    #[arg(long)]
    pub regex_matches: bool,

    /// Permit the search to reach privileged locations (recorded for the
    /// search executor)
    #[arg(long)]
    pub root: bool,

    /// Annotate every candidate with its verdict and show the active flags
    #[arg(long)]
    pub explain: bool,

    /// Report occurrences of the query inside this file instead of
    /// matching candidate names
    #[arg(long, value_name = "PATH")]
    pub in_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_query_and_candidates_parse_positionally() {
        let cli = Cli::try_parse_from(["findlens", "todo", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.query, "todo");
        assert_eq!(cli.candidates, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_toggles_default_to_off() {
        let cli = Cli::try_parse_from(["findlens", "todo"]).unwrap();
        assert!(!cli.show_hidden && !cli.regex && !cli.regex_matches && !cli.root);
        assert!(cli.candidates.is_empty());
    }

    #[test]
    fn test_candidates_conflict_with_in_file() {
        let result = Cli::try_parse_from(["findlens", "todo", "a.txt", "--in-file", "notes.md"]);
        assert!(result.is_err());
    }
}
