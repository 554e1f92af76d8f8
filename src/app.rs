// Declare modules
pub mod cli;
pub mod config;
pub mod formatter;
pub mod matcher;
pub mod models;
pub mod params;
pub mod text;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, BufRead};

use self::cli::Cli;
use self::config::resolve_criteria;
use self::formatter::OutputGenerator;
use self::matcher::NameMatcher;
use self::models::NameVerdict;
use self::params::SearchParameters;
use self::text::find_occurrences;

/// Initializes components and orchestrates data flow.
/// Returns whether anything matched, for the process exit status.
pub fn run() -> Result<bool> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Criteria (persisted presets merged with CLI toggles)
    let criteria = resolve_criteria(&args)?;
    log::debug!("resolved parameters: {}", criteria.params);
    if criteria.params.contains(SearchParameters::ROOT) {
        log::debug!("ROOT is set; privileged access is up to the search executor");
    }

    // 3. Occurrence mode: scan one file's text instead of matching names
    if let Some(path) = &criteria.in_file {
        let haystack = fs::read_to_string(path)
            .context(format!("Failed to read text from {:?}", path))?;
        let occurrences = find_occurrences(&haystack, &criteria.query);

        if occurrences.is_empty() {
            log::warn!("⚠️ No occurrences of the query in {:?}.", path);
            return Ok(false);
        }
        println!("{}", OutputGenerator::generate_occurrences(&occurrences));
        return Ok(true);
    }

    // 4. Compile the matcher for this request
    let matcher = NameMatcher::compile(&criteria.query, criteria.params)?;

    // 5. Gather candidates: arguments, else one per stdin line
    let candidates = if args.candidates.is_empty() {
        read_stdin_candidates()?
    } else {
        args.candidates
    };
    if candidates.is_empty() {
        log::warn!("💡 Tip: No candidates to evaluate; pass names as arguments or on stdin.");
        return Ok(false);
    }

    // 6. Evaluate every candidate, keeping input order
    let verdicts: Vec<(String, NameVerdict)> = candidates
        .into_iter()
        .map(|name| {
            let verdict = matcher.evaluate(&name);
            (name, verdict)
        })
        .collect();
    let matched = verdicts
        .iter()
        .any(|(_, verdict)| *verdict == NameVerdict::Matched);

    // 7. Render to Stdout
    let output = if criteria.explain {
        OutputGenerator::generate_explain(&criteria, &verdicts)
    } else {
        OutputGenerator::generate_matches(&verdicts)
    };
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(matched)
}

fn read_stdin_candidates() -> Result<Vec<String>> {
    let mut candidates = Vec::new();

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read candidates from stdin")?;
        if !line.is_empty() {
            candidates.push(line);
        }
    }

    Ok(candidates)
}
