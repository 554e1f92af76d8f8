use crate::app::cli::Cli;
use crate::app::models::RuntimeCriteria;
use crate::app::params::SearchParameters;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// One preset table from presets.toml; every toggle is optional.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
struct Preset {
    show_hidden: Option<bool>,
    regex: Option<bool>,
    regex_matches: Option<bool>,
    root: Option<bool>,
}

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, Preset>,
}

/// Loads the preset map from ~/.config/findlens/presets.toml.
fn load_presets_file() -> Result<HashMap<String, Preset>> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home
        .join(".config")
        .join("findlens")
        .join("presets.toml");
    load_presets_from(&config_path)
}

fn load_presets_from(config_path: &Path) -> Result<HashMap<String, Preset>> {
    if !config_path.exists() {
        return Ok(HashMap::new());
    }

    let content = fs::read_to_string(config_path)
        .context(format!("Failed to read presets at {:?}", config_path))?;

    let parsed: PresetsFile = toml::from_str(&content).context("Failed to parse presets.toml")?;

    Ok(parsed.presets)
}

/// Picks the requested preset, the `[default]` table when none is named,
/// or built-in defaults (everything off) as the last resort.
fn select_preset(presets: &HashMap<String, Preset>, requested: Option<&str>) -> Preset {
    match requested {
        Some(name) => presets.get(name).cloned().unwrap_or_else(|| {
            log::warn!("Preset '{}' not found in presets.toml; using defaults.", name);
            Preset::default()
        }),
        None => presets.get("default").cloned().unwrap_or_default(),
    }
}

/// CLI toggles assert a flag; the preset supplies the persisted baseline.
fn merge_flag(cli_flag: bool, preset_value: Option<bool>) -> bool {
    cli_flag || preset_value.unwrap_or(false)
}

pub fn resolve_criteria(cli: &Cli) -> Result<RuntimeCriteria> {
    let presets = load_presets_file()?;
    Ok(resolve_with_presets(cli, &presets))
}

fn resolve_with_presets(cli: &Cli, presets: &HashMap<String, Preset>) -> RuntimeCriteria {
    let preset = select_preset(presets, cli.preset.as_deref());

    let params = SearchParameters::from_booleans(
        merge_flag(cli.show_hidden, preset.show_hidden),
        merge_flag(cli.regex, preset.regex),
        merge_flag(cli.regex_matches, preset.regex_matches),
        merge_flag(cli.root, preset.root),
    );

    RuntimeCriteria {
        query: cli.query.clone(),
        params,
        explain: cli.explain,
        in_file: cli.in_file.clone(),
    }
}
