//! Configuration loading

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StitchError, StitchResult};

use super::types::Config;

/// File name looked up in the project directory
pub const PROJECT_CONFIG_FILE: &str = "stitch.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StitchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content; `path` is only used for messages.
pub fn parse_with_warnings(content: &str, path: &Path) -> StitchResult<(Config, Vec<ConfigWarning>)> {
    let mut ignored: Vec<String> = Vec::new();
    let config: Config = serde_ignored::deserialize(toml::de::Deserializer::new(content), |p| {
        ignored.push(p.to_string());
    })
    .map_err(|e| StitchError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = ignored
        .iter()
        .map(|dotted| {
            let (section, key) = dotted.rsplit_once('.').unwrap_or(("", dotted.as_str()));
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: key_line(content, section, key),
                suggestion: suggest_key(section, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    tracing::warn!("{}", warning);
                }
                tracing::debug!(path = %path.display(), "loaded config");
                return with_env_overrides(config);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            }
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (STITCH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |name| std::env::var(name).ok())
}

/// Apply overrides from an arbitrary variable source
pub fn apply_env_overrides<F>(mut config: Config, var: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // STITCH_NAMESPACE
    if let Some(namespace) = var("STITCH_NAMESPACE").filter(|v| !v.is_empty()) {
        config.deployment.namespace = Some(namespace);
    }

    // STITCH_MAX_PRICE
    if let Some(raw) = var("STITCH_MAX_PRICE") {
        match raw.trim().parse::<f64>() {
            Ok(price) => config.deployment.max_price = Some(price),
            Err(_) => tracing::warn!(value = %raw, "invalid STITCH_MAX_PRICE, ignoring"),
        }
    }

    // STITCH_ADMIN_ACL (comma-separated)
    if let Some(acl) = var("STITCH_ADMIN_ACL") {
        let parsed: Vec<String> = acl
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        config.deployment.admin_acl = Some(parsed);
    }

    // STITCH_PRETTY
    if let Some(val) = var("STITCH_PRETTY") {
        config.output.pretty = Some(val.to_lowercase() != "false" && val != "0");
    }

    config
}

/// `~/.config/stitch/config.toml`, honouring XDG_CONFIG_HOME
fn user_config_path() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("stitch/config.toml"))
}

/// Keys accepted in each table of `stitch.toml` ("" is the top level)
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("", &["deployment", "output"]),
    ("deployment", &["max_price", "namespace", "admin_acl", "regions"]),
    ("output", &["pretty"]),
];

/// 1-based line of `key` inside `[section]`, or of a `[key]` table header
fn key_line(content: &str, section: &str, key: &str) -> Option<usize> {
    let header = format!("[{}]", section);
    let mut in_section = section.is_empty();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim_start();
        if line.starts_with('[') && !line.starts_with("[[") {
            if line.trim_start_matches('[').starts_with(key) && section.is_empty() {
                return Some(index + 1);
            }
            in_section = line.starts_with(&header);
            continue;
        }
        if in_section && line.starts_with(key) {
            return Some(index + 1);
        }
    }
    None
}

/// Closest known key of the same table, if it is at most two edits away
fn suggest_key(section: &str, unknown: &str) -> Option<String> {
    let (_, candidates) = KNOWN_KEYS.iter().find(|(name, _)| *name == section)?;
    candidates
        .iter()
        .map(|candidate| (edit_distance(unknown, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}

/// Levenshtein distance over chars, one row at a time
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ca != cb));
            diagonal = above;
        }
    }
    row[b.len()]
}
