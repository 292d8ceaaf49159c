//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{QcompassError, QcompassResult};

use super::types::{ColorMode, Config, OutputFormat};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Effective configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> QcompassResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| QcompassError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit path (must exist), else the user config file if present, else
/// defaults. Environment overrides are applied last.
pub fn resolve(explicit: Option<&Path>) -> QcompassResult<LoadedConfig> {
    let path = match explicit {
        Some(path) if !path.exists() => {
            return Err(QcompassError::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Some(path) => Some(path.to_path_buf()),
        None => user_config_path().filter(|p| p.exists()),
    };

    let loaded = match path {
        Some(path) => {
            log::info!("loading config from {}", path.display());
            let (config, warnings) = load_with_warnings(&path)?;
            for w in &warnings {
                log::debug!("unknown config key '{}' in {}", w.key, w.file.display());
            }
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => {
            log::debug!("no config file found, using defaults");
            LoadedConfig::default()
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

/// `<config dir>/qcompass/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("qcompass").join("config.toml"))
}

/// Apply environment variable overrides (QCOMPASS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // QCOMPASS_COLOR
    if let Some(color) = get_env("QCOMPASS_COLOR").as_deref().and_then(ColorMode::parse) {
        config.output.color = color;
    }

    // QCOMPASS_FORMAT
    if let Some(format) = get_env("QCOMPASS_FORMAT")
        .as_deref()
        .and_then(OutputFormat::parse)
    {
        config.output.format = format;
    }

    // QCOMPASS_UNICODE
    if let Some(val) = get_env("QCOMPASS_UNICODE") {
        config.output.unicode = val.to_lowercase() != "false" && val != "0";
    }

    config
}

/// First line assigning `key` (`key = ...`) or opening a `[key]` table.
/// Comments and longer keys that merely contain it do not match.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim();
            if let Some(rest) = line.strip_prefix(key) {
                return rest.trim_start().starts_with('=');
            }
            line.strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .is_some_and(|table| table.trim() == key)
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["output", "color", "unicode", "format"];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("color", "color"), 0);
        assert_eq!(levenshtein("colour", "color"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
    }

    #[test]
    fn test_suggest_key() {
        assert_eq!(suggest_key("colour"), Some("color".to_string()));
        assert_eq!(suggest_key("fromat"), Some("format".to_string()));
        assert_eq!(suggest_key("precision"), None);
    }

    #[test]
    fn test_find_line_number() {
        let content = "[output]\ncolour = \"never\"\n";
        assert_eq!(find_line_number(content, "colour"), Some(2));
        assert_eq!(find_line_number(content, "missing"), None);
    }

    #[test]
    fn test_find_line_number_skips_comments_and_longer_keys() {
        let content = "# colour is British\n[output]\nmy_colour_x = 1\n  colour= \"never\"\n";
        assert_eq!(find_line_number(content, "colour"), Some(4));
    }

    #[test]
    fn test_find_line_number_matches_table_header() {
        let content = "# [display] is unknown\n[display]\nwidth = 3\n";
        assert_eq!(find_line_number(content, "display"), Some(2));
    }
}
