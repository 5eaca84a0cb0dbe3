//! Configuration loading

use std::fs;
use std::path::Path;

use super::types::{ConfigError, ManagerConfig};
use super::PROJECT_CONFIG_FILE;
use crate::config::ConfigWarning;

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(ManagerConfig, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: ManagerConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
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
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> ManagerConfig {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            match ManagerConfig::load(&project_config) {
                Ok(config) => return with_env_overrides(config),
                Err(err) => tracing::warn!(%err, "ignoring project config"),
            }
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join("nestset").join("config.toml");
        if user_config.exists() {
            match ManagerConfig::load(&user_config) {
                Ok(config) => return with_env_overrides(config),
                Err(err) => tracing::warn!(%err, "ignoring user config"),
            }
        }
    }

    with_env_overrides(ManagerConfig::default())
}

/// Apply environment variable overrides (NESTSET_* prefix)
pub fn with_env_overrides(config: ManagerConfig) -> ManagerConfig {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup` instead of the process environment
pub fn with_overrides_from(
    mut config: ManagerConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ManagerConfig {
    // NESTSET_AUTOLOAD
    if let Some(value) = lookup("NESTSET_AUTOLOAD") {
        match parse_flag(&value) {
            Some(autoload) => config.manager.autoload = autoload,
            None => tracing::warn!(value = %value, "ignoring invalid NESTSET_AUTOLOAD"),
        }
    }

    // NESTSET_PARAMS_FIELD
    if let Some(field) = lookup("NESTSET_PARAMS_FIELD") {
        if !field.trim().is_empty() {
            config.menu.params_field = field.trim().to_string();
        }
    }

    config
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "manager",
        "autoload",
        "columns",
        "id",
        "root",
        "left",
        "right",
        "depth",
        "is_default",
        "menu",
        "params_field",
        "search_section",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
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

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
