//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{AppEngineError, AppEngineResult};

use super::types::Config;

/// Project configuration file name
pub const PROJECT_CONFIG_FILE: &str = "appengine.toml";

const USER_CONFIG_DIR: &str = "appengine-deploy";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AppEngineResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| AppEngineError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AppEngineError::InvalidConfig {
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

/// Load from project config, user config, or defaults
///
/// The first file found wins; environment overrides are applied on top.
pub fn load_or_default(project_root: &Path) -> AppEngineResult<LoadedConfig> {
    let candidates = std::iter::once(project_root.join(PROJECT_CONFIG_FILE))
        .chain(user_config_path());

    for candidate in candidates {
        if candidate.is_file() {
            debug!("loading configuration from {}", candidate.display());
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok(LoadedConfig {
                config: with_env_overrides(config),
                warnings,
                source: Some(candidate),
            });
        }
    }

    Ok(LoadedConfig {
        config: with_env_overrides(Config::default()),
        ..LoadedConfig::default()
    })
}

/// `<config_dir>/appengine-deploy/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join("config.toml"))
}

/// Apply environment variable overrides (APPENGINE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable source
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(project_id) = var("APPENGINE_PROJECT_ID") {
        config.deploy.project_id = Some(project_id);
    }
    if let Some(version) = var("APPENGINE_VERSION") {
        config.deploy.version = Some(version);
    }
    if let Some(bucket) = var("APPENGINE_BUCKET") {
        config.deploy.bucket = Some(bucket);
    }
    if let Some(server) = var("APPENGINE_SERVER") {
        config.deploy.server = Some(server);
    }
    if let Some(promote) = var("APPENGINE_PROMOTE") {
        match parse_bool(&promote) {
            Some(promote) => config.deploy.promote = Some(promote),
            None => warn!("ignoring APPENGINE_PROMOTE={}: expected true or false", promote),
        }
    }
    if let Some(dir) = var("APPENGINE_STAGING_DIRECTORY") {
        config.stage.staging_directory = Some(PathBuf::from(dir));
    }
    if let Some(home) = var("APPENGINE_CLOUD_SDK_HOME") {
        config.cloud_sdk.home = Some(PathBuf::from(home));
    }
    if let Some(toggle) = var("DEPLOY_READ_APPENGINE_WEB_XML") {
        config.deploy.read_descriptor = toggle.trim().eq_ignore_ascii_case("true");
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
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
        "project",
        "artifact",
        "source_directory",
        "packaging",
        "compile_target_version",
        "stage",
        "staging_directory",
        "app_engine_directory",
        "docker_directory",
        "extra_files_directories",
        "runtime",
        "dockerfile",
        "enable_quickstart",
        "disable_update_check",
        "enable_jar_splitting",
        "jar_splitting_excludes",
        "compile_encoding",
        "delete_jsps",
        "enable_jar_classes",
        "disable_jar_jsps",
        "deploy",
        "project_id",
        "version",
        "bucket",
        "image_url",
        "promote",
        "server",
        "stop_previous_version",
        "deployables",
        "services",
        "read_descriptor",
        "cloud_sdk",
        "home",
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

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
