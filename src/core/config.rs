//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.gridsort/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

use crate::core::render::{DEFAULT_MIN_CELL_WIDTH, SummaryStyle, Theme};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GridsortConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub cols: Option<usize>,
    pub summary: Option<SummaryStyle>,
    pub min_cell_width: Option<usize>,
    pub color: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub pointer: Option<String>,
    pub moving_pointer: Option<String>,
    pub changed_marker: Option<String>,
    pub selected_color: Option<String>,
    pub moving_color: Option<String>,
    pub changed_color: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SELECTED_COLOR: &str = "cyan";
pub const DEFAULT_MOVING_COLOR: &str = "yellow";
pub const DEFAULT_CHANGED_COLOR: &str = "green";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Colours are kept as names here; the terminal adapter parses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colors {
    pub selected: String,
    pub moving: String,
    pub changed: String,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Column count when the question does not set one.
    pub cols: Option<usize>,
    pub summary: SummaryStyle,
    pub color: bool,
    pub theme: Theme,
    pub colors: Colors,
}

/// Overrides collected from CLI flags (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub cols: Option<usize>,
    pub summary: Option<SummaryStyle>,
    pub no_color: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.gridsort`, where the config file and log live.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".gridsort"))
}

/// Returns the path to `~/.gridsort/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.gridsort/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GridsortConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GridsortConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GridsortConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<GridsortConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(GridsortConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GridsortConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# gridsort Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# cols = 3                  # Columns when the question doesn't say (default: ceil(sqrt(n)))
# summary = "grid"          # "grid" or "minimal" once answered
# min_cell_width = 10
# color = true

# [theme]
# pointer = "❯"
# moving_pointer = "»"
# changed_marker = "✓"
# selected_color = "cyan"
# moving_color = "yellow"
# changed_color = "green"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &GridsortConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &GridsortConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Cols: CLI → env → config
    let cols = cli
        .cols
        .or_else(|| env("GRIDSORT_COLS").and_then(|v| parse_env("GRIDSORT_COLS", &v)))
        .or(config.general.cols)
        .filter(|&c| c > 0);

    // Summary: CLI → env → config → default
    let summary = cli
        .summary
        .or_else(|| env("GRIDSORT_SUMMARY").and_then(|v| parse_env("GRIDSORT_SUMMARY", &v)))
        .or(config.general.summary)
        .unwrap_or_default();

    // Colour: --no-color and NO_COLOR (any value) both win over config
    let color = !cli.no_color
        && env("NO_COLOR").is_none()
        && config.general.color.unwrap_or(true);

    let defaults = Theme::default();
    let theme = Theme {
        pointer: marker(&config.theme.pointer, defaults.pointer),
        moving_pointer: marker(&config.theme.moving_pointer, defaults.moving_pointer),
        changed_marker: marker(&config.theme.changed_marker, defaults.changed_marker),
        min_cell_width: config
            .general
            .min_cell_width
            .unwrap_or(DEFAULT_MIN_CELL_WIDTH),
    };

    let colors = Colors {
        selected: config
            .theme
            .selected_color
            .clone()
            .unwrap_or_else(|| DEFAULT_SELECTED_COLOR.to_string()),
        moving: config
            .theme
            .moving_color
            .clone()
            .unwrap_or_else(|| DEFAULT_MOVING_COLOR.to_string()),
        changed: config
            .theme
            .changed_color
            .clone()
            .unwrap_or_else(|| DEFAULT_CHANGED_COLOR.to_string()),
    };

    ResolvedConfig {
        cols,
        summary,
        color,
        theme,
        colors,
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    match value.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring invalid {}={:?}", key, value);
            None
        }
    }
}

/// Use a configured marker only if it is exactly one column wide.
fn marker(configured: &Option<String>, default: String) -> String {
    match configured {
        Some(m) if m.width() == 1 => m.clone(),
        Some(m) => {
            warn!("Marker {:?} is not one column wide, using {:?}", m, default);
            default
        }
        None => default,
    }
}
