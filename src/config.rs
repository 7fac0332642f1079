use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::BREAKING_CHANGE_MARKER;
use crate::error::{DetectError, Result};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "nextversion.toml";

/// Represents the complete configuration for detect-next-version.
///
/// Contains the commit classification keywords and version/tag handling options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub conventional_commits: ConventionalCommitsConfig,

    #[serde(default)]
    pub versioning: VersioningConfig,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Returns the default list of breaking change indicators.
fn default_breaking_change_indicators() -> Vec<String> {
    strings(&[BREAKING_CHANGE_MARKER])
}

/// Returns the default list of commit type fragments that trigger major version bumps.
fn default_major_keywords() -> Vec<String> {
    strings(&["break", "breaking", "major"])
}

/// Returns the default list of commit type fragments that trigger minor version bumps.
fn default_minor_keywords() -> Vec<String> {
    strings(&["feat", "feature", "minor"])
}

/// Returns the default list of commit type fragments that trigger patch version bumps.
fn default_patch_keywords() -> Vec<String> {
    strings(&["fix", "bugfix", "patch"])
}

/// Configuration for conventional commit analysis.
///
/// Keywords are matched as substrings of the lowercased commit type, so
/// `bugfix` is already covered by `fix`; the longer forms are kept to mirror
/// the documented vocabulary.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ConventionalCommitsConfig {
    #[serde(default = "default_breaking_change_indicators")]
    pub breaking_change_indicators: Vec<String>,

    #[serde(default = "default_major_keywords")]
    pub major_keywords: Vec<String>,

    #[serde(default = "default_minor_keywords")]
    pub minor_keywords: Vec<String>,

    #[serde(default = "default_patch_keywords")]
    pub patch_keywords: Vec<String>,
}

impl Default for ConventionalCommitsConfig {
    fn default() -> Self {
        ConventionalCommitsConfig {
            breaking_change_indicators: default_breaking_change_indicators(),
            major_keywords: default_major_keywords(),
            minor_keywords: default_minor_keywords(),
            patch_keywords: default_patch_keywords(),
        }
    }
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_initial_version() -> String {
    "0.0.0".to_string()
}

/// Configuration for reading and incrementing versions.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersioningConfig {
    /// How release tags are named; must contain `{version}`
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    /// Accept loosely formatted versions (`=1.2.3`, `1.0.0beta`, leading zeros)
    #[serde(default)]
    pub loose: bool,

    /// Version assumed when the repository has no version tag yet
    #[serde(default = "default_initial_version")]
    pub initial_version: String,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        VersioningConfig {
            tag_pattern: default_tag_pattern(),
            loose: false,
            initial_version: default_initial_version(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nextversion.toml` in current directory
/// 3. `.nextversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(path) = dirs::config_dir()
        .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
        .filter(|path| path.exists())
    {
        path
    } else {
        debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        DetectError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;

    toml::from_str(&config_str)
        .map_err(|e| DetectError::config(format!("cannot parse '{}': {}", path.display(), e)))
}
