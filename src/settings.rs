use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Represents the complete tool settings for release-bump.
///
/// Controls which files are touched, how the changelog document starts, and
/// the templates used for the suggested git commands.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    #[serde(default = "default_config_path")]
    pub config_path: String,

    #[serde(default = "default_changelog_path")]
    pub changelog_path: String,

    #[serde(default = "default_parent_changelog_path")]
    pub parent_changelog_path: String,

    #[serde(default)]
    pub changelog: ChangelogSettings,

    #[serde(default)]
    pub templates: TemplatesSettings,
}

fn default_config_path() -> String {
    "config.json".to_string()
}

fn default_changelog_path() -> String {
    "CHANGELOG.md".to_string()
}

fn default_parent_changelog_path() -> String {
    "../CHANGELOG.md".to_string()
}

/// Settings for the changelog document shape.
///
/// The header line doubles as the marker used to find the insertion point;
/// the description seeds newly created documents.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChangelogSettings {
    #[serde(default = "default_header")]
    pub header: String,

    #[serde(default = "default_description")]
    pub description: String,
}

fn default_header() -> String {
    "# Changelog".to_string()
}

fn default_description() -> String {
    "All notable changes to this project will be documented in this file.".to_string()
}

impl Default for ChangelogSettings {
    fn default() -> Self {
        ChangelogSettings {
            header: default_header(),
            description: default_description(),
        }
    }
}

/// Templates for the suggested git commands.
///
/// Each template may contain a `{version}` placeholder that is replaced with
/// the new version string.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TemplatesSettings {
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    #[serde(default = "default_tag_name")]
    pub tag_name: String,

    #[serde(default = "default_tag_message")]
    pub tag_message: String,
}

fn default_commit_message() -> String {
    "chore(release): {version}".to_string()
}

fn default_tag_name() -> String {
    "v{version}".to_string()
}

fn default_tag_message() -> String {
    "Version {version}".to_string()
}

impl Default for TemplatesSettings {
    fn default() -> Self {
        TemplatesSettings {
            commit_message: default_commit_message(),
            tag_name: default_tag_name(),
            tag_message: default_tag_message(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            config_path: default_config_path(),
            changelog_path: default_changelog_path(),
            parent_changelog_path: default_parent_changelog_path(),
            changelog: ChangelogSettings::default(),
            templates: TemplatesSettings::default(),
        }
    }
}

/// Loads settings from file or returns defaults.
///
/// Attempts to load settings in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasebump.toml` in current directory
/// 3. `.releasebump.toml` in user config directory
/// 4. Default settings if no file found
///
/// # Arguments
/// * `settings_path` - Optional path to custom settings file
///
/// # Returns
/// * `Ok(Settings)` - Loaded or default settings
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_settings(settings_path: Option<&str>) -> Result<Settings> {
    let settings_str = if let Some(path) = settings_path {
        fs::read_to_string(path)?
    } else if Path::new("./releasebump.toml").exists() {
        fs::read_to_string("./releasebump.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let settings_path = config_dir.join(".releasebump.toml");
        if settings_path.exists() {
            fs::read_to_string(settings_path)?
        } else {
            return Ok(Settings::default());
        }
    } else {
        return Ok(Settings::default());
    };

    let settings: Settings = toml::from_str(&settings_str)?;
    Ok(settings)
}
