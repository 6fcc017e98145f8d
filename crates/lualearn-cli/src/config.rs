// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! LuaLearn CLI configuration.
//!
//! Configuration is loaded from `lualearn.toml` in the working directory.
//! Every section and key is optional.
//!
//! # Example Configuration
//!
//! ```toml
//! [editor]
//! height = "300px"
//!
//! [output]
//! format = "text"   # or "json"
//! color = true
//!
//! [workspace]
//! lessons_dir = "lessons"
//!
//! [watch]
//! debounce_ms = 750
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "lualearn.toml";

/// Main configuration structure loaded from `lualearn.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Editor defaults.
    #[serde(default)]
    pub editor: EditorConfig,
    /// How results are printed.
    #[serde(default)]
    pub output: OutputConfig,
    /// Practice workspace layout.
    #[serde(default)]
    pub workspace: WorkspaceConfig,
    /// File watching settings.
    #[serde(default)]
    pub watch: WatchConfig,
}

/// Editor defaults for snippets loaded from files.
#[derive(Debug, Deserialize)]
pub struct EditorConfig {
    /// Height hint given to editors (default: "300px").
    #[serde(default = "default_height")]
    pub height: String,
}

/// Output format of the `run`, `show` and `lessons` commands.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable panels.
    #[default]
    Text,
    /// JSON documents on stdout.
    Json,
}

/// Output settings.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output format (default: text).
    #[serde(default)]
    pub format: OutputFormat,
    /// Styled terminal output (default: true).
    #[serde(default = "default_color")]
    pub color: bool,
}

/// Practice workspace settings used by `init`.
#[derive(Debug, Deserialize)]
pub struct WorkspaceConfig {
    /// Directory receiving lesson samples (default: "lessons").
    #[serde(default = "default_lessons_dir")]
    pub lessons_dir: String,
}

/// File watching settings used by `watch`.
#[derive(Debug, Deserialize)]
pub struct WatchConfig {
    /// Debounce window in milliseconds (default: 750).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_height() -> String {
    lualearn::editor::DEFAULT_HEIGHT.to_string()
}

fn default_color() -> bool {
    true
}

fn default_lessons_dir() -> String {
    "lessons".to_string()
}

fn default_debounce_ms() -> u64 {
    750
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            lessons_dir: default_lessons_dir(),
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Config {
    /// Loads configuration from `lualearn.toml` in the current directory.
    ///
    /// If no configuration file exists, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be parsed.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Loads configuration from an explicit path, with the same fallback
    /// to defaults as [`Config::load`].
    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            tracing::debug!("No {} found, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.editor.height, "300px");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.color);
        assert_eq!(config.workspace.lessons_dir, "lessons");
        assert_eq!(config.watch.debounce_ms, 750);
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            r#"
[output]
format = "json"

[watch]
debounce_ms = 200
"#,
        )
        .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.color);
        assert_eq!(config.watch.debounce_ms, 200);
        assert_eq!(config.editor.height, "300px");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let parsed: Result<Config, _> = toml::from_str("[output]\nformat = \"yaml\"\n");
        assert!(parsed.is_err());
    }
}
