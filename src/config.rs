//! Configuration management for bracetidy.
//!
//! This module provides the [`Config`] struct which controls all formatting behavior.
//! Configuration can be loaded from:
//! - TOML files (`bracetidy.toml`)
//! - CLI arguments (which override file settings)
//!
//! Config files are auto-discovered by searching parent directories from the
//! source tree being formatted up to the filesystem root, plus the user's
//! home directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::format::BraceStyle;

/// Config file names to search for (in order of priority, later overrides earlier)
const CONFIG_FILE_NAMES: &[&str] = &["bracetidy.toml"];

/// Get the user's home directory
fn dirs_home() -> Option<PathBuf> {
    // Try HOME environment variable first (works on Unix and some Windows setups)
    if let Ok(home) = std::env::var("HOME") {
        return Some(PathBuf::from(home));
    }
    // Fallback for Windows
    if let Ok(userprofile) = std::env::var("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

// Serde default functions
fn default_indent() -> usize {
    2
}
fn default_true() -> bool {
    true
}

/// Main configuration struct for bracetidy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of spaces per indent level (default: 2)
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Indent with one tab per level instead of spaces (default: false)
    #[serde(default)]
    pub use_tabs: bool,

    /// Print closing braces at the indentation of the block contents
    /// rather than of the opening statement (default: false)
    #[serde(default)]
    pub flush_braces: bool,

    /// Move opening braces onto their own line (default: true)
    #[serde(default = "default_true")]
    pub open_brace_on_separate_line: bool,
}

/// Partial configuration for TOML parsing
///
/// All fields are `Option<T>` so we can distinguish between
/// "explicitly set" and "not specified" when merging configs.
#[derive(Debug, Clone, Default, Deserialize)]
struct PartialConfig {
    pub indent: Option<usize>,
    pub use_tabs: Option<bool>,
    pub flush_braces: Option<bool>,
    pub open_brace_on_separate_line: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent: 2,
            use_tabs: false,
            flush_braces: false,
            open_brace_on_separate_line: true,
        }
    }
}

impl Config {
    /// Maximum reasonable indent size
    const MAX_INDENT: usize = 16;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.indent == 0 && !self.use_tabs {
            return Some("indent must be at least 1".to_string());
        }
        if self.indent > Self::MAX_INDENT {
            return Some(format!(
                "indent {} exceeds maximum of {}",
                self.indent,
                Self::MAX_INDENT
            ));
        }
        None
    }

    /// Materialize the immutable style options handed to the formatting core
    #[must_use]
    pub fn brace_style(&self) -> BraceStyle {
        BraceStyle {
            indent_unit: if self.use_tabs {
                "\t".to_string()
            } else {
                " ".repeat(self.indent)
            },
            flush_braces: self.flush_braces,
            open_brace_on_separate_line: self.open_brace_on_separate_line,
        }
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.indent {
            self.indent = v;
        }
        if let Some(v) = partial.use_tabs {
            self.use_tabs = v;
        }
        if let Some(v) = partial.flush_braces {
            self.flush_braces = v;
        }
        if let Some(v) = partial.open_brace_on_separate_line {
            self.open_brace_on_separate_line = v;
        }
    }

    /// Discover config files from parent directories of a given path
    ///
    /// Searches from the path's directory up to the root, then adds home directory config.
    /// Returns list of config file paths in order of priority (least specific first).
    #[must_use]
    pub fn discover_config_files(start_path: &Path) -> Vec<PathBuf> {
        let mut config_files = Vec::new();

        // Add home directory config first (lowest priority)
        if let Some(home) = dirs_home() {
            for config_name in CONFIG_FILE_NAMES {
                let home_config = home.join(config_name);
                if home_config.is_file() {
                    config_files.push(home_config);
                }
            }
        }

        // Start from the path's parent directory (or the path itself if it's a directory)
        let start_dir = if start_path.is_file() {
            start_path.parent().map(Path::to_path_buf)
        } else if start_path.is_dir() {
            Some(start_path.to_path_buf())
        } else {
            // Path doesn't exist, use current directory
            std::env::current_dir().ok()
        };

        // Collect config files from parent directories (from root to current)
        if let Some(dir) = start_dir {
            let mut ancestors: Vec<PathBuf> = dir.ancestors().map(Path::to_path_buf).collect();
            // Reverse so we go from root to current (less specific to more specific)
            ancestors.reverse();

            for ancestor in ancestors {
                for config_name in CONFIG_FILE_NAMES {
                    let config_path = ancestor.join(config_name);
                    if config_path.is_file() && !config_files.contains(&config_path) {
                        config_files.push(config_path);
                    }
                }
            }
        }

        config_files
    }

    /// Load and merge configuration from discovered config files
    ///
    /// Later files override earlier ones (only explicitly set values).
    /// Returns default config if no files found.
    #[must_use]
    pub fn from_discovered_files(start_path: &Path) -> Self {
        let config_files = Self::discover_config_files(start_path);

        if config_files.is_empty() {
            return Self::default();
        }

        let mut config = Self::default();
        for path in &config_files {
            match std::fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<PartialConfig>(&contents) {
                    Ok(partial) => config.apply_partial(&partial),
                    Err(e) => eprintln!("Warning: failed to parse {}: {e}", path.display()),
                },
                Err(e) => eprintln!("Warning: failed to read {}: {e}", path.display()),
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.indent, 2);
        assert!(!config.use_tabs);
        assert!(!config.flush_braces);
        assert!(config.open_brace_on_separate_line);
    }

    #[test]
    fn test_brace_style_spaces() {
        let config = Config {
            indent: 4,
            ..Default::default()
        };
        let style = config.brace_style();
        assert_eq!(style.indent_unit, "    ");
        assert!(style.open_brace_on_separate_line);
    }

    #[test]
    fn test_brace_style_tabs() {
        let config = Config {
            use_tabs: true,
            ..Default::default()
        };
        assert_eq!(config.brace_style().indent_unit, "\t");
    }

    #[test]
    fn test_config_apply_partial() {
        let mut base = Config::default();

        // Only set indent and flush_braces, leave others as None
        let partial = PartialConfig {
            indent: Some(4),
            flush_braces: Some(true),
            ..Default::default()
        };

        base.apply_partial(&partial);
        assert_eq!(base.indent, 4);
        assert!(base.flush_braces);
        // Other fields should remain at defaults
        assert!(base.open_brace_on_separate_line);
    }

    #[test]
    fn test_config_apply_partial_preserves_unset() {
        let mut base = Config::default();
        base.indent = 8; // Set a non-default value

        // Partial config that only sets open_brace_on_separate_line
        let partial = PartialConfig {
            open_brace_on_separate_line: Some(false),
            ..Default::default()
        };

        base.apply_partial(&partial);
        // indent should be preserved (not reset to default)
        assert_eq!(base.indent, 8);
        assert!(!base.open_brace_on_separate_line);
    }

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(
            config.validate().is_none(),
            "Default config should be valid"
        );
    }

    #[test]
    fn test_validate_indent_zero() {
        let config = Config {
            indent: 0,
            ..Default::default()
        };
        assert!(config.validate().is_some());
        assert!(config.validate().unwrap().contains("indent"));
    }

    #[test]
    fn test_validate_indent_zero_with_tabs_is_fine() {
        let config = Config {
            indent: 0,
            use_tabs: true,
            ..Default::default()
        };
        assert!(config.validate().is_none());
    }

    #[test]
    fn test_validate_indent_too_large() {
        let config = Config {
            indent: 100,
            ..Default::default()
        };
        assert!(config.validate().is_some());
    }

    #[test]
    fn test_discover_config_files_nonexistent_path() {
        // Discovery from a path that doesn't exist should not panic
        let path = PathBuf::from("/nonexistent/path/src");
        let _files = Config::discover_config_files(&path);
    }

    #[test]
    fn test_from_discovered_files_returns_default_when_empty() {
        let path = PathBuf::from("/nonexistent/unique/path/src");
        let config = Config::from_discovered_files(&path);
        assert_eq!(config.indent, 2);
        assert!(config.open_brace_on_separate_line);
    }

    #[test]
    fn test_from_toml_contents() {
        let partial: PartialConfig =
            toml::from_str("indent = 4\nflush_braces = true\n").unwrap();
        let mut config = Config::default();
        config.apply_partial(&partial);
        assert_eq!(config.indent, 4);
        assert!(config.flush_braces);
        assert!(config.open_brace_on_separate_line);
    }
}
