//! Configuration management for Tuido
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, CONFIG_USING, HINT_DURATION, MAX_TITLE_LENGTH, MENU_DEFAULT_WIDTH, MENU_MAX_WIDTH,
    MENU_MIN_WIDTH,
};
use crate::todo::TodoOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub todo: TodoConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Menu width in columns
    pub menu_width: u16,
    /// Page shown on startup
    /// Options: "welcome", "todo"
    pub start_page: String,
}

/// To-do list behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    /// Maximum task title length in characters (1-80)
    pub max_title_length: usize,
    /// Seconds a hint stays on screen
    pub hint_duration_secs: u64,
    /// Show the tutorial tasks when the list starts empty
    pub seed_help: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Minimum level: "trace", "debug", "info", "warn", "error" or "off"
    pub level: String,
    /// Log file; defaults to the data directory
    pub file: Option<PathBuf>,
    /// Archive the previous log file on startup
    pub rotate_at_init: bool,
    /// Number of archived log files to keep
    pub max_backups: usize,
    /// Write one JSON object per line instead of plain text
    pub json: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: false,
            menu_width: MENU_DEFAULT_WIDTH,
            start_page: "welcome".to_string(),
        }
    }
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            max_title_length: MAX_TITLE_LENGTH,
            hint_duration_secs: HINT_DURATION.as_secs(),
            seed_help: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "debug".to_string(),
            file: None,
            rotate_at_init: true,
            max_backups: 3,
            json: true,
        }
    }
}

impl TodoConfig {
    /// Options for the to-do list component
    pub fn options(&self) -> TodoOptions {
        TodoOptions {
            max_title_length: self.max_title_length,
            hint_duration: Duration::from_secs(self.hint_duration_secs),
            seed_help: self.seed_help,
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid log level '{}'", self.level))
    }
}

impl Config {
    /// Load from an explicit path, or discover one; on first run write the defaults
    pub fn load_or_create(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            eprintln!("{}: {}", CONFIG_USING, path.display());
            return Self::load_from_file(path);
        }

        if let Some(path) = Self::find_config_file()? {
            eprintln!("{}: {}", CONFIG_USING, path.display());
            return Self::load_from_file(&path);
        }

        let path = Self::get_default_config_path()?;
        Self::generate_default_config(&path)?;
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("tuido.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("tuido").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate UI settings
        if self.ui.menu_width < MENU_MIN_WIDTH || self.ui.menu_width > MENU_MAX_WIDTH {
            anyhow::bail!(
                "menu_width must be between {} and {} columns, got {}",
                MENU_MIN_WIDTH,
                MENU_MAX_WIDTH,
                self.ui.menu_width
            );
        }

        let valid_pages = ["welcome", "todo"];
        if !valid_pages.contains(&self.ui.start_page.as_str()) {
            anyhow::bail!(
                "start_page must be one of {}, got '{}'",
                valid_pages.join(", "),
                self.ui.start_page
            );
        }

        // Validate to-do settings
        if self.todo.max_title_length == 0 || self.todo.max_title_length > MAX_TITLE_LENGTH {
            anyhow::bail!(
                "max_title_length must be between 1 and {}, got {}",
                MAX_TITLE_LENGTH,
                self.todo.max_title_length
            );
        }

        if self.todo.hint_duration_secs == 0 || self.todo.hint_duration_secs > 60 {
            anyhow::bail!(
                "hint_duration_secs must be between 1 and 60, got {}",
                self.todo.hint_duration_secs
            );
        }

        // Validate logging settings
        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let full_content = Self::default_config_toml()?;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        eprintln!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Default configuration rendered as commented TOML
    pub fn default_config_toml() -> Result<String> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Tuido Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        Ok(header + &toml_content)
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("tuido"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
