//! File logging built on `log` + `fern`.
//!
//! The terminal belongs to the UI, so records only ever go to a file. When
//! logging is disabled nothing is installed and the `log` macros are no-ops.

use crate::config::LoggingConfig;
use crate::todo::{TodoEvent, TodoObserver};
use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Installed logging setup
#[derive(Debug, Clone)]
pub struct Logger {
    enabled: bool,
    level: LevelFilter,
    log_file: Option<PathBuf>,
    json: bool,
}

impl Logger {
    /// Resolve the logging setup from config without installing it
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let level = config.level_filter()?;
        let log_file = if config.enabled {
            Some(match &config.file {
                Some(path) => path.clone(),
                None => Self::get_log_file_path()?,
            })
        } else {
            None
        };

        Ok(Self {
            enabled: config.enabled,
            level,
            log_file,
            json: config.json,
        })
    }

    /// Resolve, rotate and install as the global logger
    pub fn init(config: &LoggingConfig) -> Result<Self> {
        let logger = Self::from_config(config)?;
        let Some(path) = logger.log_file.clone() else {
            return Ok(logger);
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        if config.rotate_at_init {
            rotate(&path, config.max_backups)?;
        }

        logger
            .dispatch(&path)?
            .apply()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

        log::info!("logging to {} at level {}", path.display(), logger.level);
        Ok(logger)
    }

    fn dispatch(&self, path: &Path) -> Result<fern::Dispatch> {
        let file =
            fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        let json = self.json;
        Ok(fern::Dispatch::new()
            .format(move |out, message, record| {
                let line = if json {
                    json_line(record.level(), record.target(), &message.to_string())
                } else {
                    text_line(record.level(), record.target(), &message.to_string())
                };
                out.finish(format_args!("{}", line))
            })
            .level(self.level)
            .chain(file))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Default log file location
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("tuido").join("tuido.log"))
    }
}

/// Archive `path` as `path.1`, shifting older archives and dropping the
/// ones beyond `max_backups`
pub fn rotate(path: &Path, max_backups: usize) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    if max_backups == 0 {
        return std::fs::remove_file(path).with_context(|| format!("Failed to remove log file: {}", path.display()));
    }

    let oldest = backup_path(path, max_backups);
    if oldest.exists() {
        std::fs::remove_file(&oldest).with_context(|| format!("Failed to remove log file: {}", oldest.display()))?;
    }
    for n in (1..max_backups).rev() {
        let from = backup_path(path, n);
        if from.exists() {
            let to = backup_path(path, n + 1);
            std::fs::rename(&from, &to).with_context(|| format!("Failed to rotate log file: {}", from.display()))?;
        }
    }

    let first = backup_path(path, 1);
    std::fs::rename(path, &first).with_context(|| format!("Failed to rotate log file: {}", path.display()))
}

pub fn backup_path(path: &Path, n: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{}", n));
    PathBuf::from(name)
}

pub fn json_line(level: log::Level, target: &str, message: &str) -> String {
    serde_json::json!({
        "time": chrono::Local::now().to_rfc3339(),
        "level": level.to_string(),
        "target": target,
        "message": message,
    })
    .to_string()
}

pub fn text_line(level: log::Level, target: &str, message: &str) -> String {
    format!(
        "[{}] {:<5} {}: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        level,
        target,
        message
    )
}

/// Writes every to-do event to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl TodoObserver for LogObserver {
    fn on_event(&mut self, event: &TodoEvent) {
        match event {
            TodoEvent::Rejected { operation, reason } => {
                log::debug!(target: "tuido::todo", "{} rejected: {}", operation, reason)
            }
            TodoEvent::HintChanged { message } if message.is_empty() => {}
            other => log::debug!(target: "tuido::todo", "{:?}", other),
        }
    }
}
