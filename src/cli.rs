use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// A terminal to-do list editor
#[derive(Debug, Parser)]
#[command(name = "tuido", version, about)]
pub struct Cli {
    /// Config file (default: ./tuido.toml or <config dir>/tuido/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the default configuration and exit
    #[arg(long)]
    pub print_default_config: bool,

    /// Override the configured log level (trace, debug, info, warn, error, off)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Start with an empty list instead of the tutorial tasks
    #[arg(long)]
    pub no_help_tasks: bool,
}

impl Cli {
    /// Apply command line overrides on top of the loaded config
    pub fn apply(&self, config: &mut Config) -> anyhow::Result<()> {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
            config.logging.enabled = true;
        }
        if self.no_help_tasks {
            config.todo.seed_help = false;
        }
        config.validate()
    }
}
