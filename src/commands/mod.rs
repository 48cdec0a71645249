//! CLI command definitions and dispatch.

pub mod config;
pub mod page;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use stack_core::config::AppConfig;

/// Pagination windowing and plugin registry tooling
#[derive(Debug, Parser)]
#[command(name = "design-stack", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (defaults to config/{env} lookup)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Configuration environment used when no file is given
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the page range window for a page
    PageRange(page::PageRangeArgs),
    /// Print full pagination state for a collection
    PageState(page::PageStateArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Load configuration from the given file or the environment overlay.
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        match &self.config {
            Some(path) => AppConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{path}'")),
            None => AppConfig::load(&self.env)
                .with_context(|| format!("Failed to load config for env '{}'", self.env)),
        }
    }

    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> anyhow::Result<()> {
        match &self.command {
            Commands::PageRange(args) => page::execute_range(args, self.format),
            Commands::PageState(args) => page::execute_state(args, config, self.format),
            Commands::Config(args) => config::execute(args, config, self.format),
        }
    }
}
