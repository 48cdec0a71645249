//! Configuration inspection CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use stack_core::config::AppConfig;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the effective configuration
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> anyhow::Result<()> {
    match &args.command {
        ConfigCommand::Show => output::print_item(config, format),
        ConfigCommand::Validate => {
            let problems = validate(config);
            if !problems.is_empty() {
                for problem in &problems {
                    output::print_warning(problem);
                }
                anyhow::bail!("Configuration has {} problem(s)", problems.len());
            }
            output::print_success("Configuration is valid");
            output::print_kv("Log level", &config.logging.level);
            output::print_kv("Log format", &config.logging.format);
            output::print_kv("Dispatch policy", config.plugins.dispatch_policy.as_str());
            output::print_kv(
                "Page size",
                &config.pagination.effective_page_size().to_string(),
            );
        }
    }

    Ok(())
}

/// Returns a description of every setting that would be ignored or clamped.
fn validate(config: &AppConfig) -> Vec<String> {
    let mut problems = Vec::new();

    if !matches!(
        config.logging.level.as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    ) {
        problems.push(format!("Unknown log level '{}'", config.logging.level));
    }
    if !matches!(config.logging.format.as_str(), "json" | "pretty") {
        problems.push(format!(
            "Unknown log format '{}', falling back to pretty",
            config.logging.format
        ));
    }
    if config.pagination.effective_page_size() != config.pagination.page_size {
        problems.push(format!(
            "Page size {} is outside 1..=100 and will be clamped",
            config.pagination.page_size
        ));
    }

    problems
}
