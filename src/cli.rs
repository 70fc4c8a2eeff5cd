//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use git_persona::output::OutputConfig;

use crate::commands;

/// git-persona - Resolve and apply per-repository commit identities
#[derive(Parser, Debug)]
#[command(name = "git-persona")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve and apply a commit identity to the current repository
    Apply(commands::apply::ApplyArgs),

    /// Run as a git post-checkout hook (never prompts)
    Hook(commands::hook::HookArgs),

    /// List the identities in the catalog
    List(commands::list::ListArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .try_init()
        .ok();

        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Apply(args) => commands::apply::execute(args, &output),
            Commands::Hook(args) => commands::hook::execute(args, &output),
            Commands::List(args) => commands::list::execute(args, &output),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
