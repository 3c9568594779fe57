use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands_check;
use crate::cli::commands_inspect;
use crate::cli::commands_mint;
use crate::cli::output::Output;
use crate::config::StampConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "hashstamp", about = "Mint and check hashcash stamps", version)]
pub struct Cli {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
    #[arg(long)]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    Mint(MintCommand),
    Check(CheckCommand),
    Inspect(InspectCommand),
}

#[derive(Debug, Clone, Args)]
pub struct MintCommand {
    #[arg(long)]
    pub resource: String,
    #[arg(long)]
    pub bits: Option<u32>,
    #[arg(long)]
    pub max_attempts: Option<u64>,
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Args)]
pub struct CheckCommand {
    pub stamp: String,
    #[arg(long)]
    pub resource: String,
    #[arg(long)]
    pub bits: Option<u32>,
    #[arg(long)]
    pub expiry_days: Option<u32>,
}

#[derive(Debug, Clone, Args)]
pub struct InspectCommand {
    pub stamp: String,
}

/// How a command finished, for the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Rejected,
}

pub struct RuntimeContext {
    pub config: StampConfig,
    pub output: Output,
}

impl RuntimeContext {
    pub fn load(cli: &Cli) -> Result<Self> {
        let config = StampConfig::load(cli.config.as_deref()).with_context(|| match &cli.config {
            Some(path) => format!("reading config {}", path.display()),
            None => "reading default config".to_string(),
        })?;
        Ok(Self {
            config,
            output: Output::new(cli.json, cli.quiet),
        })
    }
}

pub fn run_cli(cli: Cli) -> Result<Outcome> {
    let ctx = RuntimeContext::load(&cli)?;
    match &cli.command {
        Command::Mint(command) => commands_mint::run(&ctx, command),
        Command::Check(command) => commands_check::run(&ctx, command),
        Command::Inspect(command) => commands_inspect::run(&ctx, command),
    }
}
