//! CLI definition.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::commands;

/// Turn git history into classified conventional commits.
#[derive(Debug, Parser)]
#[command(name = "logsmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write a default logsmith.toml
    Init(commands::init::InitArgs),

    /// Parse and list the conventional commits of a range
    Commits(commands::commits::CommitsArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        let dir = match self.dir {
            Some(dir) => dir,
            None => std::env::current_dir().context("failed to read current directory")?,
        };

        match self.command {
            Commands::Init(args) => commands::init::run(&args, &dir),
            Commands::Commits(args) => commands::commits::run(&args, &dir),
        }
    }
}
