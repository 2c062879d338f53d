//! Command-line interface for logmanager

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// logmanager - log entry CRUD service
#[derive(Parser)]
#[command(name = "logmanager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to read instead of the default search locations
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Overrides `server.port`
        #[arg(long)]
        port: Option<u16>,
    },

    /// Create default config file
    Init,

    /// Print one page of active log entries
    #[command(alias = "ls")]
    List {
        #[arg(long, default_value_t = 1)]
        page: u64,

        /// Defaults to `pagination.default_limit`
        #[arg(long)]
        limit: Option<u64>,
    },
}

impl Cli {
    /// The subcommand to run, `serve` when none was given.
    #[must_use]
    pub fn command_or_default(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Serve { port: None })
    }
}
