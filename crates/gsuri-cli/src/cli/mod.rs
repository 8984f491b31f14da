//! CLI for inspecting storage URIs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use gsuri_core::config::{self, GsuriConfig};
use gsuri_core::{logging, StorageUriBuilder};
use std::path::PathBuf;

use commands::{run_completions, run_inspect, run_man};

/// Top-level CLI for gsuri.
#[derive(Debug, Parser)]
#[command(name = "gsuri")]
#[command(about = "gsuri: inspect gs://, s3:// and file:// storage URIs", long_about = None)]
pub struct Cli {
    /// Raise the debug level; repeat for more output (-DD, -DDD).
    #[arg(short = 'D', action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Read configuration from this file instead of the XDG config path.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

impl Cli {
    /// Debug level given on the command line, if any.
    pub fn debug_level(&self) -> Option<u8> {
        (self.debug > 0).then_some(self.debug)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Build one or more storage URIs and print what they name.
    Inspect {
        /// URIs such as gs://bucket/object#123, s3://bucket/key or a local path.
        #[arg(required = true, value_name = "URI")]
        uris: Vec<String>,

        /// Treat versioned object URIs as the current version.
        #[arg(long)]
        latest: bool,

        /// Print one JSON object per URI instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print shell completions to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the roff man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::Inspect { uris, latest, json } => {
                let builder = session_builder(&cli)?;
                run_inspect(&builder, uris, *latest, *json)?;
            }
            CliCommand::Completions { shell } => run_completions(*shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

/// Load config, start logging, and bind one URI builder for this invocation.
fn session_builder(cli: &Cli) -> Result<StorageUriBuilder> {
    let cfg = match &cli.config {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    let debug = cfg.effective_debug(cli.debug_level());
    init_logging(debug);
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(uri_builder(&cfg, debug))
}

fn uri_builder(cfg: &GsuriConfig, debug: u8) -> StorageUriBuilder {
    StorageUriBuilder::new(debug, cfg.endpoints.bucket_class())
}

fn init_logging(debug: u8) {
    if let Err(err) = logging::init_logging(debug) {
        logging::init_logging_stderr(debug);
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }
}

#[cfg(test)]
mod tests;
