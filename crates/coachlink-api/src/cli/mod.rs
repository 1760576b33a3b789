//! CLI command definitions for the `coachlink` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod token;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Chat token and AI-coach backend for learner/coach conversations.
#[derive(Parser)]
#[command(name = "coachlink", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all log output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    /// Path to config.toml (defaults to $COACHLINK_CONFIG, then ./config.toml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on (overrides [server].port).
        #[arg(short, long, env = "COACHLINK_PORT")]
        port: Option<u16>,

        /// Host to bind to (overrides [server].host).
        #[arg(long, env = "COACHLINK_HOST")]
        host: Option<String>,
    },

    /// Mint a chat token for a user locally, without starting the server.
    Token {
        /// User id to mint the token for.
        user_id: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Default log filter for the chosen verbosity. `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,coachlink_api=debug,coachlink_core=debug,coachlink_infra=debug,tower_http=debug",
            _ => "trace",
        }
    }
}
