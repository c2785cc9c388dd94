//! CLI command definitions for the `boatyard` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod password;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Serve the Boatyard boat registry over HTTP.
#[derive(Parser)]
#[command(name = "boatyard", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config.toml (defaults to the platform data directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans to stdout through OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Host to bind to (overrides config.toml).
        #[arg(long, env = "BOATYARD_HOST")]
        host: Option<String>,

        /// Port to listen on (overrides config.toml).
        #[arg(short, long, env = "BOATYARD_PORT")]
        port: Option<u16>,
    },

    /// Print an Argon2 hash for a principal's `password_hash` entry.
    HashPassword {
        /// Password to hash. Prompted for (without echo) when omitted.
        password: Option<String>,
    },
}

impl Cli {
    /// Default tracing directives for the chosen verbosity.
    pub fn log_directives(&self) -> &'static str {
        boatyard_observe::tracing_setup::directives_for(self.verbose, self.quiet)
    }
}
