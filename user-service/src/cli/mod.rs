//! CLI module for user-service
//!
//! Provides the command-line interface. Running without a subcommand is the
//! same as `serve`.

pub mod serve;

use crate::config::ServerConfig;
use clap::{Parser, Subcommand};

/// User service - in-memory user profile registry over REST
#[derive(Parser, Debug)]
#[command(name = "user-service")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    USER_SERVICE_HOST              Bind address (default: 0.0.0.0)
    USER_SERVICE_PORT              Listen port (default: 7070)
    USER_SERVICE_GRACEFUL_TIMEOUT  Shutdown grace period, e.g. 15s or 1m (default: 15s)
    USER_SERVICE_REQUEST_TIMEOUT   Per-request timeout (default: 15s)
    USER_SERVICE_LOGGING           Log every request (legacy: LOGGING)
    USER_SERVICE_LOG_LEVEL         Log filter (default: info)
    USER_SERVICE_LOG_FORMAT        Log format: text or json (default: text)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Server options when no subcommand is given
    #[command(flatten)]
    pub serve: serve::ServeArgs,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the user service (default)
    Serve(serve::ServeArgs),
}

impl Cli {
    /// Resolve the server configuration from the parsed arguments.
    pub fn server_config(self) -> ServerConfig {
        match self.command {
            Some(Commands::Serve(args)) => args.into_config(),
            None => self.serve.into_config(),
        }
    }
}
