//! User Service Entry Point

use clap::Parser;
use user_service::cli::Cli;
use user_service::registry::UserHolder;
use user_service::shutdown::ShutdownController;
use user_service::{logging, server, AppState};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let config = cli.server_config();
    tracing::info!("User Service v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!(?config, "Resolved server configuration");

    let state = AppState::new(UserHolder::new());

    if let Err(e) = server::run(state, config, ShutdownController::default()).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
