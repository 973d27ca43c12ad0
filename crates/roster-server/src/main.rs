//! Roster Server
//!
//! HTTP front end for user records. The storage backend (PostgreSQL or
//! in-memory) is chosen once from the configuration file at startup.

mod handlers;
mod services;
mod storage;

use anyhow::{Context, Result};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use clap::Parser;
use roster_core::config::DEFAULT_CONFIG_FILE;
use roster_core::AppConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use services::UserManager;

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(author, version, about = "Roster - user record service", long_about = None)]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(short, long, env = "ROSTER_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserManager>,
    pub status_codes: bool,
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let cli = Cli::parse();

    info!("Starting Roster Server v{}", env!("CARGO_PKG_VERSION"));

    // No caller exists yet, so configuration faults end the process
    let config = match AppConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration from {}: {}", cli.config.display(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_server(config).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    info!(
        "Config loaded: bind={}, backend={}, status_codes={}",
        config.bind_address,
        config.backend.kind(),
        config.status_codes
    );

    let state = AppState {
        users: Arc::new(UserManager::new(&config.backend)),
        status_codes: config.status_codes,
    };

    let app = build_router(state);

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/create_user", post(handlers::users::create))
        .route("/update_user/:id", put(handlers::users::update))
        .route("/get_user_by_id/:id", get(handlers::users::get))
        .route("/delete_user/:id", delete(handlers::users::delete))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
