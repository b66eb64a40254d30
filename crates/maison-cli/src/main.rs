#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use anyhow::Context;
use axum::Router;
use axum_client_ip::ClientIpSource;
use clap::Parser;
use maison_postgres::run_pending_migrations;
use maison_server::handler;
use maison_server::service::ServiceState;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Cli;

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "maison_cli::server::startup";
pub const TRACING_TARGET_SHUTDOWN: &str = "maison_cli::server::shutdown";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SHUTDOWN,
            "application terminated successfully",
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SHUTDOWN,
            error = %error,
            "application terminated with error",
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let state = ServiceState::from_config(&cli.service)
        .await
        .context("failed to initialize service state")?;

    let applied = run_pending_migrations(state.pg_client())
        .await
        .context("failed to apply database migrations")?;
    tracing::info!(
        target: TRACING_TARGET_STARTUP,
        migrations = applied.len(),
        "database schema is up to date",
    );

    let router = create_router(state, &cli.server);
    server::serve(router, &cli.server).await
}

/// Initializes the tracing subscriber.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,maison_server=debug,maison_postgres=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Assembles the application router with its middleware stack.
fn create_router(state: ServiceState, server_config: &config::ServerConfig) -> Router {
    let ip_source = if server_config.trust_forwarded_for {
        ClientIpSource::RightmostXForwardedFor
    } else {
        ClientIpSource::ConnectInfo
    };

    handler::routes(state.clone())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(ip_source.into_extension())
}
