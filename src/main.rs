use std::path::PathBuf;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use clap::Parser;

use connect_four_server::config::AppConfig;
use connect_four_server::game::BoardSize;
use connect_four_server::server::{self, AppState};
use connect_four_server::table::Table;
use connect_four_server::telemetry;

/// Serve one shared Connect Four board over HTTP.
#[derive(Parser)]
#[command(name = "connect-four-server", about = "Serve a shared Connect Four board")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the listen address
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port
    #[arg(long)]
    port: Option<u16>,

    /// Override the starting board size: small, medium or large
    #[arg(long)]
    size: Option<BoardSize>,

    /// Print a config file with every default value and exit
    #[arg(long)]
    print_default_config: bool,
}

#[actix_web::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config_found = cli.config.exists();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(size) = cli.size {
        config.game.size = size;
    }
    config.validate().context("validating configuration")?;

    telemetry::init_tracing(&config.logging);
    if !config_found {
        tracing::warn!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let data = web::Data::new(AppState::new(Table::new(config.game.clone())));
    let host = config.server.host.clone();
    let port = config.server.port;

    tracing::info!(%host, port, size = %config.game.size, "starting server");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(data.clone())
            .configure(server::configure)
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("binding {host}:{port}"))?
    .run()
    .await
    .context("running server")
}
