//! Cattery - a tiny in-memory cat catalog served over HTTP

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cattery::api::{self, AppState};
use cattery::config::Config;
use cattery::store::Catalog;

#[derive(Parser)]
#[command(name = "cattery")]
#[command(about = "List, feed and delete cats from an in-memory catalog")]
#[command(version)]
struct Cli {
    /// Path to a config file (default: ~/.cattery/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Interface to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory served under /static
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Print the seeded catalog
    Cats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("cattery={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    let _ = dotenvy::dotenv();

    // Load config
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Serve { host, port, static_dir } => {
            let mut config = config;
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(static_dir) = static_dir {
                config.static_dir = static_dir;
            }

            let catalog = Catalog::from_config(&config.catalog)?;
            tracing::info!("Catalog seeded with {} cats", catalog.len().await);

            if !config.static_dir.is_dir() {
                tracing::warn!(
                    "Static directory {:?} does not exist; /static will return 404",
                    config.static_dir
                );
            }

            let addr = config.bind_addr();
            tracing::info!("Starting HTTP server on {}", addr);
            tracing::info!("Serving static files from {:?}", config.static_dir);

            let router = api::create_router(AppState::new(config, catalog));
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!("Cattery server running at http://{}", addr);
            println!("  Cats:     http://{}/cats", addr);
            println!("  API Docs: http://{}/docs", addr);
            println!("  Health:   http://{}/health", addr);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        }

        Commands::Cats => {
            let catalog = Catalog::from_config(&config.catalog)?;
            let cats = catalog.list().await;

            if cats.is_empty() {
                println!("No cats found");
            } else {
                for cat in cats {
                    println!(
                        "{:>4}  {}  {}  {}  fed {}x  {}",
                        cat.id, cat.name, cat.sex, cat.birthday, cat.feed_count, cat.image_url
                    );
                }
            }
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
