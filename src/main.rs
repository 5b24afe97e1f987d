//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version = "0.1.0")]
#[command(about = "Portfolio site backend: blog store, CRUD API and contact mailer", long_about = None)]
struct Cli {
    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides HOST)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Create the data directory and an empty posts document
    Init,

    /// Add a new draft post to the store
    New {
        /// Title of the new post
        title: String,

        /// Markdown file to read the body from
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List stored posts
    List,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { port, ip } => {
            let mut folio = folio_rs::Folio::from_env()?;
            if let Some(port) = port {
                folio.config.port = port;
            }
            if let Some(ip) = ip {
                folio.config.host = ip;
            }

            tracing::info!(
                "Starting server at http://{}:{}",
                folio.config.host,
                folio.config.port
            );
            folio.serve().await?;
        }

        Commands::Init => {
            let path = folio_rs::config::content_path_from_env();
            folio_rs::commands::init::run(&path).await?;
        }

        Commands::New { title, file } => {
            let path = folio_rs::config::content_path_from_env();
            let store = folio_rs::store::JsonFileStore::new(&path);
            tracing::info!("Creating new draft: {}", title);
            folio_rs::commands::new::run(&store, &title, file.as_deref()).await?;
        }

        Commands::List => {
            let path = folio_rs::config::content_path_from_env();
            let store = folio_rs::store::JsonFileStore::new(&path);
            folio_rs::commands::list::run(&store).await?;
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
