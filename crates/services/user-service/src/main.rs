//! User Service - REST server for user records.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_service_lib::config::{StorageBackend, UserServiceConfig};

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User records REST service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind host (overrides USER_SERVICE_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides USER_SERVICE_PORT / PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Storage backend: memory or redis (overrides USER_SERVICE_STORAGE)
        #[arg(long)]
        storage: Option<StorageBackend>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = UserServiceConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve {
            host,
            port,
            storage,
        } => {
            if let Some(host) = host {
                config.service.host = host;
            }
            if let Some(port) = port {
                config.service.port = port;
            }
            if let Some(storage) = storage {
                config.storage = storage;
            }
            user_service_lib::run_server(config).await?;
        }
    }

    Ok(())
}
