/// Userbase Server - in-memory user record service
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userbase_core::UserStore;
use userbase_server::{config::ServerConfig, create_router, state::AppState};

#[derive(Parser)]
#[command(name = "userbase-server")]
#[command(about = "In-memory user record service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Bind address, overrides configuration
        #[arg(long)]
        host: Option<String>,
        /// Listening port, overrides configuration
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the records a fresh server starts with
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userbase_server=info,userbase_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { config, host, port }) => {
            serve(config, host, port).await?;
        }
        None => {
            serve(None, None, None).await?;
        }
        Some(Commands::Seed) => {
            print_seed()?;
        }
    }

    Ok(())
}

async fn serve(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    // Load configuration
    let mut config = ServerConfig::load_from(config_path.as_deref())?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    let store = if config.store.seed {
        UserStore::seeded()
    } else {
        UserStore::new()
    };
    tracing::info!("User store ready with {} records", store.len()?);

    let app = create_router(AppState::new(Arc::new(store)));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Starting User Microservice on port {}", config.server.port);
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down gracefully...");
}

fn print_seed() -> anyhow::Result<()> {
    let store = UserStore::seeded();

    println!("Users:");
    for user in store.list()? {
        println!("  {} - {} <{}> ({})", user.id, user.name, user.email, user.created_at);
    }

    Ok(())
}
