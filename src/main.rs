use axum::Router;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orderdesk::auth;
use orderdesk::config::Config;
use orderdesk::db::{create_pool, init_db, seed, AppState, TokenKeys};
use orderdesk::handlers;

#[derive(Parser, Debug)]
#[command(name = "orderdesk")]
#[command(about = "Order-management and product-catalog service")]
struct Cli {
    /// Seed the database with demo data (users, catalog, orders)
    #[arg(long)]
    seed: bool,

    /// Delete the database on exit (dev mode only, useful for fresh starts)
    #[arg(long)]
    ephemeral: bool,
}

/// Load the token keys from config, or generate an ephemeral pair.
fn token_keys(config: &Config) -> TokenKeys {
    match &config.signing_key {
        Some(encoded) => {
            let signing_key = BASE64
                .decode(encoded.trim())
                .expect("SIGNING_KEY must be valid base64");
            let public_key = auth::public_key_from_seed(&signing_key)
                .expect("SIGNING_KEY must be a 32-byte Ed25519 seed");
            TokenKeys {
                signing_key,
                public_key,
            }
        }
        None => {
            tracing::warn!("SIGNING_KEY not set, generating an ephemeral keypair");
            let (signing_key, public_key) = auth::generate_keypair();
            TokenKeys {
                signing_key,
                public_key,
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orderdesk=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    if config.dev_mode {
        tracing::info!("Running in DEVELOPMENT mode");
    }

    // Create database connection pool and initialize the schema
    let db_pool = create_pool(&config.database_path).expect("Failed to create database pool");
    {
        let conn = db_pool.get().expect("Failed to get connection");
        init_db(&conn).expect("Failed to initialize database");
    }

    let state = AppState {
        db: db_pool,
        keys: token_keys(&config),
        token_ttl_secs: config.token_ttl_secs,
        base_url: config.base_url.clone(),
    };

    // Seed demo data if --seed flag is passed (only in dev mode)
    if cli.seed {
        if !config.dev_mode {
            tracing::warn!("--seed flag ignored: not in dev mode (set ORDERDESK_ENV=dev)");
        } else {
            let conn = state.db.get().expect("Failed to get connection for seeding");
            seed::seed_demo_data(&conn).expect("Failed to seed demo data");
        }
    }

    // Build the application router
    let app: Router = handlers::router(state.clone())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    let cleanup_on_exit = cli.ephemeral && config.dev_mode;
    let db_path = config.database_path.clone();

    if cleanup_on_exit {
        tracing::info!("EPHEMERAL MODE: database will be deleted on exit");
    }

    tracing::info!("Orderdesk server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");

    if cleanup_on_exit {
        tracing::info!("Cleaning up ephemeral database...");
        if let Err(e) = std::fs::remove_file(&db_path) {
            tracing::warn!("Failed to remove {}: {}", db_path, e);
        } else {
            tracing::info!("Removed {}", db_path);
        }
        let _ = std::fs::remove_file(format!("{}-wal", db_path));
        let _ = std::fs::remove_file(format!("{}-shm", db_path));
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
