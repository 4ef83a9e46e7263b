//! Somnium - Dream journal REST server
//!
//! Records dream entries, serves a gallery with substring search, and
//! generates deterministic interpretations and visualization seeds from
//! dream text.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use somnium_core::{DreamStore, MemoryStore, SqliteStore};
use somnium_server::{api, AppState};

/// Dream journal REST server
#[derive(Debug, Parser)]
#[command(name = "somnium-server", version, about)]
struct Args {
    /// Port to listen on
    #[arg(long, env = "SOMNIUM_PORT", default_value_t = 4280)]
    port: u16,

    /// Custom data directory for the SQLite database
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep dreams in memory only (nothing survives a restart)
    #[arg(long)]
    in_memory: bool,
}

fn build_store(args: &Args) -> somnium_core::Result<Arc<dyn DreamStore>> {
    if args.in_memory {
        info!("Using in-memory store");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let db_path = match &args.data_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Some(dir.join("somnium.db"))
        }
        None => None,
    };

    Ok(Arc::new(SqliteStore::new(db_path)?))
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    info!("Somnium server v{} starting...", env!("CARGO_PKG_VERSION"));

    let store = match build_store(&args) {
        Ok(store) => {
            info!("Dream store initialized");
            store
        }
        Err(e) => {
            error!("Failed to initialize dream store: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(store);

    if let Err(e) = api::serve(state, args.port).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    info!("Somnium server shutting down");
}
