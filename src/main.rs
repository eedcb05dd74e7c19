use std::sync::Arc;

use bokmerke::config::{Cli, Config, StoreBackend, default_config_dir, default_config_path};
use bokmerke::db::Database;
use bokmerke::handler::AppState;
use bokmerke::router::build_router;
use bokmerke::store::{BookmarkStore, MemoryStore, SqliteStore};
use clap::Parser;
use tokio::signal;

#[tokio::main]
async fn main() {
    // Load .env before the config layer substitutes ${VAR} expressions.
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    // Determine config path and data directory
    // If --config is provided, use its parent directory for data (database, etc.)
    // Otherwise use ~/.bokmerke/ for both
    let (config_path, data_dir) = match args.config_path {
        Some(path) => {
            let path = std::path::PathBuf::from(path);
            let dir = path
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| std::path::PathBuf::from("."));
            (path, dir)
        }
        None => {
            let dir = default_config_dir();
            (default_config_path(), dir)
        }
    };

    // Ensure data directory exists
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("failed to create data directory {:?}: {}", data_dir, e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt().json().init();
    tracing::info!("bokmerke.svc starting");

    let cfg = Config::new(&config_path.to_string_lossy()).unwrap_or_else(|e| {
        tracing::error!(error = %e, path = ?config_path, "failed to load config file");
        std::process::exit(1);
    });

    let store: Arc<dyn BookmarkStore> = match cfg.app.store {
        StoreBackend::Memory => {
            tracing::info!("using in-memory store");
            Arc::new(MemoryStore::new())
        }
        StoreBackend::Sqlite => {
            let db = Database::new(&cfg, &data_dir).await.unwrap_or_else(|e| {
                tracing::error!(error = %e, "failed to setup database");
                std::process::exit(1);
            });
            Arc::new(SqliteStore::new(db))
        }
    };

    let address = format!("0.0.0.0:{}", cfg.app.port);
    let state = AppState {
        store,
        api_token: Arc::new(cfg.app.api_token),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&address).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup tcp listener");
        std::process::exit(1);
    });

    tracing::info!("bokmerke.svc running on {}", &address);
    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(err) = result {
                tracing::error!(error = %err, "server exited with error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            tracing::info!("ctrl+c signal received, preparing to shutdown");
        }
    }

    tracing::info!("bokmerke.svc going off, graceful shutdown complete");
}
