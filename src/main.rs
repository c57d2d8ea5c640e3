mod asr;
mod audio;
mod config;
mod error;
mod llm;
mod routes;
mod state;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("voxrelay_backend=debug,tower_http=debug")
        .init();

    // Load configuration - try multiple paths
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("backend/conf.yaml".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut config = None;
    let mut loaded_path = String::new();

    for path in &config_paths {
        match Config::load(path) {
            Ok(cfg) => {
                config = Some(cfg);
                loaded_path = path.clone();
                break;
            }
            Err(e) => {
                tracing::debug!("Failed to load config from {}: {}", path, e);
            }
        }
    }

    let config = match config {
        Some(cfg) => {
            info!("Loaded configuration from: {}", loaded_path);
            cfg
        }
        None => {
            info!("No config file found (tried {:?}), using defaults", config_paths);
            Config::default()
        }
    };

    // Temp audio files for in-flight requests live here
    std::fs::create_dir_all(&config.system_config.cache_dir)?;

    let app_state = AppState::new(config.clone());

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.system_config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
