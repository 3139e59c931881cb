use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::product::{repository::SeaOrmProductRepository, service::ProductService};

use crate::routes::{self, AppState};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => {
            let s = cfg.server;
            (s.host, s.port)
        }
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Database settings from config.toml when present, env otherwise. An empty
/// URL falls back to the models crate's development default.
fn load_db_config() -> configs::DatabaseConfig {
    let mut db_cfg = match configs::load_default() {
        Ok(cfg) => {
            let mut d = cfg.database;
            d.normalize_from_env();
            d
        }
        Err(_) => configs::DatabaseConfig::from_env(),
    };
    if db_cfg.url.trim().is_empty() {
        db_cfg.url = models::db::DATABASE_URL.clone();
    }
    db_cfg
}

/// Public entry: connect the store, sync the schema, then serve.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // Store handle is established before any traffic is accepted. Connect
    // retries with bounded backoff, then fails the process.
    let db_cfg = load_db_config();
    db_cfg.validate()?;
    let db = models::db::connect_with_retry(
        &db_cfg,
        5,
        Duration::from_millis(500),
        Duration::from_secs(5),
    )
    .await?;
    migration::Migrator::up(&db, None).await?;

    let repo = Arc::new(SeaOrmProductRepository { db });
    let state = AppState { products: Arc::new(ProductService::new(repo)) };

    let cors = build_cors();
    let app: Router = routes::build_router(cors, state);

    let addr = load_bind_addr()?;
    info!(%addr, "starting product api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
