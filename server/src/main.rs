// produto_api/src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer}; // Renamed web to actix_data
use anyhow::Context;
use produto_api::config::{AppConfig, LogFormat, StoreBackend};
use produto_api::state::AppState;
use produto_api::web::configure_app_routes;
use produto_core::{schema, InMemoryProdutoStore, PgProdutoStore, ProdutoStore};
use sqlx::postgres::PgPoolOptions;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.as_str()));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(env_filter) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration
  match format {
    LogFormat::Pretty => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

async fn build_store(config: &AppConfig) -> anyhow::Result<Arc<dyn ProdutoStore>> {
  match config.store_backend {
    StoreBackend::Memory => {
      let store = if config.seed_db {
        InMemoryProdutoStore::seeded()
      } else {
        InMemoryProdutoStore::new()
      };
      tracing::warn!(rows = store.len(), "Using the in-memory store; data is lost on shutdown.");
      Ok(Arc::new(store))
    }
    StoreBackend::Postgres => {
      let url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is required for the postgres backend")?;
      let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(config.database_acquire_timeout)
        .connect(url)
        .await
        .context("connecting to the database")?;
      tracing::info!("Successfully connected to the database.");

      schema::provision(&pool, config.auto_migrate, config.seed_db).await?;
      Ok(Arc::new(PgProdutoStore::new(pool)))
    }
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg), // Arc the config for sharing
    Err(e) => {
      init_tracing(LogFormat::Pretty);
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e.into());
    }
  };
  init_tracing(app_config.log_format);
  tracing::info!("Starting produto API server...");

  let store = build_store(&app_config).await.map_err(|e| {
    tracing::error!(error = %e, "Failed to initialise the produto store.");
    e
  })?;

  let app_state = AppState::new(store, app_config.clone());

  // Configure and Start Actix Web Server
  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("binding {}", server_address))?
  .run()
  .await
  .context("running HTTP server")?;

  tracing::info!("Server stopped.");
  Ok(())
}
