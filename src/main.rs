use std::sync::Arc;

use anyhow::Context;
use blog_article_api::{
    app::{app, AppState},
    config,
    database::{DatabaseManager, PgArticleStore},
    is_production,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL and friends
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("blog_article_api=info,tower_http=info")),
        )
        .init();

    let config = config::config();
    tracing::info!("Starting Blog Article API in {:?} mode", config.environment);

    if is_production!() && config.security.jwt_secret.is_empty() {
        tracing::warn!("SECURITY_JWT_SECRET is not set; login and authenticated writes will fail");
    }

    let database = DatabaseManager::connect_lazy(&config.database)?;
    if config.database.run_migrations {
        database.migrate().await.context("failed to apply migrations")?;
    }

    let store = Arc::new(PgArticleStore::new(database.pool().clone()));
    let router = app(AppState::from_config(store, config), config);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Blog Article API listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    database.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
