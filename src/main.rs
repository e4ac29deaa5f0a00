//! Student registry server: reads settings, prepares storage, serves the API.

use sqlx::postgres::PgPoolOptions;
use student_registry::{
    app, ensure_database_exists, ensure_students_table, AppState, MemorySessionProvider, PgSessionProvider,
    Settings, StorageKind,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("student_registry=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let (state, pool) = match settings.storage {
        StorageKind::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let pool = PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .acquire_timeout(settings.acquire_timeout)
                .connect(&settings.database_url)
                .await?;
            ensure_students_table(&pool).await?;
            (AppState::new(PgSessionProvider::new(pool.clone())), Some(pool))
        }
        StorageKind::Memory => {
            tracing::warn!("using in-memory storage; records are lost on exit");
            (AppState::new(MemorySessionProvider::new()), None)
        }
    };

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state, &settings))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
