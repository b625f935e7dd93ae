mod config;
mod dto;
mod error;
mod handlers;
mod models;
mod repository;
mod service;

use std::sync::Arc;

use repository::PgRepository;
use service::NoteService;

#[tokio::main]
async fn main() {
    // Log setup
    tracing_subscriber::fmt::init();

    // Fetch configuration
    let cfg = config::load_config().expect("failed to locate or load config");
    tracing::info!("Starting notes-web in {} mode", cfg.environment);

    // Repository creation and migration
    let mut repo = PgRepository::connect(&cfg.database_dsn)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to establish database connection: {e}");
            panic!("failed to establish database connection: {e}");
        });

    repo.migrate().await.unwrap_or_else(|e| {
        tracing::error!("Failed to migrate database: {e}");
        panic!("failed to migrate database: {e}");
    });

    // Service creation
    let service = Arc::new(NoteService::new(Arc::new(repo)));

    // Router config
    let router = handlers::router(service);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cfg.port))
        .await
        .expect("failed to bind listen address");

    // Starting router
    tracing::info!("Started listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, router)
        .await
        .expect("failed to start server");
}
