#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)] // Support module provides utilities not used by every test binary

//! Test support utilities for roi-simulator integration tests.

use std::sync::Arc;

use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use roi_simulator::api::rest::router;
use roi_simulator::config::CorsConfig;
use roi_simulator::domain::report::PlainTextReportRenderer;
use roi_simulator::domain::service::Service;
use roi_simulator::infra::storage::migrations::Migrator;
use roi_simulator::infra::storage::SeaOrmScenarioRepository;

/// Create a fresh in-memory `SQLite` database with migrations applied.
///
/// Each call creates a new isolated database for testing.
pub async fn inmem_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Build a service over a fresh in-memory store.
pub async fn inmem_service() -> Arc<Service> {
    let repo = Arc::new(SeaOrmScenarioRepository::new(inmem_db().await));
    Arc::new(Service::new(repo, Arc::new(PlainTextReportRenderer)))
}

/// Build the full REST router over a fresh in-memory store.
pub async fn test_router() -> axum::Router {
    router(inmem_service().await, &CorsConfig::default())
}
