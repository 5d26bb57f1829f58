//! SeaORM-backed scenario store.

pub mod entity;
pub mod migrations;
pub mod repo;

pub use repo::SeaOrmScenarioRepository;
