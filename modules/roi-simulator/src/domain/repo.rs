//! Repository port for the scenario store.

use async_trait::async_trait;

use super::model::{NewScenario, Scenario, ScenarioSummary};

/// Storage port for persisted scenarios.
///
/// Implementations own their transaction boundaries: `insert` and `delete`
/// must commit on success and roll back on any failure.
#[async_trait]
pub trait ScenarioRepository: Send + Sync {
    /// Persist a new scenario and return the stored row.
    async fn insert(&self, new_scenario: NewScenario) -> anyhow::Result<Scenario>;

    /// List scenario summaries, newest first.
    async fn list(&self) -> anyhow::Result<Vec<ScenarioSummary>>;

    /// Fetch a full scenario row by id.
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Scenario>>;

    /// Delete by id; returns whether a row was removed.
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}
