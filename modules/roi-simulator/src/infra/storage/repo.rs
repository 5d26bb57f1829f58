//! `SeaORM` repository implementation for scenarios.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, Order, QueryOrder,
    TransactionTrait,
};

use super::entity::scenario;
use crate::domain::model::{NewScenario, Scenario, ScenarioSummary};
use crate::domain::repo::ScenarioRepository;

/// `SeaORM` implementation of [`ScenarioRepository`].
pub struct SeaOrmScenarioRepository {
    conn: DatabaseConnection,
}

impl SeaOrmScenarioRepository {
    /// Create a new repository instance.
    #[must_use]
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ScenarioRepository for SeaOrmScenarioRepository {
    async fn insert(&self, new_scenario: NewScenario) -> anyhow::Result<Scenario> {
        let now = chrono::Utc::now();

        // Explicit transaction boundary: commit on success, roll back on
        // any failure (drop of an uncommitted transaction rolls back).
        let txn = self.conn.begin().await?;

        let active_model = scenario::ActiveModel {
            id: ActiveValue::NotSet,
            scenario_name: ActiveValue::Set(new_scenario.scenario_name),
            inputs_json: ActiveValue::Set(new_scenario.inputs_json),
            results_json: ActiveValue::Set(new_scenario.results_json),
            created_at: ActiveValue::Set(now),
        };
        let model = active_model.insert(&txn).await?;

        txn.commit().await?;

        Ok(model.into())
    }

    async fn list(&self) -> anyhow::Result<Vec<ScenarioSummary>> {
        // Ids are monotone, so id desc is a stable "newest first" even for
        // rows created within the same timestamp tick.
        let rows = scenario::Entity::find()
            .order_by(scenario::Column::Id, Order::Desc)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Scenario>> {
        let row = scenario::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let txn = self.conn.begin().await?;
        let result = scenario::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
