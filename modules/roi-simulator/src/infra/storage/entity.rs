//! SeaORM entities for the scenario store.

pub use scenario::Entity as ScenarioEntity;

/// Scenario entity module.
pub mod scenario {
    use chrono::{DateTime, Utc};
    use sea_orm::entity::prelude::*;

    /// Scenario entity for the `scenarios` table.
    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "scenarios")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub scenario_name: String,
        #[sea_orm(column_type = "Text")]
        pub inputs_json: String,
        #[sea_orm(column_type = "Text")]
        pub results_json: String,
        pub created_at: DateTime<Utc>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Map a stored row to the domain scenario.
impl From<scenario::Model> for crate::domain::model::Scenario {
    fn from(model: scenario::Model) -> Self {
        Self {
            id: model.id,
            scenario_name: model.scenario_name,
            inputs_json: model.inputs_json,
            results_json: model.results_json,
            created_at: model.created_at,
        }
    }
}

impl From<scenario::Model> for crate::domain::model::ScenarioSummary {
    fn from(model: scenario::Model) -> Self {
        Self {
            id: model.id,
            scenario_name: model.scenario_name,
            created_at: model.created_at,
        }
    }
}
