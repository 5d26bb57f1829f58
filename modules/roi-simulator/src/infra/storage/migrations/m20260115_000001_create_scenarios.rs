//! Initial migration for the scenarios table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scenarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Scenarios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Scenarios::ScenarioName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Scenarios::InputsJson).text().not_null())
                    .col(ColumnDef::new(Scenarios::ResultsJson).text().not_null())
                    .col(
                        ColumnDef::new(Scenarios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scenarios_created_at")
                    .table(Scenarios::Table)
                    .col(Scenarios::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scenarios::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Scenarios {
    Table,
    Id,
    ScenarioName,
    InputsJson,
    ResultsJson,
    CreatedAt,
}
