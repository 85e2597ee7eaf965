//! Database migrations for the piwik settings module

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250801_000001_create_piwik_settings::Migration)]
    }
}

mod m20250801_000001_create_piwik_settings {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PiwikSettings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PiwikSettings::Key)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(PiwikSettings::Value).json().not_null())
                        .col(
                            ColumnDef::new(PiwikSettings::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PiwikSettings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum PiwikSettings {
        Table,
        Key,
        Value,
        UpdatedAt,
    }
}
