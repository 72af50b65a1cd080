use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Index, MigrationTrait, SchemaManager,
        Table,
    },
    schema::{string, text, timestamp_with_time_zone},
};

const EXPIRES_AT_INDEX_NAME: &str = "expiring_codes_expires_at_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExpiringCode::Table)
                    .if_not_exists()
                    .col(string(ExpiringCode::Code).primary_key())
                    .col(timestamp_with_time_zone(ExpiringCode::ExpiresAt))
                    .col(text(ExpiringCode::Data))
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(EXPIRES_AT_INDEX_NAME)
                    .table(ExpiringCode::Table)
                    .col(ExpiringCode::ExpiresAt)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(EXPIRES_AT_INDEX_NAME)
                    .table(ExpiringCode::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(ExpiringCode::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExpiringCode {
    #[sea_orm(iden = "expiring_codes")]
    Table,
    Code,
    ExpiresAt,
    Data,
}
