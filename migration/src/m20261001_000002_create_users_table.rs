use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, Index, MigrationTrait,
        SchemaManager, Table,
    },
    schema::{boolean, string, timestamp_with_time_zone, uuid},
};

const ZONE_EMAIL_INDEX_NAME: &str = "users_zone_id_email_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(uuid(User::Id).primary_key())
                    .col(string(User::ZoneId))
                    .col(string(User::Email))
                    .col(string(User::Password))
                    .col(string(User::GivenName))
                    .col(string(User::FamilyName))
                    .col(string(User::Origin))
                    .col(boolean(User::IsVerified).default(false))
                    .col(boolean(User::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(User::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name(ZONE_EMAIL_INDEX_NAME)
                    .table(User::Table)
                    .col(User::ZoneId)
                    .col(User::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(ZONE_EMAIL_INDEX_NAME)
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    ZoneId,
    Email,
    Password,
    GivenName,
    FamilyName,
    Origin,
    IsVerified,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
