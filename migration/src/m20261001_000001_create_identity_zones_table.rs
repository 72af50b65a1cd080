use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, MigrationTrait, SchemaManager,
        Table,
    },
    schema::{string, string_uniq, timestamp_with_time_zone},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IdentityZone::Table)
                    .if_not_exists()
                    .col(string(IdentityZone::Id).primary_key())
                    .col(string_uniq(IdentityZone::Subdomain))
                    .col(string(IdentityZone::Name))
                    .col(
                        timestamp_with_time_zone(IdentityZone::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IdentityZone::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum IdentityZone {
    #[sea_orm(iden = "identity_zones")]
    Table,
    Id,
    Subdomain,
    Name,
    CreatedAt,
}
