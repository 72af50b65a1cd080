use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, Expr, MigrationTrait, SchemaManager,
        Table,
    },
    schema::{string, string_null, timestamp_with_time_zone},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OauthClient::Table)
                    .if_not_exists()
                    .col(string(OauthClient::ClientId).primary_key())
                    .col(string_null(OauthClient::SignupRedirectUrl))
                    .col(
                        timestamp_with_time_zone(OauthClient::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OauthClient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OauthClient {
    #[sea_orm(iden = "oauth_clients")]
    Table,
    ClientId,
    SignupRedirectUrl,
    CreatedAt,
}
