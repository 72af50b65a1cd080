pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_identity_zones_table;
mod m20261001_000002_create_users_table;
mod m20261001_000003_create_oauth_clients_table;
mod m20261001_000004_create_expiring_codes_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_identity_zones_table::Migration),
            Box::new(m20261001_000002_create_users_table::Migration),
            Box::new(m20261001_000003_create_oauth_clients_table::Migration),
            Box::new(m20261001_000004_create_expiring_codes_table::Migration),
        ]
    }
}
