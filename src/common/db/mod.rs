use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

use crate::settings::types::Settings;

pub async fn init_db(settings: &Settings) -> Result<DbConn, DbErr> {
    let mut options = ConnectOptions::new(settings.database.url.clone());
    if settings.database.url.starts_with("sqlite::memory:") {
        // Every pooled connection would otherwise open its own empty database.
        options.max_connections(1).min_connections(1);
    }
    options.sqlx_logging(settings.debug);
    let db_conn = Database::connect(options).await?;
    Migrator::up(&db_conn, None).await?;
    Ok(db_conn)
}
