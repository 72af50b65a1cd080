use common::{db::init_db as init_db_fn, settings::get_test_settings};
use sea_orm::{DbConn, DbErr};

pub use common::factory;

/// Fresh in-memory database with every migration applied.
pub async fn init_db() -> Result<DbConn, DbErr> {
    let settings = get_test_settings();
    init_db_fn(&settings).await
}

/// Migrated database at `DATABASE_URL`, for tests that need a real connection pool.
pub async fn init_db_from_env() -> Result<DbConn, DbErr> {
    let mut settings = get_test_settings();
    settings.database.url = std::env::var("DATABASE_URL")
        .map_err(|e| DbErr::Custom(format!("DATABASE_URL: {}", e)))?;
    init_db_fn(&settings).await
}
