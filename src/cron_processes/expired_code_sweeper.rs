use db_adapters::{expiring_code_adapter::ExpiringCodeAdapter, ExpiringCodeStore};
use sea_orm::DbConn;
use tracing::{event, instrument, Level};

#[instrument(skip_all)]
pub async fn sweep_expired_codes(db: &DbConn) -> u64 {
    match ExpiringCodeAdapter::init(db).delete_expired().await {
        Ok(deleted) => {
            event!(Level::INFO, "Deleted {} expired codes.", deleted);
            deleted
        }
        Err(e) => {
            event!(Level::ERROR, "Failed to delete expired codes: {}", e);
            0
        }
    }
}
