use deadpool_redis::{Config, CreatePoolError, Pool, Runtime};

use crate::settings::types::{CodeStoreBackendKind, Settings};

/// Builds the pool only when codes are kept in Redis.
pub fn init_redis_pool(settings: &Settings) -> Result<Option<Pool>, CreatePoolError> {
    match settings.activation.code_store_backend {
        CodeStoreBackendKind::Redis => {
            let cfg = Config::from_url(&settings.redis.url);
            Ok(Some(cfg.create_pool(Some(Runtime::Tokio1))?))
        }
        CodeStoreBackendKind::Database => Ok(None),
    }
}
