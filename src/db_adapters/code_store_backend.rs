use chrono::{DateTime, Utc};

use crate::{
    expiring_code_adapter::ExpiringCodeAdapter,
    redis_expiring_code_adapter::RedisExpiringCodeAdapter, CodeStoreError, ExpiringCode,
    ExpiringCodeStore,
};

/// Code store picked at startup; callers stay unaware of where codes live.
#[derive(Clone)]
pub enum CodeStoreBackend<'a> {
    Database(ExpiringCodeAdapter<'a>),
    Redis(RedisExpiringCodeAdapter<'a>),
}

impl ExpiringCodeStore for CodeStoreBackend<'_> {
    async fn generate(
        self,
        data: String,
        expires_at: DateTime<Utc>,
    ) -> Result<ExpiringCode, CodeStoreError> {
        match self {
            CodeStoreBackend::Database(adapter) => adapter.generate(data, expires_at).await,
            CodeStoreBackend::Redis(adapter) => adapter.generate(data, expires_at).await,
        }
    }

    async fn redeem(self, code: String) -> Result<Option<ExpiringCode>, CodeStoreError> {
        match self {
            CodeStoreBackend::Database(adapter) => adapter.redeem(code).await,
            CodeStoreBackend::Redis(adapter) => adapter.redeem(code).await,
        }
    }

    async fn delete_expired(self) -> Result<u64, CodeStoreError> {
        match self {
            CodeStoreBackend::Database(adapter) => adapter.delete_expired().await,
            CodeStoreBackend::Redis(adapter) => adapter.delete_expired().await,
        }
    }
}
