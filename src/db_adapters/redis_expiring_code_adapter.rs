use chrono::{DateTime, Utc};
use deadpool_redis::{
    redis::{AsyncCommands, SetExpiry, SetOptions},
    Pool,
};

use crate::{
    ensure_future_expiry, generate_code, CodeStoreError, ExpiringCode, ExpiringCodeStore,
};

const CODE_KEY_PREFIX: &str = "expiring_code_";

/// Keeps codes in Redis. Expiry is delegated to key TTLs and redemption to `GETDEL`.
#[derive(Clone)]
pub struct RedisExpiringCodeAdapter<'a> {
    pub pool: &'a Pool,
}

impl<'a> RedisExpiringCodeAdapter<'a> {
    pub fn init(pool: &'a Pool) -> Self {
        Self { pool }
    }
}

fn redis_key(code: &str) -> String {
    format!("{}{}", CODE_KEY_PREFIX, code)
}

impl ExpiringCodeStore for RedisExpiringCodeAdapter<'_> {
    #[tracing::instrument(name = "Storing expiring code in redis", skip(self, data))]
    async fn generate(
        self,
        data: String,
        expires_at: DateTime<Utc>,
    ) -> Result<ExpiringCode, CodeStoreError> {
        ensure_future_expiry(expires_at)?;
        let expiring_code = ExpiringCode {
            code: generate_code(),
            expires_at,
            data,
        };
        // Round up so the key never disappears before `expires_at`.
        let ttl_millis = (expires_at - Utc::now()).num_milliseconds().max(1);
        let ttl_seconds = ((ttl_millis + 999) / 1000) as u64;

        let mut redis_con = self.pool.get().await?;
        redis_con
            .set_options::<String, String, ()>(
                redis_key(&expiring_code.code),
                serde_json::to_string(&expiring_code)?,
                SetOptions::default().with_expiration(SetExpiry::EX(ttl_seconds)),
            )
            .await
            .map_err(|e| {
                tracing::event!(target: "redis", tracing::Level::ERROR, "RedisError (set): {}", e);
                e
            })?;
        Ok(expiring_code)
    }

    async fn redeem(self, code: String) -> Result<Option<ExpiringCode>, CodeStoreError> {
        let mut redis_con = self.pool.get().await?;
        let stored: Option<String> = redis_con.get_del(redis_key(&code)).await.map_err(|e| {
            tracing::event!(target: "redis", tracing::Level::ERROR, "RedisError (getdel): {}", e);
            e
        })?;

        match stored {
            Some(stored) => {
                let expiring_code: ExpiringCode = serde_json::from_str(&stored)?;
                match expiring_code.is_expired_at(Utc::now()) {
                    true => Ok(None),
                    false => Ok(Some(expiring_code)),
                }
            }
            None => Ok(None),
        }
    }

    async fn delete_expired(self) -> Result<u64, CodeStoreError> {
        // Redis evicts expired keys on its own.
        Ok(0)
    }
}
