pub mod code_store_backend;
pub mod expiring_code_adapter;
pub mod identity_zone_adapter;
pub mod oauth_client_adapter;
pub mod redis_expiring_code_adapter;
pub mod user_adapter;

use std::{fmt, future::Future};

use argon2::password_hash::rand_core::{OsRng, RngCore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bytes of OS randomness behind every generated code.
const CODE_ENTROPY_BYTES: usize = 32;

/// A generated single-use code together with the payload it unlocks.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExpiringCode {
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub data: String,
}

impl ExpiringCode {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Persists single-use codes. `redeem` hands the code out at most once: of several concurrent
/// callers presenting the same code, exactly one receives it.
pub trait ExpiringCodeStore {
    fn generate(
        self,
        data: String,
        expires_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<ExpiringCode, CodeStoreError>>;
    fn redeem(
        self,
        code: String,
    ) -> impl Future<Output = Result<Option<ExpiringCode>, CodeStoreError>>;
    fn delete_expired(self) -> impl Future<Output = Result<u64, CodeStoreError>>;
}

#[derive(Debug)]
pub enum CodeStoreError {
    ExpiryNotInFuture,
    Db(sea_orm::DbErr),
    RedisPool(deadpool_redis::PoolError),
    Redis(deadpool_redis::redis::RedisError),
    Serialization(serde_json::Error),
}

impl fmt::Display for CodeStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeStoreError::ExpiryNotInFuture => write!(f, "Expiration must be in the future"),
            CodeStoreError::Db(e) => write!(f, "DbErr: {}", e),
            CodeStoreError::RedisPool(e) => write!(f, "PoolError: {}", e),
            CodeStoreError::Redis(e) => write!(f, "RedisError: {}", e),
            CodeStoreError::Serialization(e) => write!(f, "SerializationError: {}", e),
        }
    }
}

impl From<sea_orm::DbErr> for CodeStoreError {
    fn from(value: sea_orm::DbErr) -> Self {
        CodeStoreError::Db(value)
    }
}

impl From<deadpool_redis::PoolError> for CodeStoreError {
    fn from(value: deadpool_redis::PoolError) -> Self {
        CodeStoreError::RedisPool(value)
    }
}

impl From<deadpool_redis::redis::RedisError> for CodeStoreError {
    fn from(value: deadpool_redis::redis::RedisError) -> Self {
        CodeStoreError::Redis(value)
    }
}

impl From<serde_json::Error> for CodeStoreError {
    fn from(value: serde_json::Error) -> Self {
        CodeStoreError::Serialization(value)
    }
}

/// Opaque, hex encoded code drawn from the OS RNG.
pub(crate) fn generate_code() -> String {
    let mut buff = [0_u8; CODE_ENTROPY_BYTES];
    OsRng.fill_bytes(&mut buff);
    hex::encode(buff)
}

pub(crate) fn ensure_future_expiry(expires_at: DateTime<Utc>) -> Result<(), CodeStoreError> {
    if expires_at <= Utc::now() {
        return Err(CodeStoreError::ExpiryNotInFuture);
    }
    Ok(())
}
