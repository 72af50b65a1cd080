use chrono::{DateTime, Utc};
use sea_orm::{
    prelude::DateTimeWithTimeZone, ActiveModelTrait, ColumnTrait, DbConn, EntityTrait,
    QueryFilter, Set,
};

use entities::expiring_code::{ActiveModel, Column, Entity, Model};

use crate::{
    ensure_future_expiry, generate_code, CodeStoreError, ExpiringCode, ExpiringCodeStore,
};

#[derive(Clone)]
pub struct ExpiringCodeAdapter<'a> {
    pub db: &'a DbConn,
}

impl<'a> ExpiringCodeAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self { db }
    }
}

impl From<Model> for ExpiringCode {
    fn from(value: Model) -> Self {
        Self {
            code: value.code,
            expires_at: value.expires_at.with_timezone(&Utc),
            data: value.data,
        }
    }
}

impl ExpiringCodeStore for ExpiringCodeAdapter<'_> {
    async fn generate(
        self,
        data: String,
        expires_at: DateTime<Utc>,
    ) -> Result<ExpiringCode, CodeStoreError> {
        ensure_future_expiry(expires_at)?;
        let row = ActiveModel {
            code: Set(generate_code()),
            expires_at: Set(expires_at.into()),
            data: Set(data),
        }
        .insert(self.db)
        .await?;
        Ok(row.into())
    }

    async fn redeem(self, code: String) -> Result<Option<ExpiringCode>, CodeStoreError> {
        let now = Utc::now();
        let found: ExpiringCode = match Entity::find_by_id(code.clone()).one(self.db).await? {
            Some(row) => row.into(),
            None => return Ok(None),
        };

        // The conditional delete decides the winner between concurrent redeemers.
        let deleted = Entity::delete_many()
            .filter(Column::Code.eq(code))
            .exec(self.db)
            .await?;
        if deleted.rows_affected == 0 {
            tracing::event!(target: "backend", tracing::Level::INFO, "Code was redeemed by a concurrent request.");
            return Ok(None);
        }

        match found.is_expired_at(now) {
            true => Ok(None),
            false => Ok(Some(found)),
        }
    }

    async fn delete_expired(self) -> Result<u64, CodeStoreError> {
        let now: DateTimeWithTimeZone = Utc::now().into();
        let res = Entity::delete_many()
            .filter(Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;
        Ok(res.rows_affected)
    }
}
