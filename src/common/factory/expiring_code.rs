use chrono::{Duration, Utc};
use entities::expiring_code;
use sea_orm::Set;

pub fn expiring_code(code: &str, data: &str) -> expiring_code::ActiveModel {
    expiring_code::ActiveModel {
        code: Set(code.to_string()),
        expires_at: Set((Utc::now() + Duration::hours(1)).into()),
        data: Set(data.to_string()),
    }
}

pub trait ExpiringCodeFactory {
    fn expired(self) -> expiring_code::ActiveModel;
}

impl ExpiringCodeFactory for expiring_code::ActiveModel {
    fn expired(mut self) -> expiring_code::ActiveModel {
        self.expires_at = Set((Utc::now() - Duration::seconds(1)).into());
        self
    }
}
