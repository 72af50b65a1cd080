use chrono::Utc;
use entities::user;
use sea_orm::Set;

pub fn user() -> user::ActiveModel {
    let now = Utc::now();
    user::ActiveModel {
        id: Set(uuid::Uuid::now_v7()),
        zone_id: Set("uaa".to_string()),
        email: Set(format!("{}@test.com", uuid::Uuid::now_v7())),
        password: Set("password".to_string()),
        given_name: Set("Lynx".to_string()),
        family_name: Set("Levin".to_string()),
        origin: Set("uaa".to_string()),
        is_verified: Set(true),
        is_active: Set(true),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait UserFactory {
    fn email(self, email: &str) -> user::ActiveModel;
    fn zone_id(self, zone_id: &str) -> user::ActiveModel;
    fn is_verified(self, is_verified: bool) -> user::ActiveModel;
}

impl UserFactory for user::ActiveModel {
    fn email(mut self, email: &str) -> user::ActiveModel {
        self.email = Set(email.to_string());
        self
    }

    fn zone_id(mut self, zone_id: &str) -> user::ActiveModel {
        self.zone_id = Set(zone_id.to_string());
        self
    }

    fn is_verified(mut self, is_verified: bool) -> user::ActiveModel {
        self.is_verified = Set(is_verified);
        self
    }
}
