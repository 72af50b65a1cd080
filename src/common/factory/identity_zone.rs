use chrono::Utc;
use entities::identity_zone;
use sea_orm::Set;

pub fn identity_zone(subdomain: &str) -> identity_zone::ActiveModel {
    identity_zone::ActiveModel {
        id: Set(format!("{}-zone-id", subdomain)),
        subdomain: Set(subdomain.to_string()),
        name: Set(subdomain.to_string()),
        created_at: Set(Utc::now().into()),
    }
}

pub trait IdentityZoneFactory {
    fn name(self, name: &str) -> identity_zone::ActiveModel;
}

impl IdentityZoneFactory for identity_zone::ActiveModel {
    fn name(mut self, name: &str) -> identity_zone::ActiveModel {
        self.name = Set(name.to_string());
        self
    }
}
