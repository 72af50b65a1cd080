use common::settings::types::ActivationSettings;
use entities::identity_zone;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The zone a request is served for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    pub zone_id: String,
    pub name: String,
    pub subdomain: String,
    pub is_default: bool,
}

impl TenantContext {
    pub fn default_zone(settings: &ActivationSettings) -> Self {
        Self {
            zone_id: settings.default_zone_id.clone(),
            name: settings.default_zone_name.clone(),
            subdomain: String::new(),
            is_default: true,
        }
    }
}

impl From<identity_zone::Model> for TenantContext {
    fn from(zone: identity_zone::Model) -> Self {
        Self {
            zone_id: zone.id,
            name: zone.name,
            subdomain: zone.subdomain,
            is_default: false,
        }
    }
}

/// What an activation code unlocks once redeemed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActivationPayload {
    pub user_id: Uuid,
    pub client_id: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountCreationResponse {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub redirect_location: Option<String>,
}
