pub use super::expiring_code::Entity as ExpiringCode;
pub use super::identity_zone::Entity as IdentityZone;
pub use super::oauth_client::Entity as OauthClient;
pub use super::user::Entity as User;
