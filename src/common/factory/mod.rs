mod expiring_code;
mod identity_zone;
mod oauth_client;
mod user;

pub use expiring_code::*;
pub use identity_zone::*;
pub use oauth_client::*;
pub use user::*;
