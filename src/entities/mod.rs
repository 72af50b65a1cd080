//! `SeaORM` Entity definitions for the account activation tables.

pub mod prelude;

pub mod custom_methods;
pub mod expiring_code;
pub mod identity_zone;
pub mod oauth_client;
pub mod user;
