mod users;
mod utils;

pub use users::{registration_routes, verify_user_routes};
pub use utils::emails::Mailer;
