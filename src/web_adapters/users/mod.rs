use actix_web::web::{scope, ServiceConfig};
use registration::{
    register_factory, resend_email_factory, verify_user::verify_user as verify_user_factory,
};

mod registration;
pub mod types;

pub fn registration_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/users").service(
            scope("/register")
                .service(register_factory)
                .service(resend_email_factory),
        ),
    );
}

/// Target of the emailed activation links, served outside of `/api`.
pub fn verify_user_routes(cfg: &mut ServiceConfig) {
    cfg.service(verify_user_factory);
}
