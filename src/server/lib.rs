use actix_web::{
    web::{scope, ServiceConfig},
    Scope,
};
use web_adapters::{registration_routes, verify_user_routes};

pub fn get_routes() -> Scope {
    scope("/api")
        .service(health_check)
        .configure(registration_routes)
}

/// Routes living outside of `/api`, e.g. the target of emailed links.
pub fn get_public_routes(cfg: &mut ServiceConfig) {
    cfg.configure(verify_user_routes);
}

#[actix_web::get("/health-check")]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json("Application is safe and healthy.")
}
