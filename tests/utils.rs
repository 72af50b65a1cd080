use actix_http::Request;
use actix_web::{
    dev::{Service, ServiceResponse},
    test,
    web::Data,
    App,
};
use common::settings::{get_test_settings, types::Settings};
use sea_orm::{DbConn, DbErr};
use server::{get_public_routes, get_routes};
use web_adapters::Mailer;

pub struct Connections<S> {
    pub app: S,
    pub db: DbConn,
    pub mailer: Mailer,
}

pub async fn init_app() -> Result<
    Connections<impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>>,
    DbErr,
> {
    init_app_with(get_test_settings()).await
}

pub async fn init_app_with(
    settings: Settings,
) -> Result<
    Connections<impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>>,
    DbErr,
> {
    let db = test_utils::init_db().await?;
    let mailer = Mailer::init(&settings.email).map_err(DbErr::Custom)?;
    let app = test::init_service(
        // Same composition as startup.rs, minus redis.
        App::new()
            .service(get_routes())
            .configure(get_public_routes)
            .app_data(Data::new(db.clone()))
            .app_data(Data::new(mailer.clone()))
            .app_data(Data::new(settings)),
    )
    .await;
    Ok(Connections { app, db, mailer })
}

/// The code carried by the latest activation link mailed to `email`.
pub fn code_from_outbox(mailer: &Mailer, email: &str) -> Option<String> {
    let message = mailer.outbox()?.messages_to(email).pop()?;
    let (_, rest) = message.html_content.split_once("verify_user?code=")?;
    let (code, _) = rest.split_once("&amp;")?;
    Some(code.to_string())
}
