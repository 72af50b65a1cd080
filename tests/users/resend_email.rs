use actix_web::{http, test};
use common::factory::{self, *};
use entities::expiring_code;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};

use crate::utils::{init_app, Connections};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, mailer } = init_app().await?;
    factory::user()
        .email("user@example.com")
        .is_verified(false)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register/resend-email")
        .set_json(serde_json::json!({ "email": "user@example.com" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    assert_eq!(expiring_code::Entity::find().all(&db).await?.len(), 1);
    assert_eq!(
        mailer.outbox().unwrap().messages_to("user@example.com").len(),
        1
    );

    Ok(())
}

#[actix_web::test]
async fn not_found_if_already_verified() -> Result<(), DbErr> {
    let Connections { app, db, mailer } = init_app().await?;
    factory::user()
        .email("user@example.com")
        .is_verified(true)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register/resend-email")
        .set_json(serde_json::json!({ "email": "user@example.com" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
    assert!(mailer.outbox().unwrap().messages().is_empty());

    Ok(())
}

#[actix_web::test]
async fn not_found_if_email_is_unknown() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register/resend-email")
        .set_json(serde_json::json!({ "email": "nobody@example.com" }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    Ok(())
}
