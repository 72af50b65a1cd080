use actix_web::{http, test};
use entities::user;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};

use crate::utils::{code_from_outbox, init_app, Connections};

#[actix_web::test]
async fn register_then_verify() -> Result<(), DbErr> {
    let Connections { app, db, mailer } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let code = code_from_outbox(&mailer, "user@example.com").unwrap();
    let req = test::TestRequest::get()
        .uri(&format!(
            "/verify_user?code={}&email=user%40example.com",
            code
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::SEE_OTHER);

    let user_in_db = user::Entity::find()
        .filter(user::Column::Email.eq("user@example.com"))
        .one(&db)
        .await?
        .unwrap();
    assert!(user_in_db.is_verified);
    assert!(user_in_db.is_active);

    // The link works once.
    let req = test::TestRequest::get()
        .uri(&format!(
            "/verify_user?code={}&email=user%40example.com",
            code
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    // A verified account can neither ask for another link nor register again.
    let req = test::TestRequest::post()
        .uri("/api/users/register/resend-email")
        .set_json(serde_json::json!({ "email": "user@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "password",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CONFLICT);

    Ok(())
}

#[actix_web::test]
async fn resent_and_original_links_both_work_until_one_is_used() -> Result<(), DbErr> {
    let Connections { app, mailer, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "password",
            "client_id": "app",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);
    let original = code_from_outbox(&mailer, "user@example.com").unwrap();

    let req = test::TestRequest::post()
        .uri("/api/users/register/resend-email")
        .set_json(serde_json::json!({ "email": "user@example.com", "client_id": "app" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);
    let resent = code_from_outbox(&mailer, "user@example.com").unwrap();
    assert_ne!(original, resent);

    for code in [original, resent] {
        let req = test::TestRequest::get()
            .uri(&format!(
                "/verify_user?code={}&email=user%40example.com",
                code
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::SEE_OTHER);
    }

    Ok(())
}
