use actix_web::{http, test};
use common::{
    factory::{self, *},
    settings::get_test_settings,
};
use entities::user;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use use_cases::users::registration::message_service::MessageType;

use crate::utils::{init_app, init_app_with, Connections};

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
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

    let user_in_db = user::Entity::find()
        .filter(user::Column::Email.eq("user@example.com"))
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(user_in_db.zone_id, "uaa");
    assert!(!user_in_db.is_verified);

    let messages = mailer.outbox().unwrap().messages_to("user@example.com");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message_type, MessageType::CreateAccountConfirmation);
    assert_eq!(messages[0].subject, "Activate your account");
    assert!(messages[0]
        .html_content
        .contains("http://uaa.example.com/verify_user?code="));
    assert!(!messages[0].html_content.contains("Pivotal"));

    Ok(())
}

#[actix_web::test]
async fn conflict_if_email_is_verified() -> Result<(), DbErr> {
    let Connections { app, db, mailer } = init_app().await?;
    factory::user()
        .email("user@example.com")
        .is_verified(true)
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "password",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::CONFLICT);
    assert!(mailer.outbox().unwrap().messages().is_empty());

    Ok(())
}

#[actix_web::test]
async fn pending_email_gets_a_new_link() -> Result<(), DbErr> {
    let Connections { app, db, mailer } = init_app().await?;

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/users/register")
            .set_json(serde_json::json!({
                "email": "user@example.com",
                "password": "password",
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::OK);
    }

    let users_in_db = user::Entity::find()
        .filter(user::Column::Email.eq("user@example.com"))
        .all(&db)
        .await?;
    assert_eq!(users_in_db.len(), 1);
    assert_eq!(
        mailer.outbox().unwrap().messages_to("user@example.com").len(),
        2
    );

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_password_breaks_policy() -> Result<(), DbErr> {
    let mut settings = get_test_settings();
    settings.password_policy.min_length = 8;
    settings.password_policy.require_digit = 1;
    let Connections { app, db, mailer } = init_app_with(settings).await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "short",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("at least 8 characters"));
    assert!(error.contains("1 digit"));

    assert!(user::Entity::find().all(&db).await?.is_empty());
    assert!(mailer.outbox().unwrap().messages().is_empty());

    Ok(())
}

#[actix_web::test]
async fn register_on_scoped_zone() -> Result<(), DbErr> {
    let Connections { app, db, mailer } = init_app().await?;
    let zone = factory::identity_zone("test")
        .name("The Twiglet Zone")
        .insert(&db)
        .await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .insert_header(("host", "test.uaa.example.com"))
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "password",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let user_in_db = user::Entity::find()
        .filter(user::Column::Email.eq("user@example.com"))
        .one(&db)
        .await?
        .unwrap();
    assert_eq!(user_in_db.zone_id, zone.id);

    let messages = mailer.outbox().unwrap().messages_to("user@example.com");
    assert!(messages[0]
        .html_content
        .contains("http://test.uaa.example.com/verify_user?code="));
    assert!(messages[0].html_content.contains("The Twiglet Zone"));
    assert!(!messages[0].html_content.contains("Cloud Foundry"));

    Ok(())
}

#[actix_web::test]
async fn not_found_if_zone_is_unknown() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/users/register")
        .insert_header(("host", "nowhere.uaa.example.com"))
        .set_json(serde_json::json!({
            "email": "user@example.com",
            "password": "password",
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
    assert!(user::Entity::find().all(&db).await?.is_empty());

    Ok(())
}
