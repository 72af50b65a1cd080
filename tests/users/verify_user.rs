use actix_web::{http, test};
use common::factory::{self, *};
use entities::user;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use uuid::Uuid;

use crate::utils::{init_app, Connections};

fn activation_data(user_id: Uuid, client_id: &str) -> String {
    serde_json::json!({ "user_id": user_id, "client_id": client_id }).to_string()
}

#[actix_web::test]
async fn happy_path() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().is_verified(false).insert(&db).await?;
    factory::expiring_code("the_secret_code", &activation_data(user.id, "login"))
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri("/verify_user?code=the_secret_code&email=user%40example.com")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(http::header::LOCATION).unwrap(),
        "http://localhost:3000/auth/confirmed"
    );

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user_id"], serde_json::json!(user.id));
    assert_eq!(body["username"], serde_json::json!(user.email));
    assert_eq!(body["email"], serde_json::json!(user.email));
    assert_eq!(body["redirect_location"], serde_json::Value::Null);

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert!(user_in_db.is_verified);
    assert!(user_in_db.is_active);

    Ok(())
}

#[actix_web::test]
async fn redirects_to_client_signup_url() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().is_verified(false).insert(&db).await?;
    factory::oauth_client("app")
        .signup_redirect_url("http://app.example.com/welcome")
        .insert(&db)
        .await?;
    factory::expiring_code("the_secret_code", &activation_data(user.id, "app"))
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri("/verify_user?code=the_secret_code&email=user%40example.com")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(http::header::LOCATION).unwrap(),
        "http://app.example.com/welcome"
    );

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_code_is_unknown() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/verify_user?code=never_issued&email=user%40example.com")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_code_is_expired() -> Result<(), DbErr> {
    let Connections { app, db, .. } = init_app().await?;
    let user = factory::user().is_verified(false).insert(&db).await?;
    factory::expiring_code("the_secret_code", &activation_data(user.id, "login"))
        .expired()
        .insert(&db)
        .await?;

    let req = test::TestRequest::get()
        .uri("/verify_user?code=the_secret_code&email=user%40example.com")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    let user_in_db = user::Entity::find_by_id(user.id).one(&db).await?.unwrap();
    assert!(!user_in_db.is_verified);

    Ok(())
}

#[actix_web::test]
async fn bad_request_if_code_is_missing() -> Result<(), DbErr> {
    let Connections { app, .. } = init_app().await?;

    let req = test::TestRequest::get()
        .uri("/verify_user?email=user%40example.com")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    Ok(())
}
