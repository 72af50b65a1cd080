use actix_web::{
    post,
    web::{Data, Json},
    HttpRequest, HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::{oauth_client_adapter::OauthClientAdapter, user_adapter::UserAdapter};
use deadpool_redis::Pool;
use sea_orm::DbConn;
use use_cases::users::registration::{password_policy::PasswordPolicy, ActivationWorkflow};

use crate::{
    users::types::{MessageResponse, RegisterRequest},
    utils::{emails::Mailer, response_404, response_500, tenant::resolve_tenant},
};

use super::{code_store, error_response};

#[tracing::instrument(
    name = "Registering a new user",
    skip(req, db, redis_pool, mailer, settings, body),
    fields(email = %body.email)
)]
#[post("")]
pub async fn register(
    req: HttpRequest,
    db: Data<DbConn>,
    redis_pool: Option<Data<Pool>>,
    mailer: Data<Mailer>,
    settings: Data<Settings>,
    body: Json<RegisterRequest>,
) -> HttpResponse {
    let tenant = match resolve_tenant(&req, &db, &settings).await {
        Ok(Some(tenant)) => tenant,
        Ok(None) => return response_404("Identity zone was not found."),
        Err(e) => return response_500(e),
    };
    let body = body.into_inner();
    let client_id = body
        .client_id
        .unwrap_or_else(|| settings.application.default_client_id.clone());
    let password_policy = PasswordPolicy::init(&settings.password_policy);

    match ActivationWorkflow::init(
        UserAdapter::init(&db),
        code_store(&db, redis_pool.as_ref()),
        OauthClientAdapter::init(&db),
        &password_policy,
        mailer.get_ref(),
        &settings,
    )
    .begin_activation(&tenant, body.email, body.password, client_id)
    .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse {
            message: "An activation link has been sent to your email address.".to_string(),
        }),
        Err(e) => error_response(e),
    }
}
