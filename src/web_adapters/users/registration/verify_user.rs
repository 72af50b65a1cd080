use actix_web::{
    get,
    http::header,
    web::{Data, Query},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::{oauth_client_adapter::OauthClientAdapter, user_adapter::UserAdapter};
use deadpool_redis::Pool;
use sea_orm::DbConn;
use use_cases::users::registration::{password_policy::PasswordPolicy, ActivationWorkflow};

use crate::{users::types::VerifyUserParameters, utils::emails::Mailer};

use super::{code_store, error_response};

#[tracing::instrument(
    name = "Activating a new user",
    skip(db, redis_pool, mailer, settings, parameters),
    fields(email = ?parameters.email)
)]
#[get("/verify_user")]
pub async fn verify_user(
    parameters: Query<VerifyUserParameters>,
    db: Data<DbConn>,
    redis_pool: Option<Data<Pool>>,
    mailer: Data<Mailer>,
    settings: Data<Settings>,
) -> HttpResponse {
    let password_policy = PasswordPolicy::init(&settings.password_policy);

    match ActivationWorkflow::init(
        UserAdapter::init(&db),
        code_store(&db, redis_pool.as_ref()),
        OauthClientAdapter::init(&db),
        &password_policy,
        mailer.get_ref(),
        &settings,
    )
    .complete_activation(parameters.into_inner().code)
    .await
    {
        Ok(res) => {
            let location = res.redirect_location.clone().unwrap_or_else(|| {
                format!("{}/auth/confirmed", settings.application.frontend_url)
            });
            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, location))
                .json(res)
        }
        Err(e) => error_response(e),
    }
}
