use actix_web::{web::Data, HttpResponse};
use db_adapters::{
    code_store_backend::CodeStoreBackend, expiring_code_adapter::ExpiringCodeAdapter,
    redis_expiring_code_adapter::RedisExpiringCodeAdapter,
};
use deadpool_redis::Pool;
use sea_orm::DbConn;
use use_cases::UseCaseError;

use crate::utils::{response_400, response_404, response_409, response_500};

mod register;
mod resend_email;
pub mod verify_user;

pub use register::register as register_factory;
pub use resend_email::resend_email as resend_email_factory;

/// A redis pool is only registered when codes are configured to live in redis.
fn code_store<'a>(db: &'a DbConn, redis_pool: Option<&'a Data<Pool>>) -> CodeStoreBackend<'a> {
    match redis_pool {
        Some(pool) => CodeStoreBackend::Redis(RedisExpiringCodeAdapter::init(pool.get_ref())),
        None => CodeStoreBackend::Database(ExpiringCodeAdapter::init(db)),
    }
}

fn error_response(e: UseCaseError) -> HttpResponse {
    match &e {
        UseCaseError::PasswordPolicyViolation(reason) => response_400(reason),
        UseCaseError::InvalidOrExpiredCode => response_400(&e.to_string()),
        UseCaseError::NotFound(message) => response_404(message),
        UseCaseError::DuplicateAccount => response_409(&e.to_string()),
        UseCaseError::InternalServerError(_) => response_500(e),
    }
}
