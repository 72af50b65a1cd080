use chrono::{TimeDelta, Utc};
use common::settings::types::Settings;
use db_adapters::{
    oauth_client_adapter::OauthClientQuery,
    user_adapter::{UserFilter, UserMutation, UserQuery},
    ExpiringCodeStore,
};
use entities::user;

use crate::{error_500, UseCaseError};

use self::{
    activation_email::{activation_link, render_activation_email},
    branding::resolve_branding,
    message_service::{MessageService, MessageType},
    password_policy::PasswordValidator,
    types::{ActivationPayload, TenantContext},
};

pub mod activation_email;
pub mod begin_activation;
pub mod branding;
pub mod complete_activation;
pub mod message_service;
pub mod password_policy;
pub mod resend_verification_code;
pub mod types;

/// Self-service signup: an unverified user plus an emailed single-use code that verifies it.
pub struct ActivationWorkflow<'a, U, C, O, P, M> {
    user_adapter: U,
    code_store: C,
    client_adapter: O,
    password_validator: &'a P,
    message_service: &'a M,
    settings: &'a Settings,
}

impl<'a, U, C, O, P, M> ActivationWorkflow<'a, U, C, O, P, M>
where
    U: UserFilter + UserQuery + UserMutation + Clone,
    C: ExpiringCodeStore + Clone,
    O: OauthClientQuery + Clone,
    P: PasswordValidator,
    M: MessageService,
{
    pub fn init(
        user_adapter: U,
        code_store: C,
        client_adapter: O,
        password_validator: &'a P,
        message_service: &'a M,
        settings: &'a Settings,
    ) -> Self {
        Self {
            user_adapter,
            code_store,
            client_adapter,
            password_validator,
            message_service,
            settings,
        }
    }

    /// Issues a fresh code for `user` and mails the activation link.
    async fn send_activation_code(
        &self,
        tenant: &TenantContext,
        user: &user::Model,
        client_id: String,
    ) -> Result<(), UseCaseError> {
        let minutes = self.settings.activation.code_expiration_minutes;
        let expires_at = TimeDelta::try_minutes(minutes)
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .ok_or_else(|| {
                error_500(format!("Code expiration out of range: {} minutes", minutes))
            })?;
        let data = serde_json::to_string(&ActivationPayload {
            user_id: user.id,
            client_id,
        })
        .map_err(error_500)?;
        let code = self
            .code_store
            .clone()
            .generate(data, expires_at)
            .await
            .map_err(error_500)?;

        let branding = resolve_branding(tenant, self.settings.activation.brand);
        let link = activation_link(
            &self.settings.application.base_url,
            tenant,
            &code.code,
            &user.email,
        );
        let html_content =
            render_activation_email(&branding, &link, &user.email).map_err(error_500)?;

        self.message_service
            .send_message(
                &user.email,
                MessageType::CreateAccountConfirmation,
                branding.subject,
                &html_content,
            )
            .await
            .map_err(UseCaseError::InternalServerError)?;
        tracing::event!(target: "backend", tracing::Level::INFO, user_id = %user.id, "Activation code sent.");
        Ok(())
    }
}
