use db_adapters::{
    oauth_client_adapter::OauthClientQuery,
    user_adapter::{UserFilter, UserMutation, UserQuery},
    ExpiringCodeStore,
};
use entities::custom_methods::user::{ActivationState, UserActivationTrait};

use crate::{error_500, UseCaseError};

use super::{
    message_service::MessageService, password_policy::PasswordValidator, types::TenantContext,
    ActivationWorkflow,
};

impl<U, C, O, P, M> ActivationWorkflow<'_, U, C, O, P, M>
where
    U: UserFilter + UserQuery + UserMutation + Clone,
    C: ExpiringCodeStore + Clone,
    O: OauthClientQuery + Clone,
    P: PasswordValidator,
    M: MessageService,
{
    /// Codes issued earlier stay redeemable.
    #[tracing::instrument(name = "Resending verification code", skip(self))]
    pub async fn resend_verification_code(
        self,
        tenant: &TenantContext,
        email: String,
        client_id: String,
    ) -> Result<(), UseCaseError> {
        let user = self
            .user_adapter
            .clone()
            .filter_eq_zone(&tenant.zone_id)
            .get_by_email(email)
            .await
            .map_err(error_500)?;

        match (user.activation_state(), user) {
            (ActivationState::PendingUnverified, Some(user)) => {
                self.send_activation_code(tenant, &user, client_id).await
            }
            _ => Err(UseCaseError::NotFound(
                "No unverified user with this email address was found.".to_string(),
            )),
        }
    }
}
