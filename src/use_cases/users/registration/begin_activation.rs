use db_adapters::{
    oauth_client_adapter::OauthClientQuery,
    user_adapter::{
        CreateUserOutcome, CreateUserParams, UserFilter, UserMutation, UserQuery, DEFAULT_ORIGIN,
    },
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
    /// Registers `email` and mails it an activation link. Registering an email that is still
    /// pending verification reuses the record and sends a new link.
    #[tracing::instrument(name = "Beginning account activation", skip(self, password))]
    pub async fn begin_activation(
        self,
        tenant: &TenantContext,
        email: String,
        password: String,
        client_id: String,
    ) -> Result<(), UseCaseError> {
        self.password_validator
            .validate(&password)
            .map_err(UseCaseError::PasswordPolicyViolation)?;

        let outcome = self
            .user_adapter
            .clone()
            .create(CreateUserParams {
                zone_id: tenant.zone_id.clone(),
                email: email.clone(),
                password,
                given_name: email.clone(),
                family_name: email,
                origin: DEFAULT_ORIGIN.to_string(),
            })
            .await
            .map_err(error_500)?;

        let user = match outcome {
            CreateUserOutcome::Created(user) => user,
            CreateUserOutcome::Conflict(existing) => match existing.activation_state() {
                ActivationState::Verified => return Err(UseCaseError::DuplicateAccount),
                ActivationState::PendingUnverified | ActivationState::NoAccount => {
                    tracing::event!(target: "backend", tracing::Level::INFO, user_id = %existing.id, "Email is pending verification, sending a new code.");
                    existing
                }
            },
        };

        self.send_activation_code(tenant, &user, client_id).await
    }
}
