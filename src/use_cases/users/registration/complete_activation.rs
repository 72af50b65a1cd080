use db_adapters::{
    oauth_client_adapter::OauthClientQuery,
    user_adapter::{UserFilter, UserMutation, UserQuery},
    ExpiringCodeStore,
};

use crate::{error_500, UseCaseError};

use super::{
    message_service::MessageService,
    password_policy::PasswordValidator,
    types::{AccountCreationResponse, ActivationPayload},
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
    /// Redeems `code` and verifies the user it was issued for. Unknown, expired and already
    /// used codes are indistinguishable to the caller.
    #[tracing::instrument(name = "Completing account activation", skip(self, code))]
    pub async fn complete_activation(
        self,
        code: String,
    ) -> Result<AccountCreationResponse, UseCaseError> {
        let redeemed = self
            .code_store
            .clone()
            .redeem(code)
            .await
            .map_err(error_500)?
            .ok_or(UseCaseError::InvalidOrExpiredCode)?;
        let payload: ActivationPayload =
            serde_json::from_str(&redeemed.data).map_err(error_500)?;

        let user = self
            .user_adapter
            .clone()
            .verify(payload.user_id)
            .await
            .map_err(error_500)?;

        let redirect_location = match self
            .client_adapter
            .clone()
            .get_by_client_id(payload.client_id)
            .await
        {
            Ok(client) => client.and_then(|client| client.signup_redirect_url),
            Err(e) => {
                tracing::event!(target: "backend", tracing::Level::WARN, "Client lookup failed, activating without redirect: {:?}", e);
                None
            }
        };

        tracing::event!(target: "backend", tracing::Level::INFO, user_id = %user.id, "Account activated.");
        Ok(AccountCreationResponse {
            user_id: user.id,
            username: user.email.clone(),
            email: user.email,
            redirect_location,
        })
    }
}
