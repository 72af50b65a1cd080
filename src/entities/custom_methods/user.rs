use crate::user;

/// Activation state of an email address within a zone, derived from the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationState {
    NoAccount,
    PendingUnverified,
    Verified,
}

pub trait UserActivationTrait {
    fn activation_state(&self) -> ActivationState;
}

impl UserActivationTrait for user::Model {
    fn activation_state(&self) -> ActivationState {
        match self.is_verified {
            true => ActivationState::Verified,
            false => ActivationState::PendingUnverified,
        }
    }
}

impl UserActivationTrait for Option<user::Model> {
    fn activation_state(&self) -> ActivationState {
        match self {
            Some(user) => user.activation_state(),
            None => ActivationState::NoAccount,
        }
    }
}
