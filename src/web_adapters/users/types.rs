use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub client_id: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ResendEmailRequest {
    pub email: String,
    pub client_id: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct VerifyUserParameters {
    pub code: String,
    /// Echoed in links for display; the code alone identifies the user.
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}
