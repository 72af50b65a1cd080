use chrono::Utc;
use entities::oauth_client;
use sea_orm::Set;

pub fn oauth_client(client_id: &str) -> oauth_client::ActiveModel {
    oauth_client::ActiveModel {
        client_id: Set(client_id.to_string()),
        signup_redirect_url: Set(None),
        created_at: Set(Utc::now().into()),
    }
}

pub trait OauthClientFactory {
    fn signup_redirect_url(self, url: &str) -> oauth_client::ActiveModel;
}

impl OauthClientFactory for oauth_client::ActiveModel {
    fn signup_redirect_url(mut self, url: &str) -> oauth_client::ActiveModel {
        self.signup_redirect_url = Set(Some(url.to_string()));
        self
    }
}
