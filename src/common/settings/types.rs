use serde::Deserialize;

#[derive(Deserialize, Clone, Default, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub activation: ActivationSettings,
    pub database: DatabaseSettings,
    pub debug: bool,
    pub email: EmailSettings,
    pub password_policy: PasswordPolicySettings,
    pub redis: RedisSettings,
}

impl Settings {
    pub fn base_settings() -> Self {
        Self {
            application: ApplicationSettings {
                port: 8080,
                max_log_files: 14,
                default_client_id: "login".to_string(),
                ..Default::default()
            },
            activation: ActivationSettings {
                code_expiration_minutes: 60,
                code_store_backend: CodeStoreBackendKind::Database,
                brand: Brand::Oss,
                default_zone_id: "uaa".to_string(),
                default_zone_name: "uaa".to_string(),
                // Every 10 minutes.
                expired_code_sweep_schedule: "0 */10 * * * *".to_string(),
            },
            password_policy: PasswordPolicySettings {
                min_length: 0,
                max_length: 255,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    /// Scheme and host of the default zone, e.g. `https://login.example.com`.
    /// Scoped zones are served from `<subdomain>.<host>`.
    pub base_url: String,
    pub frontend_url: String,
    pub max_log_files: usize,
    pub default_client_id: String,
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct ActivationSettings {
    pub code_expiration_minutes: i64,
    pub code_store_backend: CodeStoreBackendKind,
    pub brand: Brand,
    pub default_zone_id: String,
    pub default_zone_name: String,
    pub expired_code_sweep_schedule: String,
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct DatabaseSettings {
    pub url: String,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct RedisSettings {
    pub url: String,
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct EmailSettings {
    pub backend: EmailBackendKind,
    pub host: String,
    pub host_user: String,
    pub host_user_password: String,
    pub sender: String,
}

#[derive(Deserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct PasswordPolicySettings {
    pub min_length: usize,
    pub max_length: usize,
    pub require_upper_case_character: usize,
    pub require_lower_case_character: usize,
    pub require_digit: usize,
    pub require_special_character: usize,
}

/// Wording variant for outgoing messages on the default zone.
#[derive(Deserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    Pivotal,
    #[default]
    Oss,
}

impl TryFrom<String> for Brand {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "pivotal" => Ok(Self::Pivotal),
            "oss" => Ok(Self::Oss),
            other => Err(format!("{} is not a supported brand.", other)),
        }
    }
}

#[derive(Deserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CodeStoreBackendKind {
    #[default]
    Database,
    Redis,
}

impl TryFrom<String> for CodeStoreBackendKind {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "database" => Ok(Self::Database),
            "redis" => Ok(Self::Redis),
            other => Err(format!("{} is not a supported code store backend.", other)),
        }
    }
}

#[derive(Deserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmailBackendKind {
    #[default]
    Smtp,
    Outbox,
}

impl TryFrom<String> for EmailBackendKind {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "smtp" => Ok(Self::Smtp),
            "outbox" => Ok(Self::Outbox),
            other => Err(format!("{} is not a supported email backend.", other)),
        }
    }
}

pub enum Environment {
    Testing,
    Development,
    Production,
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "testing" => Ok(Self::Testing),
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!("{} is not a supported environment.", other)),
        }
    }
}
