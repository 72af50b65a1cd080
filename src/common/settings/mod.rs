use std::env;

use crate::settings::types::{
    ActivationSettings, ApplicationSettings, DatabaseSettings, EmailBackendKind, EmailSettings,
    Environment, PasswordPolicySettings, RedisSettings, Settings,
};

pub mod types;

pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    dotenvy::from_filename(env_file_name)
        .map_err(|e| format!("Failed to fetch env file: {}", e))?;

    match Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
    {
        Ok(env) => match env {
            Environment::Testing => Ok(get_testing_settings()),
            Environment::Development => merge_env(get_development_settings()),
            Environment::Production => merge_env(get_production_settings()),
        },
        Err(e) => Err(format!("Failed to parse APP_ENVIRONMENT: {}", e)),
    }
}

/// Self-contained settings for tests: in-memory SQLite, outbox mailer, no env file needed.
pub fn get_test_settings() -> Settings {
    get_testing_settings()
}

fn get_testing_settings() -> Settings {
    let b = Settings::base_settings();
    Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".to_string(),
            base_url: "http://uaa.example.com".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            ..b.application
        },
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
        },
        debug: true,
        email: EmailSettings {
            backend: EmailBackendKind::Outbox,
            ..b.email
        },
        ..b
    }
}

fn get_development_settings() -> Settings {
    let b = Settings::base_settings();
    Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".to_string(),
            base_url: "http://localhost:8080".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            ..b.application
        },
        debug: true,
        ..b
    }
}

fn get_production_settings() -> Settings {
    let b = Settings::base_settings();
    Settings {
        application: ApplicationSettings {
            host: "0.0.0.0".to_string(),
            ..b.application
        },
        debug: false,
        password_policy: PasswordPolicySettings {
            min_length: 8,
            require_upper_case_character: 1,
            require_lower_case_character: 1,
            require_digit: 1,
            ..b.password_policy
        },
        ..b
    }
}

fn merge_env(s: Settings) -> Result<Settings, String> {
    Ok(Settings {
        application: ApplicationSettings {
            port: match env::var("APP_PORT") {
                Ok(port) => port.parse::<u16>().map_err(|e| e.to_string())?,
                Err(_) => s.application.port,
            },
            base_url: env::var("APP_BASE_URL").unwrap_or(s.application.base_url),
            frontend_url: env::var("APP_FRONTEND_URL").unwrap_or(s.application.frontend_url),
            ..s.application
        },
        activation: ActivationSettings {
            code_expiration_minutes: match env::var("CODE_EXPIRATION_MINUTES") {
                Ok(minutes) => parse_code_expiration_minutes(&minutes)?,
                Err(_) => s.activation.code_expiration_minutes,
            },
            code_store_backend: match env::var("CODE_STORE_BACKEND") {
                Ok(backend) => backend.try_into()?,
                Err(_) => s.activation.code_store_backend,
            },
            brand: match env::var("APP_BRAND") {
                Ok(brand) => brand.try_into()?,
                Err(_) => s.activation.brand,
            },
            ..s.activation
        },
        database: DatabaseSettings {
            url: get_env_var("DATABASE_URL")?,
        },
        debug: match env::var("APP_DEBUG") {
            Ok(debug) => &debug == "true",
            Err(_) => s.debug,
        },
        redis: RedisSettings {
            url: env::var("REDIS_URL").unwrap_or(s.redis.url),
        },
        email: merge_email_env(s.email)?,
        ..s
    })
}

/// One week.
const MAX_CODE_EXPIRATION_MINUTES: i64 = 7 * 24 * 60;

fn parse_code_expiration_minutes(minutes: &str) -> Result<i64, String> {
    let minutes = minutes
        .parse::<i64>()
        .map_err(|e| format!("CODE_EXPIRATION_MINUTES: {}", e))?;
    if (1..=MAX_CODE_EXPIRATION_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(format!(
            "CODE_EXPIRATION_MINUTES must be between 1 and {}, got {}.",
            MAX_CODE_EXPIRATION_MINUTES, minutes
        ))
    }
}

/// SMTP unless the outbox is asked for by name.
fn merge_email_env(s: EmailSettings) -> Result<EmailSettings, String> {
    let backend = match env::var("APP_EMAIL__BACKEND") {
        Ok(backend) => backend.try_into()?,
        Err(_) => EmailBackendKind::Smtp,
    };
    match backend {
        EmailBackendKind::Smtp => Ok(EmailSettings {
            backend,
            host: get_env_var("APP_EMAIL__HOST")?,
            host_user: get_env_var("APP_EMAIL__HOST_USER")?,
            host_user_password: get_env_var("APP_EMAIL__HOST_USER_PASSWORD")?,
            sender: get_env_var("APP_EMAIL__SENDER")?,
        }),
        EmailBackendKind::Outbox => Ok(EmailSettings { backend, ..s }),
    }
}

fn get_env_var(key: &str) -> Result<String, String> {
    env::var(key).map_err(|e| format!("{}: {}", key, e))
}
