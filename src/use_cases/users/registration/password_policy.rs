use common::settings::types::PasswordPolicySettings;

pub trait PasswordValidator {
    /// `Err` carries a human readable list of the rules the password breaks.
    fn validate(&self, password: &str) -> Result<(), String>;
}

#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    settings: PasswordPolicySettings,
}

impl PasswordPolicy {
    pub fn init(settings: &PasswordPolicySettings) -> Self {
        Self {
            settings: settings.clone(),
        }
    }
}

impl PasswordValidator for PasswordPolicy {
    fn validate(&self, password: &str) -> Result<(), String> {
        let s = &self.settings;
        let length = password.chars().count();
        let count = |predicate: fn(&char) -> bool| password.chars().filter(predicate).count();

        let mut violations = Vec::new();
        if length < s.min_length {
            violations.push(format!(
                "Password must be at least {} characters in length.",
                s.min_length
            ));
        }
        if s.max_length > 0 && length > s.max_length {
            violations.push(format!(
                "Password must be no more than {} characters in length.",
                s.max_length
            ));
        }
        if count(char::is_ascii_uppercase) < s.require_upper_case_character {
            violations.push(format!(
                "Password must contain at least {} uppercase characters.",
                s.require_upper_case_character
            ));
        }
        if count(char::is_ascii_lowercase) < s.require_lower_case_character {
            violations.push(format!(
                "Password must contain at least {} lowercase characters.",
                s.require_lower_case_character
            ));
        }
        if count(char::is_ascii_digit) < s.require_digit {
            violations.push(format!(
                "Password must contain at least {} digit characters.",
                s.require_digit
            ));
        }
        if count(|c| !c.is_alphanumeric() && !c.is_whitespace()) < s.require_special_character {
            violations.push(format!(
                "Password must contain at least {} special characters.",
                s.require_special_character
            ));
        }

        match violations.is_empty() {
            true => Ok(()),
            false => Err(violations.join(" ")),
        }
    }
}
