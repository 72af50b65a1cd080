use minijinja::{context, Environment, Value};
use once_cell::sync::Lazy;

use super::{branding::Branding, types::TenantContext};

const ACTIVATE_ACCOUNT_TEMPLATE: &str = "activate_account.html";

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    if let Err(e) = env.add_template(
        ACTIVATE_ACCOUNT_TEMPLATE,
        include_str!("templates/activate_account.html"),
    ) {
        tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to load email template: {:?}", e);
    }
    env
});

/// `<scheme>://[<subdomain>.]<host>/verify_user?code=..&email=..`
pub fn activation_link(base_url: &str, tenant: &TenantContext, code: &str, email: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    let origin = match (tenant.is_default, base_url.split_once("://")) {
        (true, _) => base_url.to_string(),
        (false, Some((scheme, host))) => format!("{}://{}.{}", scheme, tenant.subdomain, host),
        (false, None) => format!("{}.{}", tenant.subdomain, base_url),
    };
    format!(
        "{}/verify_user?code={}&email={}",
        origin,
        urlencoding::encode(code),
        urlencoding::encode(email)
    )
}

pub fn render_activation_email(
    branding: &Branding,
    activation_link: &str,
    email: &str,
) -> Result<String, minijinja::Error> {
    TEMPLATES
        .get_template(ACTIVATE_ACCOUNT_TEMPLATE)?
        .render(context! {
            subject => branding.subject,
            product_phrase => branding.product_phrase,
            signature => branding.signature,
            company_name => branding.company_name,
            email => email,
            // Autoescape would also turn `/` into an entity; only attribute-breaking characters are escaped.
            activation_link => Value::from_safe_string(escape_attribute(activation_link)),
        })
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use common::settings::types::Brand;

    use super::*;
    use crate::users::registration::branding::resolve_branding;

    fn default_zone() -> TenantContext {
        TenantContext {
            zone_id: "uaa".to_string(),
            name: "uaa".to_string(),
            subdomain: String::new(),
            is_default: true,
        }
    }

    fn scoped_zone() -> TenantContext {
        TenantContext {
            zone_id: "test-zone-id".to_string(),
            name: "The Twiglet Zone".to_string(),
            subdomain: "test".to_string(),
            is_default: false,
        }
    }

    #[test]
    fn link_on_default_zone() {
        let link = activation_link(
            "http://uaa.example.com/",
            &default_zone(),
            "the_secret_code",
            "user@example.com",
        );

        assert_eq!(
            link,
            "http://uaa.example.com/verify_user?code=the_secret_code&email=user%40example.com"
        );
    }

    #[test]
    fn link_on_scoped_zone_carries_subdomain() {
        let link = activation_link(
            "http://uaa.example.com",
            &scoped_zone(),
            "the_secret_code",
            "user@example.com",
        );

        assert_eq!(
            link,
            "http://test.uaa.example.com/verify_user?code=the_secret_code&email=user%40example.com"
        );
    }

    #[test]
    fn pivotal_email() {
        let tenant = default_zone();
        let link = activation_link(
            "http://uaa.example.com",
            &tenant,
            "the_secret_code",
            "user@example.com",
        );

        let html = render_activation_email(
            &resolve_branding(&tenant, Brand::Pivotal),
            &link,
            "user@example.com",
        )
        .unwrap();

        assert!(html.contains("A request has been made to activate a Pivotal ID for:"));
        assert!(html.contains(r#"<a href="http://uaa.example.com/verify_user?code=the_secret_code&amp;email=user%40example.com">Activate your account</a>"#));
        assert!(html.contains("Thank you,<br />\n    Pivotal"));
        assert!(html.contains("Pivotal Software, Inc."));
        assert!(!html.contains("Cloud Foundry"));
    }

    #[test]
    fn oss_email() {
        let tenant = default_zone();
        let link = activation_link(
            "http://uaa.example.com",
            &tenant,
            "the_secret_code",
            "user@example.com",
        );

        let html = render_activation_email(
            &resolve_branding(&tenant, Brand::Oss),
            &link,
            "user@example.com",
        )
        .unwrap();

        assert!(html.contains("A request has been made to activate an account for:"));
        assert!(html.contains("Thank you,<br />\n    Cloud Foundry"));
        assert!(!html.contains("Pivotal"));
    }

    #[test]
    fn zone_email() {
        let tenant = scoped_zone();
        let link = activation_link(
            "http://uaa.example.com",
            &tenant,
            "the_secret_code",
            "user@example.com",
        );

        let html = render_activation_email(
            &resolve_branding(&tenant, Brand::Pivotal),
            &link,
            "user@example.com",
        )
        .unwrap();

        assert!(html.contains(r#"<a href="http://test.uaa.example.com/verify_user?code=the_secret_code&amp;email=user%40example.com">Activate your account</a>"#));
        assert!(html.contains("Thank you,<br />\n    The Twiglet Zone"));
        assert!(!html.contains("Pivotal"));
        assert!(!html.contains("Cloud Foundry"));
    }
}
