use common::settings::types::Brand;

use super::types::TenantContext;

const PIVOTAL_COMPANY_NAME: &str = "Pivotal Software, Inc.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub product_phrase: &'static str,
    pub subject: &'static str,
    pub signature: String,
    pub company_name: Option<&'static str>,
}

/// Picks the wording of outgoing messages. A scoped zone always speaks in its own name,
/// whatever the configured brand.
pub fn resolve_branding(tenant: &TenantContext, brand: Brand) -> Branding {
    match (tenant.is_default, brand) {
        (true, Brand::Pivotal) => Branding {
            product_phrase: "a Pivotal ID",
            subject: "Activate your Pivotal ID",
            signature: "Pivotal".to_string(),
            company_name: Some(PIVOTAL_COMPANY_NAME),
        },
        (true, Brand::Oss) => Branding {
            product_phrase: "an account",
            subject: "Activate your account",
            signature: "Cloud Foundry".to_string(),
            company_name: None,
        },
        (false, _) => Branding {
            product_phrase: "an account",
            subject: "Activate your account",
            signature: tenant.name.clone(),
            company_name: None,
        },
    }
}
