use actix_web::HttpRequest;
use common::settings::types::Settings;
use db_adapters::identity_zone_adapter::{IdentityZoneAdapter, IdentityZoneQuery};
use sea_orm::{DbConn, DbErr};
use use_cases::users::registration::types::TenantContext;

/// Host and port of `base_url`, lowercased.
fn default_host(base_url: &str) -> String {
    let without_scheme = base_url
        .split_once("://")
        .map_or(base_url, |(_, rest)| rest);
    without_scheme
        .split('/')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// `Some(subdomain)` when `host` is `<subdomain>.<default host>`.
fn subdomain_of(host: &str, base_url: &str) -> Option<String> {
    let host = host.to_lowercase();
    let suffix = format!(".{}", default_host(base_url));
    host.strip_suffix(&suffix)
        .filter(|subdomain| !subdomain.is_empty())
        .map(str::to_string)
}

/// Zone the request was made for. `Ok(None)` means the subdomain names no known zone.
/// Any host other than a subdomain of the configured base url is served by the default zone.
pub async fn resolve_tenant(
    req: &HttpRequest,
    db: &DbConn,
    settings: &Settings,
) -> Result<Option<TenantContext>, DbErr> {
    let host = req.connection_info().host().to_string();
    match subdomain_of(&host, &settings.application.base_url) {
        Some(subdomain) => Ok(IdentityZoneAdapter::init(db)
            .get_by_subdomain(&subdomain)
            .await?
            .map(TenantContext::from)),
        None => Ok(Some(TenantContext::default_zone(&settings.activation))),
    }
}
