use std::sync::Arc;

use anyhow::{Context, Result};
use corridor_site::config::Config;
use corridor_site::i18n::{CatalogValidator, Locale, MessageCatalogs};
use corridor_site::{routes, server};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("corridor_site=info".parse()?),
        )
        .init();

    info!("Starting Corridor site server");

    // Load configuration from environment
    let config = Config::from_env()?;

    let locales: Vec<String> = Locale::all()
        .into_iter()
        .map(|locale| {
            if locale.is_default() {
                format!("{} (default)", locale)
            } else {
                locale.to_string()
            }
        })
        .collect();
    info!(
        "Serving {} locales ({}), {} routes, site URL {}",
        locales.len(),
        locales.join(", "),
        routes::ROUTES.len(),
        config.site_url
    );
    if config.resend_api_key.is_none() {
        warn!("RESEND_API_KEY not set; contact submissions will fail until it is configured");
    }
    if let Some(id) = &config.ga_measurement_id {
        info!("Analytics measurement ID configured: {}", id);
    }
    if let Some(id) = &config.gtm_id {
        info!("Tag manager ID configured: {}", id);
    }

    // Message catalogs are loaded once, before the first request
    let catalogs = MessageCatalogs::get().context("Failed to load message catalogs")?;
    let reference = catalogs.catalog(Locale::default_locale())?;
    for catalog in catalogs.iter().filter(|c| c.locale() != reference.locale()) {
        let report = CatalogValidator::validate(reference, catalog);
        for problem in report.errors.iter().chain(&report.warnings) {
            warn!("Catalog '{}': {}", catalog.locale(), problem);
        }
    }
    info!("✓ Message catalogs loaded");

    server::serve(Arc::new(config)).await
}
