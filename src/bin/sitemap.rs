//! Sitemap export binary - prints the sitemap (or robots.txt) to stdout
//! for static hosting.
//!
//! Usage:
//!   cargo run --bin sitemap              # sitemap.xml
//!   cargo run --bin sitemap -- --robots  # robots.txt
//!
//! Optional:
//! - SITE_URL (defaults to https://corridorpay.com)

use anyhow::Result;
use corridor_site::config::Config;
use corridor_site::i18n::LocaleRegistry;
use corridor_site::routes::ROUTES;
use corridor_site::sitemap;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("corridor_site=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    if std::env::args().any(|arg| arg == "--robots") {
        print!("{}", sitemap::robots_txt(&config.site_url));
        return Ok(());
    }

    let entries = sitemap::generate(ROUTES, LocaleRegistry::get(), &config.site_url);
    tracing::info!("Generated {} sitemap entries", entries.len());
    print!("{}", sitemap::render_xml(&entries));

    Ok(())
}
