//! Sitemap and robots.txt generation.
//!
//! `generate` is a pure function over the locale registry and the route
//! table: no I/O, and the output order is fixed. Entries are emitted with
//! the outer loop over locales (registry order) and the inner loop over
//! routes (table order), so `en` pages come first, then `ar`, then `he`.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::html;
use crate::i18n::LocaleRegistry;
use crate::routes::{ChangeFrequency, RouteDescriptor};

/// hreflang key pointing search engines at the default locale
pub const X_DEFAULT: &str = "x-default";

/// One (locale, route) URL with its sitemap metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    /// hreflang -> URL for every locale plus `x-default`
    pub alternates: BTreeMap<String, String>,
}

/// Generate sitemap entries stamped with the current time.
pub fn generate(
    routes: &[RouteDescriptor],
    registry: &LocaleRegistry,
    base_url: &str,
) -> Vec<SitemapEntry> {
    generate_at(routes, registry, base_url, Utc::now())
}

/// Generate sitemap entries with an explicit last-modified timestamp.
pub fn generate_at(
    routes: &[RouteDescriptor],
    registry: &LocaleRegistry,
    base_url: &str,
    last_modified: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let mut entries = Vec::with_capacity(routes.len() * registry.list().len());

    for locale in registry.list() {
        for route in routes {
            entries.push(SitemapEntry {
                url: route.localized_url(base_url, locale.code),
                last_modified,
                change_frequency: route.change_frequency,
                priority: route.priority,
                alternates: alternate_links(route, registry, base_url),
            });
        }
    }

    entries
}

/// Alternate-language links for a route: one per locale plus `x-default`
/// pointing at the default locale's URL.
pub fn alternate_links(
    route: &RouteDescriptor,
    registry: &LocaleRegistry,
    base_url: &str,
) -> BTreeMap<String, String> {
    let mut links: BTreeMap<String, String> = registry
        .list()
        .iter()
        .map(|locale| {
            (
                locale.code.to_string(),
                route.localized_url(base_url, locale.code),
            )
        })
        .collect();

    links.insert(
        X_DEFAULT.to_string(),
        route.localized_url(base_url, registry.default_locale().code),
    );

    links
}

/// Render entries as a sitemap XML document with `xhtml:link` alternates.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", html::escape(&entry.url)));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        for (hreflang, href) in &entry.alternates {
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                html::escape(hreflang),
                html::escape(href)
            ));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// robots.txt: crawl everything except the API, advertise the sitemap.
pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}/sitemap.xml\n",
        base_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::ROUTES;
    use chrono::TimeZone;
    use proptest::prelude::*;

    const BASE: &str = "https://corridorpay.com";

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 30, 0).unwrap()
    }

    fn entries() -> Vec<SitemapEntry> {
        generate_at(ROUTES, LocaleRegistry::get(), BASE, fixed_time())
    }

    // ==================== Cross Product Tests ====================

    #[test]
    fn test_one_entry_per_locale_and_route() {
        let entries = entries();
        let registry = LocaleRegistry::get();
        assert_eq!(entries.len(), ROUTES.len() * registry.list().len());

        for locale in registry.list() {
            for route in ROUTES {
                let url = route.localized_url(BASE, locale.code);
                let count = entries.iter().filter(|e| e.url == url).count();
                assert_eq!(count, 1, "expected exactly one entry for {}", url);
            }
        }
    }

    #[test]
    fn test_order_is_locale_major() {
        let entries = entries();
        assert_eq!(entries[0].url, "https://corridorpay.com/en");
        assert_eq!(entries[1].url, "https://corridorpay.com/en/platform");
        assert_eq!(entries[ROUTES.len()].url, "https://corridorpay.com/ar");
        assert_eq!(
            entries.last().unwrap().url,
            "https://corridorpay.com/he/terms"
        );
    }

    #[test]
    fn test_metadata_copied_from_route() {
        let entries = entries();
        let privacy = entries
            .iter()
            .find(|e| e.url == "https://corridorpay.com/ar/privacy")
            .unwrap();
        assert_eq!(privacy.priority, 0.3);
        assert_eq!(privacy.change_frequency, ChangeFrequency::Yearly);
        assert_eq!(privacy.last_modified, fixed_time());
    }

    // ==================== Alternate Link Tests ====================

    #[test]
    fn test_alternates_cover_all_locales_plus_default() {
        for entry in entries() {
            assert_eq!(entry.alternates.len(), LocaleRegistry::get().list().len() + 1);
            for code in LocaleRegistry::get().codes() {
                assert!(entry.alternates.contains_key(code));
            }
        }
    }

    #[test]
    fn test_x_default_points_at_default_locale() {
        let network = entries()
            .into_iter()
            .find(|e| e.url == "https://corridorpay.com/he/network")
            .unwrap();
        assert_eq!(
            network.alternates[X_DEFAULT],
            "https://corridorpay.com/en/network"
        );
        assert_eq!(network.alternates["ar"], "https://corridorpay.com/ar/network");
    }

    // ==================== Rendering Tests ====================

    #[test]
    fn test_render_xml() {
        let xml = render_xml(&entries());
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://corridorpay.com/he/banks</loc>"));
        assert!(xml.contains("<lastmod>2026-01-15T10:30:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains(
            "<xhtml:link rel=\"alternate\" hreflang=\"x-default\" href=\"https://corridorpay.com/en\"/>"
        ));
        assert_eq!(xml.matches("<url>").count(), 24);
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_render_xml_escapes_urls() {
        let entries = generate_at(
            ROUTES,
            LocaleRegistry::get(),
            "https://a.com/?x=1&y=2",
            fixed_time(),
        );
        let xml = render_xml(&entries);
        assert!(xml.contains("https://a.com/?x=1&amp;y=2/en"));
        assert!(!xml.contains("x=1&y"));
    }

    #[test]
    fn test_robots_txt() {
        let robots = robots_txt(BASE);
        assert!(robots.contains("User-agent: *"));
        assert!(robots.contains("Disallow: /api/"));
        assert!(robots.contains("Sitemap: https://corridorpay.com/sitemap.xml"));
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_every_entry_has_consistent_alternates(host in "[a-z]{1,12}\\.(com|io|ae)") {
            let base = format!("https://{}", host);
            let registry = LocaleRegistry::get();
            let entries = generate_at(ROUTES, registry, &base, fixed_time());

            prop_assert_eq!(entries.len(), ROUTES.len() * registry.list().len());
            for entry in &entries {
                prop_assert!(entry.url.starts_with(&base));
                prop_assert_eq!(entry.alternates.len(), registry.list().len() + 1);

                let default_url = &entry.alternates[registry.default_locale().code];
                prop_assert_eq!(&entry.alternates[X_DEFAULT], default_url);
                prop_assert!(entry.alternates.values().any(|url| url == &entry.url));
            }
        }
    }
}
