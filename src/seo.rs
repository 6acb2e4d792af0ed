//! Per-page SEO metadata: title, description, canonical and alternate
//! links, Open Graph tags and structured data.

use std::collections::BTreeMap;

use serde_json::json;

use crate::html;
use crate::i18n::{I18nError, Locale, LocaleRegistry, MessageCatalog};
use crate::routes::RouteDescriptor;
use crate::sitemap;

/// Everything the `<head>` of a localized page advertises about it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub site_name: String,
    pub canonical: String,
    /// hreflang -> URL for every locale plus `x-default`
    pub alternates: BTreeMap<String, String>,
    pub og_locale: &'static str,
    pub og_alternate_locales: Vec<&'static str>,
}

impl PageMetadata {
    /// Build metadata for `route` in `locale` from that locale's catalog.
    ///
    /// The home page uses its catalog title as-is; every other page gets
    /// the site name appended (`"Platform | Corridor"`).
    pub fn build(
        catalog: &MessageCatalog,
        locale: Locale,
        route: &RouteDescriptor,
        base_url: &str,
    ) -> Result<Self, I18nError> {
        let site_name = catalog.text("site.name")?;
        let page_title = catalog.text(&format!("metadata.{}.title", route.label))?;
        let title = if route.path.is_empty() {
            page_title.to_string()
        } else {
            format!("{} | {}", page_title, site_name)
        };

        let registry = LocaleRegistry::get();
        let og_alternate_locales = registry
            .list()
            .iter()
            .filter(|config| config.code != locale.code())
            .map(|config| config.og_locale)
            .collect();

        Ok(Self {
            title,
            description: catalog
                .text(&format!("metadata.{}.description", route.label))?
                .to_string(),
            site_name: site_name.to_string(),
            canonical: route.localized_url(base_url, locale.code()),
            alternates: sitemap::alternate_links(route, registry, base_url),
            og_locale: locale.config().og_locale,
            og_alternate_locales,
        })
    }

    /// Render the metadata as `<head>` tags.
    pub fn render_head(&self) -> String {
        let mut head = String::new();

        head.push_str(&format!("<title>{}</title>\n", html::escape(&self.title)));
        head.push_str(&meta_name("description", &self.description));
        head.push_str(&format!(
            "<link rel=\"canonical\" href=\"{}\">\n",
            html::escape(&self.canonical)
        ));
        for (hreflang, href) in &self.alternates {
            head.push_str(&format!(
                "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\">\n",
                html::escape(hreflang),
                html::escape(href)
            ));
        }

        // Open Graph
        head.push_str(&meta_property("og:type", "website"));
        head.push_str(&meta_property("og:site_name", &self.site_name));
        head.push_str(&meta_property("og:title", &self.title));
        head.push_str(&meta_property("og:description", &self.description));
        head.push_str(&meta_property("og:url", &self.canonical));
        head.push_str(&meta_property("og:locale", self.og_locale));
        for alternate in &self.og_alternate_locales {
            head.push_str(&meta_property("og:locale:alternate", alternate));
        }

        // Twitter card
        head.push_str(&meta_name("twitter:card", "summary_large_image"));
        head.push_str(&meta_name("twitter:title", &self.title));
        head.push_str(&meta_name("twitter:description", &self.description));

        head
    }
}

/// schema.org Organization record for the home page.
pub fn organization_json_ld(catalog: &MessageCatalog, base_url: &str) -> Result<String, I18nError> {
    let data = json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": catalog.text("site.name")?,
        "description": catalog.text("metadata.home.description")?,
        "url": base_url,
        "logo": format!("{}/logo.png", base_url),
    });

    // `</` must not appear inside a script element
    Ok(data.to_string().replace("</", "<\\/"))
}

fn meta_name(name: &str, content: &str) -> String {
    format!(
        "<meta name=\"{}\" content=\"{}\">\n",
        html::escape(name),
        html::escape(content)
    )
}

fn meta_property(property: &str, content: &str) -> String {
    format!(
        "<meta property=\"{}\" content=\"{}\">\n",
        html::escape(property),
        html::escape(content)
    )
}
