//! Server-side page rendering.
//!
//! Each page is a complete HTML document: `<html lang dir>` from the
//! locale, SEO head from `seo`, then navigation, page content from the
//! message catalog, and a footer with the language switcher.

use chrono::{Datelike, Utc};

use crate::html;
use crate::i18n::{I18nError, Locale, MessageCatalog, MessageCatalogs};
use crate::routes::{RouteDescriptor, ROUTES};
use crate::seo::{self, PageMetadata};

/// Contact form fields, in display order, with whether each is required.
const CONTACT_FIELDS: [(&str, bool); 5] = [
    ("name", true),
    ("email", true),
    ("company", false),
    ("title", false),
    ("message", true),
];

/// Render a localized page.
pub fn render(locale: Locale, route: &RouteDescriptor, base_url: &str) -> Result<String, I18nError> {
    let catalog = MessageCatalogs::get()?.catalog(locale)?;
    render_with(catalog, locale, route, base_url, Utc::now().year())
}

fn render_with(
    catalog: &MessageCatalog,
    locale: Locale,
    route: &RouteDescriptor,
    base_url: &str,
    year: i32,
) -> Result<String, I18nError> {
    let metadata = PageMetadata::build(catalog, locale, route, base_url)?;

    let mut page = String::with_capacity(8 * 1024);
    page.push_str("<!DOCTYPE html>\n");
    page.push_str(&format!(
        "<html lang=\"{}\" dir=\"{}\">\n",
        locale.code(),
        locale.direction().as_str()
    ));

    page.push_str("<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    page.push_str(&metadata.render_head());
    if route.path.is_empty() {
        page.push_str(&format!(
            "<script type=\"application/ld+json\">{}</script>\n",
            seo::organization_json_ld(catalog, base_url)?
        ));
    }
    page.push_str("</head>\n<body>\n");

    page.push_str(&render_nav(catalog, locale, route)?);
    page.push_str("<main id=\"main\">\n");
    page.push_str(&render_content(catalog, route)?);
    if route.label == "contact" {
        page.push_str(&render_contact_form(catalog)?);
    }
    page.push_str("</main>\n");
    page.push_str(&render_footer(catalog, locale, route, year)?);

    page.push_str("</body>\n</html>\n");
    Ok(page)
}

fn render_nav(
    catalog: &MessageCatalog,
    locale: Locale,
    current: &RouteDescriptor,
) -> Result<String, I18nError> {
    let mut nav = format!(
        "<a class=\"skip-link\" href=\"#main\">{}</a>\n<nav>\n<a class=\"brand\" href=\"/{}\">{}</a>\n<ul>\n",
        html::escape(catalog.text("site.skipToContent")?),
        locale.code(),
        html::escape(catalog.text("site.name")?)
    );

    // Legal pages live in the footer only
    for route in ROUTES.iter().filter(|r| !matches!(r.label, "privacy" | "terms")) {
        let current_attr = if route.path == current.path {
            " aria-current=\"page\""
        } else {
            ""
        };
        nav.push_str(&format!(
            "<li><a href=\"/{}{}\"{}>{}</a></li>\n",
            locale.code(),
            route.path,
            current_attr,
            html::escape(catalog.text(&format!("nav.{}", route.label))?)
        ));
    }

    nav.push_str("</ul>\n</nav>\n");
    Ok(nav)
}

fn render_content(catalog: &MessageCatalog, route: &RouteDescriptor) -> Result<String, I18nError> {
    let prefix = format!("pages.{}", route.label);
    let mut content = format!(
        "<section class=\"hero\">\n<h1>{}</h1>\n<p>{}</p>\n</section>\n",
        html::escape(catalog.text(&format!("{}.heading", prefix))?),
        html::escape(catalog.text(&format!("{}.intro", prefix))?)
    );

    let sections_key = format!("{}.sections", prefix);
    for i in 0..catalog.list(&sections_key)?.len() {
        content.push_str(&format!(
            "<section>\n<h2>{}</h2>\n<p>{}</p>\n</section>\n",
            html::escape(catalog.text(&format!("{}.{}.title", sections_key, i))?),
            html::escape(catalog.text(&format!("{}.{}.body", sections_key, i))?)
        ));
    }

    Ok(content)
}

fn render_contact_form(catalog: &MessageCatalog) -> Result<String, I18nError> {
    let mut form = String::from(
        "<form id=\"contact-form\" method=\"post\" action=\"/api/contact\">\n",
    );

    for (field, required) in CONTACT_FIELDS {
        let label = html::escape(catalog.text(&format!("contact.form.{}", field))?);
        let required_attr = if required { " required" } else { "" };
        let input = match field {
            "message" => format!(
                "<textarea id=\"{0}\" name=\"{0}\" rows=\"5\"{1}></textarea>",
                field, required_attr
            ),
            "email" => format!(
                "<input id=\"{0}\" name=\"{0}\" type=\"email\"{1}>",
                field, required_attr
            ),
            _ => format!(
                "<input id=\"{0}\" name=\"{0}\" type=\"text\"{1}>",
                field, required_attr
            ),
        };
        form.push_str(&format!(
            "<label for=\"{}\">{}</label>\n{}\n",
            field, label, input
        ));
    }

    form.push_str(&format!(
        "<button type=\"submit\">{}</button>\n\
<p class=\"form-status\" data-success=\"{}\" data-error=\"{}\" hidden></p>\n</form>\n",
        html::escape(catalog.text("contact.form.submit")?),
        html::escape(catalog.text("contact.form.success")?),
        html::escape(catalog.text("contact.form.error")?)
    ));

    Ok(form)
}

fn render_footer(
    catalog: &MessageCatalog,
    locale: Locale,
    route: &RouteDescriptor,
    year: i32,
) -> Result<String, I18nError> {
    let mut footer = String::from("<footer>\n<ul class=\"legal\">\n");
    for label in ["privacy", "terms"] {
        footer.push_str(&format!(
            "<li><a href=\"/{}/{}\">{}</a></li>\n",
            locale.code(),
            label,
            html::escape(catalog.text(&format!("nav.{}", label))?)
        ));
    }
    footer.push_str("</ul>\n");

    footer.push_str(&format!(
        "<nav aria-label=\"{}\">\n<ul class=\"languages\">\n",
        html::escape(catalog.text("footer.languages")?)
    ));
    for other in Locale::all() {
        let current_attr = if other == locale {
            " aria-current=\"true\""
        } else {
            ""
        };
        footer.push_str(&format!(
            "<li><a href=\"/{}{}\" hreflang=\"{}\" lang=\"{}\" dir=\"{}\"{}>{}</a></li>\n",
            other.code(),
            route.path,
            other.code(),
            other.code(),
            other.direction().as_str(),
            current_attr,
            html::escape(other.config().native_name)
        ));
    }
    footer.push_str("</ul>\n</nav>\n");

    let year = year.to_string();
    footer.push_str(&format!(
        "<p>{}</p>\n</footer>\n",
        html::escape(&catalog.format("footer.copyright", &[("year", year.as_str())])?)
    ));

    Ok(footer)
}
