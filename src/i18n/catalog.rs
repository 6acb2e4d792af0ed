//! Message catalogs: per-locale nested key -> text mappings.
//!
//! Catalogs are JSON documents bundled into the binary. They are parsed
//! once, stored in a process-wide `OnceLock` and never mutated. Keys are
//! dotted paths into the JSON tree (`"metadata.home.title"`); numeric
//! segments index into arrays (`"home.sections.0.title"`).
//!
//! Missing keys are errors: every lookup returns
//! `Err(I18nError::MissingTranslation)` rather than an empty string.

use std::sync::OnceLock;

use serde_json::Value;

use super::{I18nError, Locale, LocaleRegistry};

/// The catalog for a single locale.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    locale: &'static str,
    root: Value,
}

impl MessageCatalog {
    /// Parse a catalog from raw JSON.
    pub fn parse(locale: &'static str, raw: &str) -> Result<Self, I18nError> {
        let root = serde_json::from_str(raw)
            .map_err(|source| I18nError::MalformedCatalog { locale, source })?;
        Ok(Self { locale, root })
    }

    pub fn locale(&self) -> &'static str {
        self.locale
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Look up the raw value at a dotted key path.
    pub fn lookup(&self, key: &str) -> Result<&Value, I18nError> {
        key.split('.')
            .try_fold(&self.root, |node, segment| match node {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
            .ok_or_else(|| self.missing(key))
    }

    /// Look up a string value.
    pub fn text(&self, key: &str) -> Result<&str, I18nError> {
        self.lookup(key)?.as_str().ok_or_else(|| self.missing(key))
    }

    /// Look up an array value (repeated content blocks).
    pub fn list(&self, key: &str) -> Result<&[Value], I18nError> {
        self.lookup(key)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| self.missing(key))
    }

    /// Look up a string and substitute `{name}` placeholders.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> Result<String, I18nError> {
        let template = self.text(key)?;
        Ok(args.iter().fold(template.to_string(), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        }))
    }

    fn missing(&self, key: &str) -> I18nError {
        I18nError::MissingTranslation {
            locale: self.locale,
            key: key.to_string(),
        }
    }
}

/// Catalogs for every registered locale.
#[derive(Debug)]
pub struct MessageCatalogs {
    catalogs: Vec<MessageCatalog>,
}

/// Global catalog set (populated once at startup)
static CATALOGS: OnceLock<MessageCatalogs> = OnceLock::new();

impl MessageCatalogs {
    /// Load the bundled catalogs for every registered locale.
    ///
    /// Called once during startup; later calls return the already-loaded
    /// set without reparsing.
    pub fn get() -> Result<&'static MessageCatalogs, I18nError> {
        if let Some(catalogs) = CATALOGS.get() {
            return Ok(catalogs);
        }

        let catalogs = Self::load_bundled()?;
        Ok(CATALOGS.get_or_init(|| catalogs))
    }

    fn load_bundled() -> Result<Self, I18nError> {
        let catalogs = LocaleRegistry::get()
            .list()
            .iter()
            .map(|config| {
                let raw = bundled_source(config.code)
                    .ok_or(I18nError::MissingCatalog(config.code))?;
                MessageCatalog::parse(config.code, raw)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { catalogs })
    }

    /// Catalog for a locale.
    pub fn catalog(&self, locale: Locale) -> Result<&MessageCatalog, I18nError> {
        self.catalogs
            .iter()
            .find(|catalog| catalog.locale == locale.code())
            .ok_or(I18nError::MissingCatalog(locale.code()))
    }

    /// Shorthand for `catalog(locale)?.text(key)`.
    pub fn text(&self, locale: Locale, key: &str) -> Result<&str, I18nError> {
        self.catalog(locale)?.text(key)
    }

    /// All loaded catalogs, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &MessageCatalog> {
        self.catalogs.iter()
    }
}

fn bundled_source(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some(include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/en.json"))),
        "ar" => Some(include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/ar.json"))),
        "he" => Some(include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/locales/he.json"))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MessageCatalog {
        MessageCatalog::parse(
            "en",
            r#"{
                "nav": { "home": "Home", "contact": "Contact" },
                "home": {
                    "badges": ["Fast", "Compliant"],
                    "sections": [
                        { "title": "Speed", "body": "Settles in seconds" }
                    ]
                },
                "footer": { "copyright": "© {year} Corridor" }
            }"#,
        )
        .expect("sample catalog should parse")
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_text_nested_key() {
        assert_eq!(sample().text("nav.home").unwrap(), "Home");
    }

    #[test]
    fn test_text_through_array_index() {
        assert_eq!(sample().text("home.sections.0.title").unwrap(), "Speed");
    }

    #[test]
    fn test_missing_key_is_error() {
        let err = sample().text("nav.pricing").unwrap_err();
        assert!(matches!(
            err,
            I18nError::MissingTranslation { locale: "en", ref key } if key == "nav.pricing"
        ));
    }

    #[test]
    fn test_wrong_shape_is_missing() {
        // An object where a string was requested
        assert!(sample().text("nav").is_err());
        // A string where a list was requested
        assert!(sample().list("nav.home").is_err());
    }

    #[test]
    fn test_list_records() {
        let catalog = sample();
        let sections = catalog.list("home.sections").unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0]["body"], "Settles in seconds");
    }

    #[test]
    fn test_format_placeholder() {
        let text = sample().format("footer.copyright", &[("year", "2026")]).unwrap();
        assert_eq!(text, "© 2026 Corridor");
    }

    #[test]
    fn test_malformed_catalog() {
        let result = MessageCatalog::parse("en", "{ not json");
        assert!(matches!(result, Err(I18nError::MalformedCatalog { locale: "en", .. })));
    }

    // ==================== Bundled Catalog Tests ====================

    #[test]
    fn test_bundled_catalogs_cover_registry() {
        let catalogs = MessageCatalogs::get().expect("bundled catalogs should load");
        let codes: Vec<_> = catalogs.iter().map(|c| c.locale()).collect();
        assert_eq!(codes, LocaleRegistry::get().codes());
    }

    #[test]
    fn test_bundled_catalogs_loaded_once() {
        let a = MessageCatalogs::get().unwrap();
        let b = MessageCatalogs::get().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_bundled_text_per_locale() {
        let catalogs = MessageCatalogs::get().unwrap();
        for locale in Locale::all() {
            let title = catalogs.text(locale, "metadata.home.title").unwrap();
            assert!(!title.is_empty());
        }
    }

    #[test]
    fn test_unbundled_locale_has_no_source() {
        assert!(bundled_source("fr").is_none());
    }
}
