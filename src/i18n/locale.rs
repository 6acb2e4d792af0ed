//! Locale type: validated locale representation.
//!
//! A `Locale` can only be constructed from a code that exists in the
//! registry, so holding one is proof that the code is served.

use std::fmt;

use super::{I18nError, LocaleConfig, LocaleRegistry};

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Derive the reading direction from a locale code.
    ///
    /// Only the primary subtag matters, so "ar-AE" is right-to-left too.
    pub fn for_code(code: &str) -> Direction {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        match primary.to_ascii_lowercase().as_str() {
            "ar" | "he" | "fa" | "ur" | "yi" => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }

    /// Value for the HTML `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

/// A validated locale.
#[derive(Clone, Copy)]
pub struct Locale {
    config: &'static LocaleConfig,
}

impl Locale {
    /// Resolve a locale from a code string (e.g. a URL path segment).
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is registered
    /// * `Err(I18nError::UnknownLocale)` otherwise
    pub fn from_code(code: &str) -> Result<Locale, I18nError> {
        LocaleRegistry::get()
            .get_by_code(code)
            .map(|config| Locale { config })
            .ok_or_else(|| I18nError::UnknownLocale(code.to_string()))
    }

    /// The default locale.
    pub fn default_locale() -> Locale {
        Locale {
            config: LocaleRegistry::get().default_locale(),
        }
    }

    /// All registered locales, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list()
            .iter()
            .map(|config| Locale { config })
            .collect()
    }

    /// Pick the best registered locale for an `Accept-Language` header.
    ///
    /// Language ranges are ranked by their `q` weight (header order breaks
    /// ties) and matched on the primary subtag. Falls back to the default
    /// locale when nothing matches or the header is absent.
    pub fn negotiate(accept_language: Option<&str>) -> Locale {
        accept_language
            .and_then(parse_accept_language)
            .unwrap_or_else(Locale::default_locale)
    }

    pub fn code(&self) -> &'static str {
        self.config.code
    }

    pub fn config(&self) -> &'static LocaleConfig {
        self.config
    }

    pub fn direction(&self) -> Direction {
        self.config.direction()
    }

    pub fn is_default(&self) -> bool {
        self.config.is_default
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Locale {}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Locale").field(&self.code()).finish()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn parse_accept_language(value: &str) -> Option<Locale> {
    let mut ranges: Vec<(&str, f32)> = value
        .split(',')
        .filter_map(|part| {
            let mut components = part.trim().split(';');
            let tag = components.next()?.trim();
            if tag.is_empty() {
                return None;
            }
            let quality = components
                .filter_map(|param| param.trim().strip_prefix("q="))
                .find_map(|q| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            Some((tag, quality))
        })
        .filter(|(_, quality)| *quality > 0.0)
        .collect();

    // Stable sort keeps header order for equal weights
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranges.into_iter().find_map(|(tag, _)| {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        Locale::from_code(&primary.to_ascii_lowercase()).ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_registered() {
        for code in ["en", "ar", "he"] {
            let locale = Locale::from_code(code).expect("registered locale");
            assert_eq!(locale.code(), code);
        }
    }

    #[test]
    fn test_from_code_unknown_is_not_found() {
        let result = Locale::from_code("fr");
        assert!(matches!(result, Err(I18nError::UnknownLocale(ref code)) if code == "fr"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Locale::from_code("").is_err());
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        // URL prefixes are lowercase only
        assert!(Locale::from_code("EN").is_err());
    }

    // ==================== Direction Tests ====================

    #[test]
    fn test_direction_rtl_locales() {
        assert_eq!(Locale::from_code("ar").unwrap().direction(), Direction::Rtl);
        assert_eq!(Locale::from_code("he").unwrap().direction(), Direction::Rtl);
    }

    #[test]
    fn test_direction_ltr_locale() {
        assert_eq!(Locale::from_code("en").unwrap().direction(), Direction::Ltr);
    }

    #[test]
    fn test_direction_for_region_tags() {
        assert_eq!(Direction::for_code("ar-AE"), Direction::Rtl);
        assert_eq!(Direction::for_code("he_IL"), Direction::Rtl);
        assert_eq!(Direction::for_code("en-GB"), Direction::Ltr);
    }

    #[test]
    fn test_direction_as_str() {
        assert_eq!(Direction::Ltr.as_str(), "ltr");
        assert_eq!(Direction::Rtl.as_str(), "rtl");
        assert!(Direction::Rtl.is_rtl());
        assert!(!Direction::Ltr.is_rtl());
    }

    // ==================== Default / All Tests ====================

    #[test]
    fn test_default_locale_is_english() {
        let locale = Locale::default_locale();
        assert_eq!(locale.code(), "en");
        assert!(locale.is_default());
    }

    #[test]
    fn test_all_in_registry_order() {
        let codes: Vec<_> = Locale::all().iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["en", "ar", "he"]);
    }

    // ==================== Negotiation Tests ====================

    #[test]
    fn test_negotiate_missing_header_uses_default() {
        assert_eq!(Locale::negotiate(None).code(), "en");
    }

    #[test]
    fn test_negotiate_first_supported() {
        let locale = Locale::negotiate(Some("fr-FR,fr;q=0.9,ar;q=0.8,en;q=0.7"));
        assert_eq!(locale.code(), "ar");
    }

    #[test]
    fn test_negotiate_respects_quality() {
        let locale = Locale::negotiate(Some("en;q=0.5,he;q=0.9"));
        assert_eq!(locale.code(), "he");
    }

    #[test]
    fn test_negotiate_region_subtag() {
        assert_eq!(Locale::negotiate(Some("he-IL")).code(), "he");
        assert_eq!(Locale::negotiate(Some("AR-ae")).code(), "ar");
    }

    #[test]
    fn test_negotiate_zero_quality_is_excluded() {
        let locale = Locale::negotiate(Some("ar;q=0,fr"));
        assert_eq!(locale.code(), "en");
    }

    #[test]
    fn test_negotiate_garbage_header() {
        assert_eq!(Locale::negotiate(Some(",,;;")).code(), "en");
        assert_eq!(Locale::negotiate(Some("")).code(), "en");
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_locale_equality_and_display() {
        let a = Locale::from_code("he").unwrap();
        let b = Locale::from_code("he").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Locale::default_locale());
        assert_eq!(a.to_string(), "he");
        assert!(format!("{:?}", a).contains("he"));
    }
}
