//! Locale registry: Single source of truth for all supported locales.
//!
//! The registry is built once on first access with `OnceLock` and is
//! immutable afterwards. Its order is significant: sitemap generation and
//! alternate-link rendering iterate locales in registry order.

use std::sync::OnceLock;

use super::locale::Direction;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale code used as the URL prefix (e.g., "en", "ar")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "Arabic")
    pub name: &'static str,

    /// Native name of the locale (e.g., "English", "العربية")
    pub native_name: &'static str,

    /// Open Graph locale tag (e.g., "en_US")
    pub og_locale: &'static str,

    /// Whether this is the default locale (exactly one should be true)
    pub is_default: bool,
}

impl LocaleConfig {
    /// Reading direction for this locale, derived from its code.
    pub fn direction(&self) -> Direction {
        Direction::for_code(self.code)
    }
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    default_index: usize,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry::new(default_locales()))
    }

    /// Build a registry from an ordered list of locales.
    ///
    /// The first locale flagged `is_default` wins; if none is flagged, the
    /// first locale in the list is treated as the default.
    fn new(locales: Vec<LocaleConfig>) -> Self {
        let default_index = locales
            .iter()
            .position(|locale| locale.is_default)
            .unwrap_or(0);

        Self {
            locales,
            default_index,
        }
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All locales, in registry order.
    pub fn list(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// All locale codes, in registry order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.locales.iter().map(|locale| locale.code).collect()
    }

    /// The default locale configuration.
    pub fn default_locale(&self) -> &LocaleConfig {
        &self.locales[self.default_index]
    }

    /// Check if a locale code is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// Default locale configurations.
///
/// English is the default; Arabic and Hebrew are right-to-left.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            is_default: true,
        },
        LocaleConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            og_locale: "ar_AE",
            is_default: false,
        },
        LocaleConfig {
            code: "he",
            name: "Hebrew",
            native_name: "עברית",
            og_locale: "he_IL",
            is_default: false,
        },
    ]
}
