use thiserror::Error;

/// Errors raised while resolving locales or reading message catalogs.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The requested code is not one of the registered locales.
    #[error("Unknown locale code: '{0}'")]
    UnknownLocale(String),

    /// A catalog lookup hit a key that does not exist, or exists with a
    /// different shape than the caller asked for.
    #[error("Missing translation for '{key}' in locale '{locale}'")]
    MissingTranslation { locale: &'static str, key: String },

    /// A registered locale has no embedded catalog.
    #[error("No message catalog bundled for locale '{0}'")]
    MissingCatalog(&'static str),

    /// An embedded catalog could not be parsed.
    #[error("Malformed message catalog for locale '{locale}': {source}")]
    MalformedCatalog {
        locale: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
