//! Internationalization (i18n) module for the localized site.
//!
//! All locale-related logic lives here: which locales the site serves,
//! which reading direction each one uses, and the message catalogs that
//! page rendering pulls its text from.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales and their metadata
//! - `locale`: Validated `Locale` type plus text direction and header negotiation
//! - `catalog`: Per-locale message catalogs, loaded once at startup
//! - `validator`: Cross-locale catalog consistency checks
//!
//! # Example
//!
//! ```rust,ignore
//! use corridor_site::i18n::{Locale, MessageCatalogs};
//!
//! let arabic = Locale::from_code("ar")?;
//! assert!(arabic.direction().is_rtl());
//!
//! let title = MessageCatalogs::get()?.text(arabic, "metadata.home.title")?;
//! ```

mod catalog;
mod error;
mod locale;
mod registry;
mod validator;

pub use catalog::{MessageCatalog, MessageCatalogs};
pub use error::I18nError;
pub use locale::{Direction, Locale};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use validator::{CatalogValidator, ValidationReport};
