//! Catalog consistency validation.
//!
//! Compares a locale's catalog against the default locale's catalog to
//! make sure translated content keeps the same shape: every key present,
//! repeated blocks with the same number of entries, and `{placeholders}`
//! preserved verbatim.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::MessageCatalog;

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys the reference has but the candidate lacks
    pub errors: Vec<String>,

    /// Non-fatal drift (extra keys, length or placeholder mismatches)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog consistency across locales.
pub struct CatalogValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate `candidate` against `reference` (normally the default locale).
    pub fn validate(reference: &MessageCatalog, candidate: &MessageCatalog) -> ValidationReport {
        let mut report = ValidationReport::new();
        Self::compare(reference.root(), candidate.root(), "", &mut report);
        report
    }

    fn compare(reference: &Value, candidate: &Value, path: &str, report: &mut ValidationReport) {
        match (reference, candidate) {
            (Value::Object(ref_map), Value::Object(cand_map)) => {
                for (key, ref_value) in ref_map {
                    let child = join(path, key);
                    match cand_map.get(key) {
                        Some(cand_value) => Self::compare(ref_value, cand_value, &child, report),
                        None => report.errors.push(format!("Missing key: {}", child)),
                    }
                }
                for key in cand_map.keys().filter(|key| !ref_map.contains_key(*key)) {
                    report
                        .warnings
                        .push(format!("Extra key: {}", join(path, key)));
                }
            }
            (Value::Array(ref_items), Value::Array(cand_items)) => {
                if ref_items.len() != cand_items.len() {
                    report.warnings.push(format!(
                        "Length mismatch at {}: reference has {}, candidate has {}",
                        path,
                        ref_items.len(),
                        cand_items.len()
                    ));
                }
                for (i, (ref_item, cand_item)) in ref_items.iter().zip(cand_items).enumerate() {
                    Self::compare(ref_item, cand_item, &join(path, &i.to_string()), report);
                }
            }
            (Value::String(ref_text), Value::String(cand_text)) => {
                let ref_placeholders = Self::extract_placeholders(ref_text);
                let cand_placeholders = Self::extract_placeholders(cand_text);
                if ref_placeholders != cand_placeholders {
                    report.warnings.push(format!(
                        "Placeholder mismatch at {}: reference has {:?}, candidate has {:?}",
                        path, ref_placeholders, cand_placeholders
                    ));
                }
            }
            _ => {
                if std::mem::discriminant(reference) != std::mem::discriminant(candidate) {
                    report.errors.push(format!("Type mismatch at {}", path));
                }
            }
        }
    }

    /// Extract the distinct `{placeholder}` names in a string
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, MessageCatalogs};

    fn catalog(raw: &str) -> MessageCatalog {
        MessageCatalog::parse("en", raw).expect("test catalog should parse")
    }

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders() {
        let found = CatalogValidator::extract_placeholders("© {year} {company}, {year}");
        assert_eq!(found.len(), 2);
        assert!(found.contains("year"));
        assert!(found.contains("company"));
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(CatalogValidator::extract_placeholders("No braces { here }").is_empty());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_identical_shape() {
        let reference = catalog(r#"{"a": {"b": "Hi {name}"}, "list": ["x", "y"]}"#);
        let candidate = catalog(r#"{"a": {"b": "مرحبا {name}"}, "list": ["س", "ص"]}"#);

        assert!(CatalogValidator::validate(&reference, &candidate).is_clean());
    }

    #[test]
    fn test_validate_missing_key() {
        let reference = catalog(r#"{"nav": {"home": "Home", "banks": "Banks"}}"#);
        let candidate = catalog(r#"{"nav": {"home": "Inicio"}}"#);

        let report = CatalogValidator::validate(&reference, &candidate);
        assert!(report.has_errors());
        assert_eq!(report.errors, vec!["Missing key: nav.banks"]);
    }

    #[test]
    fn test_validate_extra_key() {
        let reference = catalog(r#"{"nav": {"home": "Home"}}"#);
        let candidate = catalog(r#"{"nav": {"home": "Home", "blog": "Blog"}}"#);

        let report = CatalogValidator::validate(&reference, &candidate);
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("Extra key: nav.blog"));
    }

    #[test]
    fn test_validate_placeholder_dropped() {
        let reference = catalog(r#"{"footer": "© {year} Corridor"}"#);
        let candidate = catalog(r#"{"footer": "© Corridor"}"#);

        let report = CatalogValidator::validate(&reference, &candidate);
        assert!(report.warnings[0].contains("Placeholder mismatch at footer"));
    }

    #[test]
    fn test_validate_array_length() {
        let reference = catalog(r#"{"items": [{"t": "a"}, {"t": "b"}]}"#);
        let candidate = catalog(r#"{"items": [{"t": "a"}]}"#);

        let report = CatalogValidator::validate(&reference, &candidate);
        assert!(report.warnings[0].contains("Length mismatch at items"));
    }

    #[test]
    fn test_validate_type_mismatch() {
        let reference = catalog(r#"{"items": ["a"]}"#);
        let candidate = catalog(r#"{"items": "a"}"#);

        let report = CatalogValidator::validate(&reference, &candidate);
        assert_eq!(report.errors, vec!["Type mismatch at items"]);
    }

    #[test]
    fn test_bundled_catalogs_are_consistent() {
        let catalogs = MessageCatalogs::get().unwrap();
        let reference = catalogs.catalog(Locale::default_locale()).unwrap();

        for candidate in catalogs.iter() {
            let report = CatalogValidator::validate(reference, candidate);
            assert!(
                report.is_clean(),
                "catalog '{}' drifted: {:?}",
                candidate.locale(),
                report
            );
        }
    }

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }
}
