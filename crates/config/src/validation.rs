//! Configuration diagnostics
//!
//! Malformed values never fail a load; they resolve to their default. The
//! report produced here lets the host application tell the operator which
//! entries were ignored or replaced.

use crate::properties::Properties;
use crate::schema::{keys, split_method_names};
use std::collections::BTreeMap;
use types::LoggerLevel;

/// Inspects parsed properties for values that will fall back to a default
pub struct ConfigValidator;

impl ConfigValidator {
    /// Inspect every entry of a properties document
    pub fn inspect(properties: &Properties) -> ValidationReport {
        let mut report = ValidationReport::new();

        Self::inspect_keys(properties, &mut report);
        Self::inspect_flags(properties, &mut report);
        Self::inspect_logger_level(properties, &mut report);
        Self::inspect_method_names(properties, &mut report);

        report
    }

    fn inspect_keys(properties: &Properties, report: &mut ValidationReport) {
        for key in properties.entries().keys() {
            if !keys::RECOGNIZED.contains(&key.as_str()) {
                report.add_warning(key, "Unrecognized key ignored");
            }
        }
    }

    fn inspect_flags(properties: &Properties, report: &mut ValidationReport) {
        for key in keys::FLAGS {
            if let Some(value) = properties.get(key) {
                if !value.eq_ignore_ascii_case("true") && !value.eq_ignore_ascii_case("false") {
                    report.add_warning(
                        key,
                        &format!("'{}' is not a boolean, treated as false", value),
                    );
                }
            }
        }
    }

    fn inspect_logger_level(properties: &Properties, report: &mut ValidationReport) {
        if let Some(value) = properties.get(keys::LOGGER_LEVEL) {
            if LoggerLevel::parse(value).is_none() {
                let valid: Vec<&str> = LoggerLevel::ALL_LEVELS.iter().map(|l| l.as_str()).collect();
                report.add_warning(
                    keys::LOGGER_LEVEL,
                    &format!(
                        "Unknown level '{}', falls back to {}. Valid levels: {:?}",
                        value,
                        LoggerLevel::default(),
                        valid
                    ),
                );
            }
        }
    }

    fn inspect_method_names(properties: &Properties, report: &mut ValidationReport) {
        if let Some(value) = properties.get(keys::FILTER_METHOD_NAMES) {
            if split_method_names(value).contains(&"") {
                report.add_warning(keys::FILTER_METHOD_NAMES, "List contains an empty method name");
            }
        }
    }
}

/// Validation report containing warnings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub warnings: Vec<ValidationIssue>,
}

/// A single diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationIssue {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_warnings()
    }

    /// Number of warnings per key, in key order
    pub fn counts_by_field(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.warnings {
            *counts.entry(issue.field.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// One-line digest, e.g. `2 configuration warnings: foo x1, logger-level x1`
    pub fn summary(&self) -> String {
        if self.is_clean() {
            return "No configuration warnings".to_string();
        }
        let fields: Vec<String> = self
            .counts_by_field()
            .into_iter()
            .map(|(field, count)| format!("{} x{}", field, count))
            .collect();
        format!(
            "{} configuration warnings: {}",
            self.warnings.len(),
            fields.join(", ")
        )
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(report: &ValidationReport) -> Vec<&str> {
        report.warnings.iter().map(|w| w.field.as_str()).collect()
    }

    #[test]
    fn test_clean_file() {
        let props = Properties::string(
            "save-runtime-data=TRUE\noverwrite-runtime-data=false\nlogger-level=FINEST\nfilter-method-names=a,b",
        );
        let report = ConfigValidator::inspect(&props);
        assert!(report.is_clean());
        assert_eq!(report.summary(), "No configuration warnings");
    }

    #[test]
    fn test_empty_file_is_clean() {
        assert!(ConfigValidator::inspect(&Properties::string("")).is_clean());
    }

    #[test]
    fn test_unknown_key() {
        let report = ConfigValidator::inspect(&Properties::string("enable-call-trees=true"));
        assert_eq!(fields(&report), vec!["enable-call-trees"]);
    }

    #[test]
    fn test_bad_flag_and_level() {
        let props = Properties::string("hide-agent-consumption=yes\nlogger-level=info");
        let report = ConfigValidator::inspect(&props);
        assert!(report.has_warnings());
        assert_eq!(fields(&report), vec!["hide-agent-consumption", "logger-level"]);
        assert!(report.warnings[1].message.contains("falls back to INFO"));
    }

    #[test]
    fn test_summary_counts_per_field() {
        let mut report = ValidationReport::new();
        report.add_warning("logger-level", "Unknown level");
        report.add_warning("foo", "Unrecognized key ignored");
        report.add_warning("logger-level", "Unknown level");

        assert_eq!(report.counts_by_field().get("logger-level"), Some(&2));
        assert_eq!(
            report.summary(),
            "3 configuration warnings: foo x1, logger-level x2"
        );
    }

    #[test]
    fn test_empty_method_name() {
        let report = ConfigValidator::inspect(&Properties::string("filter-method-names=,a"));
        assert_eq!(fields(&report), vec!["filter-method-names"]);
    }
}
