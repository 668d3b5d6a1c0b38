//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use types::LoggerLevel;

/// Property names understood by the loader
pub mod keys {
    pub const FILTER_METHOD_NAMES: &str = "filter-method-names";
    pub const POWERMONITOR_PATH: &str = "powermonitor-path";
    pub const SAVE_RUNTIME_DATA: &str = "save-runtime-data";
    pub const OVERWRITE_RUNTIME_DATA: &str = "overwrite-runtime-data";
    pub const LOGGER_LEVEL: &str = "logger-level";
    pub const TRACK_CONSUMPTION_EVOLUTION: &str = "track-consumption-evolution";
    pub const EVOLUTION_DATA_PATH: &str = "evolution-data-path";
    pub const HIDE_AGENT_CONSUMPTION: &str = "hide-agent-consumption";

    /// Every recognized key; anything else in the file is ignored
    pub const RECOGNIZED: [&str; 8] = [
        FILTER_METHOD_NAMES,
        POWERMONITOR_PATH,
        SAVE_RUNTIME_DATA,
        OVERWRITE_RUNTIME_DATA,
        LOGGER_LEVEL,
        TRACK_CONSUMPTION_EVOLUTION,
        EVOLUTION_DATA_PATH,
        HIDE_AGENT_CONSUMPTION,
    ];

    /// Keys holding a `true`/`false` flag
    pub const FLAGS: [&str; 4] = [
        SAVE_RUNTIME_DATA,
        OVERWRITE_RUNTIME_DATA,
        TRACK_CONSUMPTION_EVOLUTION,
        HIDE_AGENT_CONSUMPTION,
    ];
}

/// Recognized keys exactly as written in the file, before typing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawProperties {
    pub filter_method_names: Option<String>,
    pub powermonitor_path: Option<String>,
    pub save_runtime_data: Option<String>,
    pub overwrite_runtime_data: Option<String>,
    pub logger_level: Option<String>,
    pub track_consumption_evolution: Option<String>,
    pub evolution_data_path: Option<String>,
    pub hide_agent_consumption: Option<String>,
}

/// Resolved agent configuration.
///
/// Built once at startup and never mutated; share it by reference or clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    filtered_methods: BTreeSet<String>,
    power_monitor_path: Option<String>,
    saves_runtime_data: bool,
    overwrites_runtime_data: bool,
    logger_level: LoggerLevel,
    tracks_consumption_evolution: bool,
    evolution_data_path: String,
    hides_agent_consumption: bool,
}

// Default value functions
pub fn default_evolution_data_path() -> String {
    "evolution".to_string()
}

fn default_flag() -> bool {
    false
}

/// `true` only for a case-insensitive `"true"`
pub fn parse_flag(value: Option<&str>) -> bool {
    value.map_or_else(default_flag, |v| v.eq_ignore_ascii_case("true"))
}

/// Split a comma separated list of method names.
///
/// A value without a comma is a single name, even when empty. Otherwise
/// trailing empty names are dropped; leading and inner ones are kept.
/// Names are not trimmed.
pub fn split_method_names(value: &str) -> Vec<&str> {
    if !value.contains(',') {
        return vec![value];
    }

    let mut names: Vec<&str> = value.split(',').collect();
    while names.last().is_some_and(|name| name.is_empty()) {
        names.pop();
    }
    names
}

impl Configuration {
    /// Resolve raw values, substituting the default for anything missing or malformed
    pub fn resolve(raw: RawProperties) -> Self {
        let filtered_methods = raw
            .filter_method_names
            .as_deref()
            .map(|names| split_method_names(names).into_iter().map(String::from).collect())
            .unwrap_or_default();

        let logger_level = raw
            .logger_level
            .as_deref()
            .and_then(LoggerLevel::parse)
            .unwrap_or_default();

        Self {
            filtered_methods,
            power_monitor_path: raw.powermonitor_path,
            saves_runtime_data: parse_flag(raw.save_runtime_data.as_deref()),
            overwrites_runtime_data: parse_flag(raw.overwrite_runtime_data.as_deref()),
            logger_level,
            tracks_consumption_evolution: parse_flag(raw.track_consumption_evolution.as_deref()),
            evolution_data_path: raw
                .evolution_data_path
                .unwrap_or_else(default_evolution_data_path),
            hides_agent_consumption: parse_flag(raw.hide_agent_consumption.as_deref()),
        }
    }

    /// Whether `method` is one of the configured method names (exact match)
    pub fn filters_method(&self, method: &str) -> bool {
        self.filtered_methods.contains(method)
    }

    pub fn filtered_methods(&self) -> &BTreeSet<String> {
        &self.filtered_methods
    }

    /// Power monitor executable, if configured
    pub fn power_monitor_path(&self) -> Option<&str> {
        self.power_monitor_path.as_deref()
    }

    pub fn saves_runtime_data(&self) -> bool {
        self.saves_runtime_data
    }

    pub fn overwrites_runtime_data(&self) -> bool {
        self.overwrites_runtime_data
    }

    pub fn logger_level(&self) -> LoggerLevel {
        self.logger_level
    }

    pub fn tracks_consumption_evolution(&self) -> bool {
        self.tracks_consumption_evolution
    }

    /// Directory for consumption evolution files
    pub fn evolution_data_path(&self) -> &str {
        &self.evolution_data_path
    }

    pub fn hides_agent_consumption(&self) -> bool {
        self.hides_agent_consumption
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::resolve(RawProperties::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert!(config.filtered_methods().is_empty());
        assert!(!config.filters_method(""));
        assert_eq!(config.power_monitor_path(), None);
        assert!(!config.saves_runtime_data());
        assert!(!config.overwrites_runtime_data());
        assert_eq!(config.logger_level(), LoggerLevel::Info);
        assert!(!config.tracks_consumption_evolution());
        assert_eq!(config.evolution_data_path(), "evolution");
        assert!(!config.hides_agent_consumption());
    }

    #[test]
    fn test_configuration_is_shareable() {
        assert_send_sync::<Configuration>();
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some("TrUe")));
        assert!(!parse_flag(Some("FaLse")));
        assert!(!parse_flag(Some("yes")));
        assert!(!parse_flag(Some("1")));
        assert!(!parse_flag(Some("true ")));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_split_method_names() {
        assert_eq!(split_method_names("a"), vec!["a"]);
        assert_eq!(split_method_names(""), vec![""]);
        assert_eq!(split_method_names("a,b"), vec!["a", "b"]);
        assert_eq!(split_method_names("a, b"), vec!["a", " b"]);
        assert_eq!(split_method_names("a,,b,,"), vec!["a", "", "b"]);
        assert_eq!(split_method_names(",a"), vec!["", "a"]);
        assert!(split_method_names(",,").is_empty());
    }

    #[test]
    fn test_resolve_invalid_level_falls_back() {
        let config = Configuration::resolve(RawProperties {
            logger_level: Some("VERBOSE".to_string()),
            ..Default::default()
        });
        assert_eq!(config.logger_level(), LoggerLevel::Info);
    }

    #[test]
    fn test_resolve_present_empty_evolution_path() {
        let config = Configuration::resolve(RawProperties {
            evolution_data_path: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(config.evolution_data_path(), "");
    }

    #[test]
    fn test_filter_is_exact_match() {
        let config = Configuration::resolve(RawProperties {
            filter_method_names: Some("org.example,org.example.app".to_string()),
            ..Default::default()
        });
        assert!(config.filters_method("org.example"));
        assert!(config.filters_method("org.example.app"));
        assert!(!config.filters_method("org"));
        assert!(!config.filters_method("org.example.app.Main"));
        assert!(!config.filters_method(""));
    }

    #[test]
    fn test_serialized_shape() {
        let config = Configuration::resolve(RawProperties {
            filter_method_names: Some("b,a".to_string()),
            logger_level: Some("FINE".to_string()),
            ..Default::default()
        });
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["filtered_methods"], serde_json::json!(["a", "b"]));
        assert_eq!(json["logger_level"], "FINE");
        assert_eq!(json["power_monitor_path"], serde_json::Value::Null);
        assert_eq!(json["evolution_data_path"], "evolution");
    }
}
