//! Configuration loader implementation

use crate::filesystem::FileSystem;
use crate::properties::Properties;
use crate::schema::{Configuration, RawProperties};
use crate::validation::{ConfigValidator, ValidationReport};
use figment::Figment;
use std::path::Path;
use tracing::debug;
use types::{ConfigError, Result};

/// Name of the properties file, relative to the filesystem root
pub const CONFIG_FILE_NAME: &str = "config.properties";

/// Loads the agent configuration from `config.properties`
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the filesystem.
    ///
    /// Fails only when the file is missing or unreadable. Every value-level
    /// problem resolves to that field's default.
    pub fn load<F: FileSystem + ?Sized>(fs: &F) -> Result<Configuration> {
        Self::load_with_report(fs).map(|(config, _)| config)
    }

    /// Load configuration together with diagnostics about ignored values
    pub fn load_with_report<F: FileSystem + ?Sized>(
        fs: &F,
    ) -> Result<(Configuration, ValidationReport)> {
        let properties = Self::read_properties(fs)?;
        let report = ConfigValidator::inspect(&properties);
        Ok((Self::resolve(properties), report))
    }

    /// Load configuration from string (for testing)
    pub fn load_from_str(text: &str) -> Configuration {
        Self::resolve(Properties::string(text))
    }

    /// Load configuration and diagnostics, terminating the process with
    /// status 1 if the file cannot be read.
    ///
    /// The failure is reported as a single line on stderr; this runs before
    /// the host has installed a tracing subscriber.
    pub fn load_with_report_or_exit<F: FileSystem + ?Sized>(
        fs: &F,
    ) -> (Configuration, ValidationReport) {
        Self::load_with_report(fs).unwrap_or_else(|err| {
            eprintln!("{}", fatal_message(&err));
            std::process::exit(1)
        })
    }

    fn read_properties<F: FileSystem + ?Sized>(fs: &F) -> Result<Properties> {
        let path = fs.root().join(CONFIG_FILE_NAME);
        debug!(path = %path.display(), "Reading agent configuration");

        let text = fs
            .read_to_string(Path::new(CONFIG_FILE_NAME))
            .map_err(|e| ConfigError::from_io(&path, e))?;

        Ok(Properties::string(&text).with_source(path))
    }

    fn resolve(properties: Properties) -> Configuration {
        let entries = properties.entries().len();

        // Every recognized value is an optional string, so extraction only
        // fails on a broken provider; fall back to defaults like any bad value.
        let raw: RawProperties = Figment::from(properties).extract().unwrap_or_else(|e| {
            debug!(error = %e, "Could not extract properties, using defaults");
            RawProperties::default()
        });

        let config = Configuration::resolve(raw);
        debug!(
            entries,
            logger_level = %config.logger_level(),
            filtered_methods = config.filtered_methods().len(),
            "Agent configuration resolved"
        );
        config
    }
}

/// Diagnostic printed when the configuration cannot be loaded
fn fatal_message(err: &ConfigError) -> String {
    format!("Error: failed to load agent configuration: {}", err)
}
