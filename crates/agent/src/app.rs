//! Application wiring around the resolved configuration

use anyhow::{Context, Result};
use config::Configuration;
use tracing::{debug, info};

/// Main application; owns the configuration for the rest of the process
pub struct Application {
    config: Configuration,
}

impl Application {
    pub fn new(config: Configuration) -> Self {
        info!(
            logger_level = %config.logger_level(),
            filtered_methods = config.filtered_methods().len(),
            saves_runtime_data = config.saves_runtime_data(),
            tracks_consumption_evolution = config.tracks_consumption_evolution(),
            "Application configured"
        );
        match config.power_monitor_path() {
            Some(path) => info!("Power monitor: {}", path),
            None => debug!("No power monitor path configured"),
        }
        Self { config }
    }

    /// Write the resolved configuration to stdout as pretty JSON
    pub fn print_config(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.config)
            .context("Failed to serialize configuration")?;
        println!("{}", json);
        Ok(())
    }

    /// Print whether `method` is in the configured filter
    pub fn check_method(&self, method: &str) {
        let verdict = if self.config.filters_method(method) {
            "filtered"
        } else {
            "not filtered"
        };
        println!("{}: {}", method, verdict);
    }
}
