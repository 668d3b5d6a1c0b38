//! Agent logger levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

/// Logger verbosity accepted by the `logger-level` key
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoggerLevel {
    /// Logging disabled
    Off,
    /// Serious failures only
    Severe,
    /// Potential problems
    Warning,
    /// Informational messages
    #[default]
    Info,
    /// Static configuration messages
    Config,
    /// Tracing information
    Fine,
    /// Fairly detailed tracing
    Finer,
    /// Highly detailed tracing
    Finest,
    /// Everything
    All,
}

impl LoggerLevel {
    /// All levels, from least to most verbose
    pub const ALL_LEVELS: [LoggerLevel; 9] = [
        LoggerLevel::Off,
        LoggerLevel::Severe,
        LoggerLevel::Warning,
        LoggerLevel::Info,
        LoggerLevel::Config,
        LoggerLevel::Fine,
        LoggerLevel::Finer,
        LoggerLevel::Finest,
        LoggerLevel::All,
    ];

    /// Parse a level token.
    ///
    /// Only the exact uppercase names are accepted; `"info"` is not a level.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL_LEVELS
            .into_iter()
            .find(|level| level.as_str() == token)
    }

    /// Canonical token for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            LoggerLevel::Off => "OFF",
            LoggerLevel::Severe => "SEVERE",
            LoggerLevel::Warning => "WARNING",
            LoggerLevel::Info => "INFO",
            LoggerLevel::Config => "CONFIG",
            LoggerLevel::Fine => "FINE",
            LoggerLevel::Finer => "FINER",
            LoggerLevel::Finest => "FINEST",
            LoggerLevel::All => "ALL",
        }
    }

    /// Numeric weight; a message is emitted when its weight is at least the
    /// configured level's weight.
    pub fn severity(&self) -> i32 {
        match self {
            LoggerLevel::Off => i32::MAX,
            LoggerLevel::Severe => 1000,
            LoggerLevel::Warning => 900,
            LoggerLevel::Info => 800,
            LoggerLevel::Config => 700,
            LoggerLevel::Fine => 500,
            LoggerLevel::Finer => 400,
            LoggerLevel::Finest => 300,
            LoggerLevel::All => i32::MIN,
        }
    }

    /// Whether this level lets through messages that `other` would drop
    pub fn is_finer_than(&self, other: LoggerLevel) -> bool {
        self.severity() < other.severity()
    }
}

impl fmt::Display for LoggerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token is not one of the nine level names
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown logger level: {0}")]
pub struct UnknownLevel(pub String);

impl FromStr for LoggerLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

impl From<LoggerLevel> for LevelFilter {
    fn from(level: LoggerLevel) -> Self {
        match level {
            LoggerLevel::Off => LevelFilter::OFF,
            LoggerLevel::Severe => LevelFilter::ERROR,
            LoggerLevel::Warning => LevelFilter::WARN,
            LoggerLevel::Info => LevelFilter::INFO,
            LoggerLevel::Config | LoggerLevel::Fine => LevelFilter::DEBUG,
            LoggerLevel::Finer | LoggerLevel::Finest | LoggerLevel::All => LevelFilter::TRACE,
        }
    }
}
