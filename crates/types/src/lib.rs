//! Shared types for the Joules energy agent
//!
//! This crate contains the domain types shared between the configuration
//! loader and the agent binary.

pub mod error;
pub mod level;

// Re-export commonly used types
pub use error::{ConfigError, Result};
pub use level::LoggerLevel;
