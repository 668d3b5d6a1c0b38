//! Configuration management for the Joules energy agent
//!
//! This crate reads the agent's `config.properties` file through an injected
//! filesystem capability, resolves every recognized key to a typed setting
//! and hands back an immutable [`Configuration`].

pub mod filesystem;
pub mod loader;
pub mod properties;
pub mod schema;
pub mod validation;

pub use filesystem::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use loader::{ConfigLoader, CONFIG_FILE_NAME};
pub use properties::Properties;
pub use schema::*;
pub use types::{ConfigError, LoggerLevel};
pub use validation::*;
