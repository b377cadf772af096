//! Nexus Core - configuration and domain rules
//!
//! This crate holds everything the HTTP layer is not allowed to own:
//! - Configuration management (env vars + TOML files)
//! - The answer templating rule applied to incoming queries

pub mod answer;
pub mod config;

pub use answer::render_answer;
pub use config::{AppConfig, ConfigError, LoggingConfig, ServerConfig};
