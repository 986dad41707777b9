//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, ServerConfig)
//! - [`links`]: Uplink connection configuration (UplinkConfig)
//! - [`bot`]: Service bot identity and credential table (BotConfig)
//! - [`validation`]: Startup validation of the whole file

mod bot;
mod defaults;
mod links;
mod types;
mod validation;

pub use bot::{BotConfig, ReplyMethod};
pub use links::UplinkConfig;
pub use types::{Config, ConfigError, ServerConfig};
pub use validation::{ValidationError, validate};
