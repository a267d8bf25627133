//! Application configuration.
//!
//! # Responsibility
//! - Define typed settings for the backing store, assistant and logging.
//! - Load them from an optional TOML file plus environment overrides.
//!
//! # Invariants
//! - Every section has defaults, so an empty file is a valid config.
//! - Credentials are never serialized and never printed by `Debug`.

mod load;
mod schema;

pub use load::{apply_env_overrides, apply_overrides_from, load_config, ConfigError, ConfigResult};
pub use schema::{ApiKey, AppConfig, AssistantConfig, LoggingConfig, StoreConfig};
