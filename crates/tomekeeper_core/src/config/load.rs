use super::schema::{ApiKey, AppConfig};
use crate::logging::normalize_level;
use crate::repo::catalog_store::StoreMode;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_STORE_MODE: &str = "TOMEKEEPER_STORE_MODE";
pub const ENV_API_URL: &str = "TOMEKEEPER_API_URL";
pub const ENV_LOG_LEVEL: &str = "TOMEKEEPER_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "TOMEKEEPER_LOG_DIR";
pub const ENV_ASSISTANT_KEY: &str = "TOMEKEEPER_ASSISTANT_KEY";
pub const ENV_OPENAI_KEY: &str = "OPENAI_API_KEY";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

impl AppConfig {
    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    /// - Zero timeouts, a blank remote `base_url`, or an unknown log level.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store.timeout_ms == 0 {
            return Err(ConfigError::Invalid("store.timeout_ms must be > 0".to_string()));
        }
        if self.assistant.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "assistant.timeout_ms must be > 0".to_string(),
            ));
        }
        if self.store.mode == StoreMode::Remote && self.store.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "store.base_url is required in remote mode".to_string(),
            ));
        }
        normalize_level(&self.logging.level).map_err(ConfigError::Invalid)?;
        Ok(())
    }
}

/// Loads configuration from `path` (if any), then applies environment
/// overrides and validates the result.
///
/// A `path` that does not exist yields defaults.
pub fn load_config(path: Option<&Path>) -> ConfigResult<AppConfig> {
    let mut config = match path {
        Some(path) if path.exists() => {
            let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            AppConfig::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => AppConfig::default(),
    };

    apply_env_overrides(&mut config);
    config.validate()?;
    info!(
        "event=config_load module=config status=ok store_mode={} assistant_key_present={}",
        config.store.mode.as_str(),
        config.assistant.api_key.is_some()
    );
    Ok(config)
}

/// Applies process environment overrides.
pub fn apply_env_overrides(config: &mut AppConfig) {
    apply_overrides_from(config, |name| std::env::var(name).ok());
}

/// Applies overrides read through `lookup`, so tests never mutate the
/// process environment.
pub fn apply_overrides_from(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(value) = lookup(ENV_STORE_MODE) {
        match StoreMode::parse(&value) {
            Some(mode) => config.store.mode = mode,
            None => warn!(
                "event=config_load module=config status=ignored key={} reason=unknown_store_mode",
                ENV_STORE_MODE
            ),
        }
    }
    if let Some(value) = lookup(ENV_API_URL).filter(|value| !value.trim().is_empty()) {
        config.store.base_url = value.trim().to_string();
    }
    if let Some(value) = lookup(ENV_LOG_LEVEL) {
        config.logging.level = value;
    }
    if let Some(value) = lookup(ENV_LOG_DIR).filter(|value| !value.trim().is_empty()) {
        config.logging.dir = Some(value);
    }

    let key = lookup(ENV_ASSISTANT_KEY)
        .and_then(ApiKey::new)
        .or_else(|| lookup(ENV_OPENAI_KEY).and_then(ApiKey::new));
    if key.is_some() {
        config.assistant.api_key = key;
    }
}
