//! Declarative cast configuration
//!
//! Applications can declare their casts in `config/casts.toml`:
//!
//! ```toml
//! [casts.users]
//! gender = "Gender"
//! ```
//!
//! or through environment variables such as `VALUECAST__CASTS__USERS__GENDER=Gender`,
//! and load them with [`CastsConfig::load`].

use std::collections::HashMap;
use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::cast::ConfigurationError;
use crate::casts::CastMap;
use crate::registry::ValueObjectRegistry;

const DEFAULT_PATH: &str = "config/casts.toml";
const ENV_PREFIX: &str = "VALUECAST";

/// `model -> field -> value object type name`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CastsConfig {
    #[serde(default)]
    pub casts: HashMap<String, HashMap<String, String>>,
}

impl CastsConfig {
    /// Load from `config/casts.toml`, falling back to env vars.
    pub fn load() -> Result<Self, ConfigurationError> {
        Self::load_from(DEFAULT_PATH)
    }

    /// Load from the TOML file at `path` (optional) merged with env vars.
    pub fn load_from(path: &str) -> Result<Self, ConfigurationError> {
        let builder = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(env_source());

        let settings = match builder.build() {
            Ok(cfg) => cfg,
            Err(err) => {
                // An unreadable file is not fatal; env vars alone may be enough
                if Path::new(path).exists() {
                    log::warn!("failed to load {}, falling back to env: {}", path, err);
                }
                Config::builder()
                    .add_source(env_source())
                    .build()
                    .map_err(|env_err| {
                        ConfigurationError::Load(format!(
                            "file error: {}, then env-only error: {}",
                            err, env_err
                        ))
                    })?
            }
        };

        deserialize(settings)
    }

    /// Parse an inline TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigurationError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .map_err(load_error)?;
        deserialize(settings)
    }

    /// The field table for `model`.
    #[must_use]
    pub fn model(&self, model: &str) -> Option<&HashMap<String, String>> {
        self.casts.get(model)
    }

    /// Resolve the casts of `model` against `registry`.
    pub fn cast_map(&self, model: &str, registry: &ValueObjectRegistry) -> Result<CastMap, ConfigurationError> {
        let fields = self
            .model(model)
            .ok_or_else(|| ConfigurationError::UnknownModel(model.to_string()))?;
        CastMap::from_fields(fields, registry)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator("__")
}

fn deserialize(settings: Config) -> Result<CastsConfig, ConfigurationError> {
    settings.try_deserialize::<CastsConfig>().map_err(load_error)
}

fn load_error(err: ConfigError) -> ConfigurationError {
    ConfigurationError::Load(err.to_string())
}
