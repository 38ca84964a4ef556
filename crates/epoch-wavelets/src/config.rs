use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TfrConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub morlet: MorletConfig,
}

/// Per-trial execution strategy of [`crate::EpochsWavelet`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Transform trials on the rayon pool. Ignored unless the `parallel`
    /// feature is compiled in.
    #[serde(default)]
    pub parallel: bool,
}

/// Morlet wavelet shape. The sample rate is not part of it: it comes from the
/// epochs the wavelet is bound to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MorletConfig {
    /// Central frequency parameter (omega_0). Higher values = better frequency resolution.
    /// Default: 6.0 (standard Morlet)
    pub omega0: f64,
}

impl Default for MorletConfig {
    fn default() -> Self {
        Self { omega0: 6.0 }
    }
}

impl MorletConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.omega0.is_finite() || self.omega0 <= 0.0 {
            return Err(ConfigError::Validation(
                "morlet.omega0 must be finite and positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl TfrConfig {
    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TfrConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    /// Environment variables are prefixed with EPOCH_WAVELETS_
    /// Example: EPOCH_WAVELETS_MORLET_OMEGA0=7.0
    pub fn from_file_with_env<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        use std::env;

        if let Ok(val) = env::var("EPOCH_WAVELETS_PARALLEL") {
            self.engine.parallel = val.parse().map_err(|_| {
                ConfigError::Validation("Invalid EPOCH_WAVELETS_PARALLEL".to_string())
            })?;
        }
        if let Ok(val) = env::var("EPOCH_WAVELETS_MORLET_OMEGA0") {
            self.morlet.omega0 = val.parse().map_err(|_| {
                ConfigError::Validation("Invalid EPOCH_WAVELETS_MORLET_OMEGA0".to_string())
            })?;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.morlet.validate()
    }

    /// Export configuration to TOML string
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = self
            .to_toml_string()
            .map_err(|e| ConfigError::Validation(format!("TOML serialization error: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
