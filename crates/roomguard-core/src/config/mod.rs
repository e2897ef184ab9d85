//! Configuration loading and validation.
//!
//! Protections and their initial setting values are configured in JSON5.
//! Config location: `~/.roomguard/roomguard.json`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::settings::{SettingError, Settings};

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON5 parsing error.
    #[error("Parse error: {0}")]
    Parse(#[from] json5::Error),

    /// Config validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// One or more configured setting values were rejected.
    #[error("{}", describe_rejections(.0))]
    Rejected(Vec<SettingRejection>),
}

/// A configured setting value that was not committed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Protection '{protection}', setting '{setting}': {source}")]
pub struct SettingRejection {
    /// Protection name.
    pub protection: String,
    /// Setting name.
    pub setting: String,
    /// Why the value was rejected.
    #[source]
    pub source: SettingError,
}

fn describe_rejections(rejections: &[SettingRejection]) -> String {
    rejections
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Protection configurations by protection name.
    #[serde(default)]
    pub protections: BTreeMap<String, ProtectionConfig>,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns error if config cannot be loaded or parsed.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = json5::from_str(&content)?;
        config.validate()?;
        tracing::debug!(
            path = %path.display(),
            protections = config.protections.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Save configuration to a path.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        Self::state_dir().join("roomguard.json")
    }

    /// Get the `RoomGuard` state directory.
    ///
    /// Uses `ROOMGUARD_STATE_DIR` env var if set, otherwise `~/.roomguard`.
    #[must_use]
    pub fn state_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("ROOMGUARD_STATE_DIR") {
            PathBuf::from(dir)
        } else if let Some(home) = dirs::home_dir() {
            home.join(".roomguard")
        } else {
            PathBuf::from(".roomguard")
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        for (name, protection) in &self.protections {
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Protection name cannot be empty".to_string(),
                ));
            }

            if protection.settings.keys().any(|key| key.trim().is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "Protection '{name}' has a setting with an empty name"
                )));
            }
        }

        Ok(())
    }

    /// Whether a protection is configured and enabled.
    #[must_use]
    pub fn is_enabled(&self, protection: &str) -> bool {
        self.protections.get(protection).is_some_and(|p| p.enabled)
    }

    /// Names of enabled protections.
    pub fn enabled_protections(&self) -> impl Iterator<Item = &str> {
        self.protections
            .iter()
            .filter(|(_, p)| p.enabled)
            .map(|(name, _)| name.as_str())
    }

    /// Apply the configured setting values of `protection` onto `settings`.
    ///
    /// Every value goes through parse, validate and commit. A rejected value
    /// does not stop the others from being applied.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Rejected` listing every rejected setting.
    pub fn apply(&self, protection: &str, settings: &mut Settings) -> Result<(), ConfigError> {
        let Some(config) = self.protections.get(protection) else {
            return Ok(());
        };

        let rejections: Vec<_> = config
            .settings
            .iter()
            .filter_map(|(name, input)| {
                input
                    .apply_to(name, settings)
                    .err()
                    .map(|source| SettingRejection {
                        protection: protection.to_string(),
                        setting: name.clone(),
                        source,
                    })
            })
            .collect();

        if rejections.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Rejected(rejections))
        }
    }
}

/// Configuration for a single protection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectionConfig {
    /// Whether the protection is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Initial setting values by setting name.
    #[serde(default)]
    pub settings: BTreeMap<String, SettingInput>,
}

impl Default for ProtectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            settings: BTreeMap::new(),
        }
    }
}

const fn default_true() -> bool {
    true
}

/// A configured setting value, as written by an operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingInput {
    /// Numeric literal.
    Number(f64),
    /// Text, parsed by the target setting.
    Text(String),
    /// Whole list for list settings.
    List(Vec<String>),
}

impl SettingInput {
    fn apply_to(&self, name: &str, settings: &mut Settings) -> Result<(), SettingError> {
        match self {
            Self::Number(number) => settings.set_from_str(name, &number.to_string()),
            Self::Text(text) => settings.set_from_str(name, text),
            Self::List(items) => settings.replace_list(name, items.as_slice()),
        }
    }
}
