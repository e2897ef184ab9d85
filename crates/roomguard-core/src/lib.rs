//! # RoomGuard Core
//!
//! Typed settings and configuration for RoomGuard protections.
//!
//! This crate provides:
//! - The setting contract (parse, validate, commit) and its list extension
//! - String, string list and bounded number settings
//! - A type-erased setting surface for hosts that only hold operator text
//! - Configuration loading (JSON5 format) and application onto settings

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod settings;

pub use config::{Config, ConfigError, ProtectionConfig, SettingInput, SettingRejection};
pub use settings::{
    AnySetting, ListSetting, NumberSetting, ProtectionSetting, SettingError, SettingKind, Settings,
    StringListSetting, StringSetting,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::settings::{
        AnySetting, ListSetting, NumberSetting, ProtectionSetting, SettingKind, Settings,
        StringListSetting, StringSetting,
    };
}
