//! Bans users who post too many messages in a minute.

use roomguard_core::settings::{AnySetting, NumberSetting, Settings};

use crate::api::Protection;

/// Registry name.
pub const NAME: &str = "BasicFloodingProtection";

/// Default messages-per-minute threshold.
pub const MAX_PER_MINUTE: u32 = 10;

/// Setting name for the threshold.
pub const MAX_PER_MINUTE_SETTING: &str = "maxPerMinute";

/// Operator-facing description.
#[must_use]
pub fn description() -> String {
    format!(
        "If a user posts more than {MAX_PER_MINUTE} messages in 60s they'll be banned for spam. \
         This does not publish the ban to any of your ban lists."
    )
}

/// Flooding protection.
#[derive(Debug, Clone)]
pub struct BasicFlooding {
    settings: Settings,
}

impl BasicFlooding {
    /// Create a new instance with the default threshold.
    #[must_use]
    pub fn new() -> Self {
        Self {
            settings: Settings::new().with(
                MAX_PER_MINUTE_SETTING,
                NumberSetting::new(f64::from(MAX_PER_MINUTE), Some(1.0), Some(1000.0)),
            ),
        }
    }

    /// Current messages-per-minute threshold.
    #[must_use]
    pub fn max_per_minute(&self) -> f64 {
        self.settings
            .get(MAX_PER_MINUTE_SETTING)
            .and_then(AnySetting::as_number)
            .unwrap_or_else(|| f64::from(MAX_PER_MINUTE))
    }
}

impl Default for BasicFlooding {
    fn default() -> Self {
        Self::new()
    }
}

impl Protection for BasicFlooding {
    fn name(&self) -> &str {
        NAME
    }

    fn settings(&self) -> &Settings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomguard_core::settings::{SettingError, SettingKind};

    #[test]
    fn test_default_threshold() {
        let protection = BasicFlooding::new();
        assert_eq!(protection.name(), NAME);
        assert_eq!(protection.max_per_minute(), 10.0);
        assert_eq!(
            protection.settings().get(MAX_PER_MINUTE_SETTING).unwrap().kind(),
            SettingKind::Scalar
        );
    }

    #[test]
    fn test_threshold_bounds() {
        let mut protection = BasicFlooding::new();

        protection
            .settings_mut()
            .set_from_str(MAX_PER_MINUTE_SETTING, "1000")
            .unwrap();
        assert_eq!(protection.max_per_minute(), 1000.0);

        assert_eq!(
            protection.settings_mut().set_from_str(MAX_PER_MINUTE_SETTING, "0"),
            Err(SettingError::Invalid("0".to_string()))
        );
        assert_eq!(protection.max_per_minute(), 1000.0);
    }

    #[test]
    fn test_description_mentions_threshold() {
        assert!(description().contains("more than 10 messages"));
    }
}
