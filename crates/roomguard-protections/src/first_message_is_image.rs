//! Bans users whose first message after joining is an image or video.

use roomguard_core::settings::Settings;

use crate::api::Protection;

/// Registry name.
pub const NAME: &str = "FirstMessageIsImageProtection";

/// Operator-facing description.
pub const DESCRIPTION: &str = "If the first thing a user does after joining is to post an image \
    or video, they'll be banned for spam. This does not publish the ban to any of your ban lists.";

/// Image-as-first-message protection. Has no settings.
#[derive(Debug, Clone, Default)]
pub struct FirstMessageIsImage {
    settings: Settings,
}

impl FirstMessageIsImage {
    /// Create a new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            settings: Settings::new(),
        }
    }
}

impl Protection for FirstMessageIsImage {
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

    #[test]
    fn test_name_and_settings() {
        let protection = FirstMessageIsImage::new();
        assert_eq!(protection.name(), NAME);
        assert!(protection.settings().is_empty());
    }
}
