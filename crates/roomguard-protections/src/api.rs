//! Protection API.

use roomguard_core::settings::Settings;

/// A moderation behavior with tunable settings.
///
/// Each instance owns its settings; instances produced by the same factory
/// never share them.
pub trait Protection: Send + Sync {
    /// Protection name. Must match the key it is registered under.
    fn name(&self) -> &str;

    /// Settings exposed to operators.
    fn settings(&self) -> &Settings;

    /// Settings exposed to operators, for mutation.
    fn settings_mut(&mut self) -> &mut Settings;
}
