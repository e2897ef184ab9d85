//! Protection settings.
//!
//! Every protection exposes its tunables as settings. A setting parses
//! operator text into a candidate, decides whether the candidate is
//! acceptable, and holds the committed value. List settings additionally
//! compute what the collection would look like after adding or removing
//! one element, leaving the commit to the caller.
//!
//! The expected call order is always parse, then validate, then commit:
//!
//! ```
//! use roomguard_core::settings::{NumberSetting, ProtectionSetting};
//!
//! let mut threshold = NumberSetting::new(20.0, Some(1.0), Some(1000.0));
//! let candidate = threshold.from_string("500").unwrap();
//! assert!(threshold.validate(&candidate));
//! threshold.set_value(candidate);
//! assert_eq!(*threshold.value(), 500.0);
//! ```

mod erased;
mod variants;

pub use erased::{AnySetting, SettingKind, Settings};
pub use variants::{NumberSetting, StringListSetting, StringSetting};

use thiserror::Error;

/// Setting errors.
///
/// Only the string-level helpers on [`AnySetting`] and [`Settings`] produce
/// these. The typed contract signals failure through `Option` and `bool`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingError {
    /// Input could not be parsed into the setting's change type.
    #[error("Cannot parse value: {0:?}")]
    Unparseable(String),

    /// Input parsed but was rejected by the setting.
    #[error("Value is not valid for this setting: {0:?}")]
    Invalid(String),

    /// Add or remove was requested on a scalar setting.
    #[error("Setting is not a list")]
    NotAList,

    /// A whole-value set was requested on a list setting.
    #[error("List settings are changed with add and remove")]
    ListRequiresAddRemove,

    /// No setting with this name exists on the protection.
    #[error("Unknown setting: {0}")]
    Unknown(String),
}

/// A single configurable value.
///
/// `Change` is what operators hand in, `Value` is what gets stored. They are
/// the same type for scalars and differ for collections, where a change is a
/// single element.
pub trait ProtectionSetting {
    /// Type of a single parsed input.
    type Change;

    /// Type of the committed value.
    type Value;

    /// Current committed value.
    fn value(&self) -> &Self::Value;

    /// Deserialize operator input, or `None` if it cannot be parsed.
    fn from_string(&self, data: &str) -> Option<Self::Change>;

    /// Whether `data` is acceptable for this setting.
    fn validate(&self, data: &Self::Change) -> bool;

    /// Store a value. Only call this with data that passed [`validate`].
    ///
    /// [`validate`]: ProtectionSetting::validate
    fn set_value(&mut self, data: Self::Value);
}

/// A setting holding a collection.
///
/// Both operations return the would-be value without committing it.
pub trait ListSetting: ProtectionSetting {
    /// Current value with `data` appended.
    fn add_value(&self, data: Self::Change) -> Self::Value;

    /// Current value with the first occurrence of `data` removed.
    ///
    /// Returns an unchanged copy when `data` is not present.
    fn remove_value(&self, data: &Self::Change) -> Self::Value;
}
