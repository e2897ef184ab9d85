//! Concrete setting types.

use super::{ListSetting, ProtectionSetting};

/// Free-form text setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringSetting {
    value: String,
}

impl StringSetting {
    /// Create a string setting with a default value.
    #[must_use]
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            value: default.into(),
        }
    }
}

impl ProtectionSetting for StringSetting {
    type Change = String;
    type Value = String;

    fn value(&self) -> &String {
        &self.value
    }

    fn from_string(&self, data: &str) -> Option<String> {
        Some(data.to_string())
    }

    fn validate(&self, _data: &String) -> bool {
        true
    }

    fn set_value(&mut self, data: String) {
        self.value = data;
    }
}

/// Ordered list of strings. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringListSetting {
    value: Vec<String>,
}

impl StringListSetting {
    /// Create a list setting with initial entries.
    #[must_use]
    pub fn new<I, S>(default: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: default.into_iter().map(Into::into).collect(),
        }
    }
}

impl ProtectionSetting for StringListSetting {
    type Change = String;
    type Value = Vec<String>;

    fn value(&self) -> &Vec<String> {
        &self.value
    }

    fn from_string(&self, data: &str) -> Option<String> {
        Some(data.to_string())
    }

    fn validate(&self, _data: &String) -> bool {
        true
    }

    fn set_value(&mut self, data: Vec<String>) {
        self.value = data;
    }
}

impl ListSetting for StringListSetting {
    fn add_value(&self, data: String) -> Vec<String> {
        let mut next = self.value.clone();
        next.push(data);
        next
    }

    fn remove_value(&self, data: &String) -> Vec<String> {
        let mut next = self.value.clone();
        if let Some(index) = next.iter().position(|entry| entry == data) {
            next.remove(index);
        }
        next
    }
}

/// Numeric setting with optional inclusive bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberSetting {
    value: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberSetting {
    /// Create a number setting. The default is committed immediately and
    /// must lie within the bounds.
    #[must_use]
    pub fn new(default: f64, min: Option<f64>, max: Option<f64>) -> Self {
        let setting = Self {
            value: default,
            min,
            max,
        };
        debug_assert!(
            setting.validate(&default),
            "default {default} outside of bounds {min:?}..={max:?}"
        );
        setting
    }

    /// Create a number setting without bounds.
    #[must_use]
    pub fn unbounded(default: f64) -> Self {
        Self::new(default, None, None)
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn min(&self) -> Option<f64> {
        self.min
    }

    /// Inclusive upper bound.
    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        self.max
    }
}

impl ProtectionSetting for NumberSetting {
    type Change = f64;
    type Value = f64;

    fn value(&self) -> &f64 {
        &self.value
    }

    /// Accepts Rust `f64` decimal or exponent syntax after trimming
    /// whitespace. Empty input, `NaN`, infinities and hex literals yield
    /// `None`.
    fn from_string(&self, data: &str) -> Option<f64> {
        data.trim()
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
    }

    fn validate(&self, data: &f64) -> bool {
        data.is_finite()
            && self.min.is_none_or(|min| min <= *data)
            && self.max.is_none_or(|max| *data <= max)
    }

    fn set_value(&mut self, data: f64) {
        self.value = data;
    }
}
