//! Type-erased settings for hosts that only hold operator text.

use serde::Serialize;

use super::{
    ListSetting, NumberSetting, ProtectionSetting, SettingError, StringListSetting, StringSetting,
};

/// Whether a setting supports add and remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    /// Single value, replaced as a whole.
    Scalar,
    /// Collection, changed one element at a time.
    List,
}

/// Any concrete setting.
#[derive(Debug, Clone, PartialEq)]
pub enum AnySetting {
    /// Free-form text.
    String(StringSetting),
    /// Ordered list of strings.
    StringList(StringListSetting),
    /// Bounded number.
    Number(NumberSetting),
}

impl AnySetting {
    /// Scalar or list.
    #[must_use]
    pub const fn kind(&self) -> SettingKind {
        match self {
            Self::String(_) | Self::Number(_) => SettingKind::Scalar,
            Self::StringList(_) => SettingKind::List,
        }
    }

    /// Whether add and remove are supported.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self.kind(), SettingKind::List)
    }

    /// Type name for operator-facing output.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::StringList(_) => "string list",
            Self::Number(_) => "number",
        }
    }

    /// Committed value as JSON.
    #[must_use]
    pub fn value_json(&self) -> serde_json::Value {
        match self {
            Self::String(s) => serde_json::Value::from(s.value().as_str()),
            Self::StringList(s) => serde_json::Value::from(s.value().clone()),
            Self::Number(s) => serde_json::Value::from(*s.value()),
        }
    }

    /// Committed value if this is a string setting.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.value().as_str()),
            _ => None,
        }
    }

    /// Committed value if this is a list setting.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::StringList(s) => Some(s.value().as_slice()),
            _ => None,
        }
    }

    /// Committed value if this is a number setting.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(s) => Some(*s.value()),
            _ => None,
        }
    }

    /// Parse, validate and commit a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `SettingError::Unparseable` or `SettingError::Invalid` when the
    /// input is rejected, and `SettingError::ListRequiresAddRemove` for list
    /// settings. The committed value is untouched on error.
    pub fn set_from_str(&mut self, input: &str) -> Result<(), SettingError> {
        match self {
            Self::String(s) => commit_scalar(s, input),
            Self::Number(s) => commit_scalar(s, input),
            Self::StringList(_) => Err(SettingError::ListRequiresAddRemove),
        }
    }

    /// Parse and validate one element, then commit the list with it appended.
    ///
    /// # Errors
    ///
    /// Returns `SettingError::NotAList` for scalar settings, or the parse and
    /// validation errors of [`set_from_str`](Self::set_from_str).
    pub fn add_from_str(&mut self, input: &str) -> Result<(), SettingError> {
        let Self::StringList(s) = self else {
            return Err(SettingError::NotAList);
        };
        let element = checked_change(s, input)?;
        let next = s.add_value(element);
        s.set_value(next);
        Ok(())
    }

    /// Parse and validate one element, then commit the list without its
    /// first occurrence. Removing an absent element leaves the list as is.
    ///
    /// # Errors
    ///
    /// Same as [`add_from_str`](Self::add_from_str).
    pub fn remove_from_str(&mut self, input: &str) -> Result<(), SettingError> {
        let Self::StringList(s) = self else {
            return Err(SettingError::NotAList);
        };
        let element = checked_change(s, input)?;
        let next = s.remove_value(&element);
        s.set_value(next);
        Ok(())
    }

    /// Replace a whole list. Every element is parsed and validated before
    /// anything is committed.
    ///
    /// # Errors
    ///
    /// Same as [`add_from_str`](Self::add_from_str).
    pub fn replace_list<I, S>(&mut self, items: I) -> Result<(), SettingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Self::StringList(s) = self else {
            return Err(SettingError::NotAList);
        };
        let next = items
            .into_iter()
            .map(|item| checked_change(s, item.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        s.set_value(next);
        Ok(())
    }
}

impl From<StringSetting> for AnySetting {
    fn from(setting: StringSetting) -> Self {
        Self::String(setting)
    }
}

impl From<StringListSetting> for AnySetting {
    fn from(setting: StringListSetting) -> Self {
        Self::StringList(setting)
    }
}

impl From<NumberSetting> for AnySetting {
    fn from(setting: NumberSetting) -> Self {
        Self::Number(setting)
    }
}

fn checked_change<S: ProtectionSetting>(
    setting: &S,
    input: &str,
) -> Result<S::Change, SettingError> {
    let change = setting
        .from_string(input)
        .ok_or_else(|| SettingError::Unparseable(input.to_string()))?;
    if !setting.validate(&change) {
        return Err(SettingError::Invalid(input.to_string()));
    }
    Ok(change)
}

fn commit_scalar<S, V>(setting: &mut S, input: &str) -> Result<(), SettingError>
where
    S: ProtectionSetting<Change = V, Value = V>,
{
    let value = checked_change(setting, input)?;
    setting.set_value(value);
    Ok(())
}

/// Named settings owned by one protection, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    entries: Vec<(String, AnySetting)>,
}

impl Settings {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Declare a setting. A later declaration with the same name replaces
    /// the earlier one in place.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, setting: impl Into<AnySetting>) -> Self {
        let name = name.into();
        let setting = setting.into();
        if let Some(index) = self.entries.iter().position(|(n, _)| *n == name) {
            self.entries[index].1 = setting;
        } else {
            self.entries.push((name, setting));
        }
        self
    }

    /// Get a setting by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AnySetting> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, setting)| setting)
    }

    /// Get a setting by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut AnySetting> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, setting)| setting)
    }

    /// Iterate settings in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnySetting)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), s))
    }

    /// List setting names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of settings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the protection has no settings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse, validate and commit a scalar setting by name.
    ///
    /// # Errors
    ///
    /// Returns `SettingError::Unknown` for an unknown name, otherwise see
    /// [`AnySetting::set_from_str`].
    pub fn set_from_str(&mut self, name: &str, input: &str) -> Result<(), SettingError> {
        self.apply(name, input, |setting| setting.set_from_str(input))
    }

    /// Add one element to a list setting by name.
    ///
    /// # Errors
    ///
    /// Returns `SettingError::Unknown` for an unknown name, otherwise see
    /// [`AnySetting::add_from_str`].
    pub fn add_from_str(&mut self, name: &str, input: &str) -> Result<(), SettingError> {
        self.apply(name, input, |setting| setting.add_from_str(input))
    }

    /// Remove one element from a list setting by name.
    ///
    /// # Errors
    ///
    /// Returns `SettingError::Unknown` for an unknown name, otherwise see
    /// [`AnySetting::remove_from_str`].
    pub fn remove_from_str(&mut self, name: &str, input: &str) -> Result<(), SettingError> {
        self.apply(name, input, |setting| setting.remove_from_str(input))
    }

    /// Replace a whole list setting by name.
    ///
    /// # Errors
    ///
    /// Returns `SettingError::Unknown` for an unknown name, otherwise see
    /// [`AnySetting::replace_list`].
    pub fn replace_list<S: AsRef<str>>(
        &mut self,
        name: &str,
        items: &[S],
    ) -> Result<(), SettingError> {
        self.apply(name, &format!("{} items", items.len()), |setting| {
            setting.replace_list(items)
        })
    }

    fn apply<F>(&mut self, name: &str, input: &str, op: F) -> Result<(), SettingError>
    where
        F: FnOnce(&mut AnySetting) -> Result<(), SettingError>,
    {
        let setting = self
            .get_mut(name)
            .ok_or_else(|| SettingError::Unknown(name.to_string()))?;

        match op(&mut *setting) {
            Ok(()) => {
                tracing::debug!(setting = name, value = %setting.value_json(), "Committed setting");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(setting = name, input, error = %e, "Rejected setting input");
                Err(e)
            }
        }
    }
}
