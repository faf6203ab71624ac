use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, ValidationError};
use crate::sort::SortFlags;

/// Rendering configuration for a [`UrlBuilder`](crate::UrlBuilder).
///
/// Unrecognized options are kept in `extra` so they survive a round trip
/// through JSON, but they have no effect on rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sort arguments by key before rendering
    pub sort: bool,
    /// Key comparison used when `sort` is set
    pub sort_flags: SortFlags,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Settings {
    /// Validate a dynamic settings record, merging it over the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSettings`] when `value` is not an
    /// object or a known option has the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use urlbuild::{Settings, SortFlags};
    ///
    /// let settings = Settings::from_json(&json!({ "sort": true })).unwrap();
    /// assert!(settings.sort);
    /// assert_eq!(settings.sort_flags, SortFlags::String);
    /// assert!(Settings::from_json(&json!([1, 2])).is_err());
    /// ```
    pub fn from_json(value: &Value) -> Result<Self> {
        SettingsPatch::from_json(value).map(Self::from)
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_sort_flags(mut self, sort_flags: SortFlags) -> Self {
        self.sort_flags = sort_flags;
        self
    }

    /// Merge a partial record over these settings; options the patch leaves
    /// unset keep their current value.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(sort) = patch.sort {
            self.sort = sort;
        }
        if let Some(sort_flags) = patch.sort_flags {
            self.sort_flags = sort_flags;
        }
        self.extra.extend(patch.extra);
    }

    /// Comparison to sort with, or `None` when sorting is off
    pub(crate) fn active_sort(&self) -> Option<SortFlags> {
        self.sort.then_some(self.sort_flags)
    }
}

impl From<SettingsPatch> for Settings {
    fn from(patch: SettingsPatch) -> Self {
        let mut settings = Self::default();
        settings.apply(patch);
        settings
    }
}

/// Partial settings record for [`UrlBuilder::update_settings`](crate::UrlBuilder::update_settings)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPatch {
    pub sort: Option<bool>,
    pub sort_flags: Option<SortFlags>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SettingsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a dynamic partial settings record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSettings`] when `value` is not an
    /// object or a known option has the wrong type.
    pub fn from_json(value: &Value) -> Result<Self> {
        if !value.is_object() {
            tracing::debug!(kind = json_kind(value), "settings record is not an object");
            return Err(ValidationError::InvalidSettings);
        }
        Self::deserialize(value).map_err(|err| {
            tracing::debug!(error = %err, "rejected settings record");
            ValidationError::InvalidSettings
        })
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_sort_flags(mut self, sort_flags: SortFlags) -> Self {
        self.sort_flags = Some(sort_flags);
        self
    }

    /// Attach an option this crate does not interpret
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl From<Settings> for SettingsPatch {
    fn from(settings: Settings) -> Self {
        Self {
            sort: Some(settings.sort),
            sort_flags: Some(settings.sort_flags),
            extra: settings.extra,
        }
    }
}

/// JSON type name, for diagnostics
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
