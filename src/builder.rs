use core::cell::OnceCell;
use core::fmt::Display;

use serde_json::Value;

use crate::error::{Result, ValidationError};
use crate::helpers::{split_query, trim};
use crate::query::{QueryArguments, validate};
use crate::settings::{Settings, SettingsPatch, json_kind};
use crate::source::{NoRequestUrl, RequestUrl};

/// A URL split into a path and query arguments that can be merged and
/// rendered back to a string.
///
/// Mutating methods return `&mut Self` for chaining. The rendered string is
/// cached until the next mutation.
///
/// # Examples
///
/// ```
/// use urlbuild::{Settings, UrlBuilder};
///
/// let mut url = UrlBuilder::new("http://example.com/foo?bar=Bar", Settings::default())?;
/// url.add_query_argument("bar", "Baz")?.add_query_argument("page", 2)?;
/// assert_eq!(url.render(), "http://example.com/foo?bar=Baz&page=2");
/// # Ok::<(), urlbuild::ValidationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    path: String,
    arguments: QueryArguments,
    settings: Settings,
    render_cache: OnceCell<String>,
}

impl UrlBuilder {
    /// Parse `url` with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingUrl`] if `url` is empty after trimming.
    pub fn new(url: &str, settings: impl Into<Settings>) -> Result<Self> {
        Self::with_request_url(url, settings, &NoRequestUrl)
    }

    /// Parse `url`, falling back to the request URL reported by `source`
    /// when `url` is empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingUrl`] if both `url` and the request
    /// URL are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlbuild::{Settings, UrlBuilder};
    ///
    /// let current = || Some("/search?q=rust".to_string());
    /// let url = UrlBuilder::with_request_url("", Settings::default(), &current)?;
    /// assert_eq!(url.path(), "/search");
    /// assert_eq!(url.get("q"), Some("rust"));
    /// # Ok::<(), urlbuild::ValidationError>(())
    /// ```
    pub fn with_request_url(
        url: &str,
        settings: impl Into<Settings>,
        source: &impl RequestUrl,
    ) -> Result<Self> {
        let settings = settings.into();
        let explicit = trim(url);
        if !explicit.is_empty() {
            return Ok(Self::parse(explicit, settings));
        }

        let ambient = source.request_url().unwrap_or_default();
        let ambient = trim(&ambient);
        if ambient.is_empty() {
            tracing::debug!("no url given and no request url available");
            return Err(ValidationError::MissingUrl);
        }
        tracing::trace!(url = ambient, "using request url");
        Ok(Self::parse(ambient, settings))
    }

    fn parse(url: &str, settings: Settings) -> Self {
        let (path, query) = split_query(url);
        let arguments = query.map(QueryArguments::parse).unwrap_or_default();
        tracing::trace!(path, arguments = arguments.len(), "parsed url");

        Self {
            path: path.to_owned(),
            arguments,
            settings,
            render_cache: OnceCell::new(),
        }
    }

    /// Everything before the first `?`
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn arguments(&self) -> &QueryArguments {
        &self.arguments
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Value of a query argument
    pub fn get(&self, key: &str) -> Option<&str> {
        self.arguments.get(key)
    }

    /// Whether a rendered string is currently cached
    pub fn is_cached(&self) -> bool {
        self.render_cache.get().is_some()
    }

    /// Replace the path, keeping the query arguments
    pub fn set_path(&mut self, path: &str) -> &mut Self {
        trim(path).clone_into(&mut self.path);
        self.invalidate();
        self
    }

    /// Set one query argument; an existing key keeps its position.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyKey`] if `key` is empty after
    /// trimming. The builder is left unchanged.
    pub fn add_query_argument(
        &mut self,
        key: impl Display,
        value: impl Display,
    ) -> Result<&mut Self> {
        self.arguments
            .insert(&key.to_string(), &value.to_string())?;
        self.invalidate();
        Ok(self)
    }

    /// Set several query arguments in iteration order.
    ///
    /// All pairs are validated before any is applied, so a failure leaves the
    /// builder unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyKey`] if any key is empty after trimming.
    pub fn add_query_arguments<I, K, V>(&mut self, arguments: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Display,
        V: Display,
    {
        let mut staged = Vec::new();
        for (key, value) in arguments {
            let (raw_key, raw_value) = (key.to_string(), value.to_string());
            let (key, value) = validate(&raw_key, &raw_value)?;
            staged.push((key.to_owned(), value.to_owned()));
        }

        self.arguments.extend_trusted(staged);
        self.invalidate();
        Ok(self)
    }

    /// Set query arguments from a JSON object of scalars.
    ///
    /// Strings are used as-is, numbers by their JSON text, `true` as `"1"`,
    /// and `false` or `null` as an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidArguments`] if `arguments` is not an
    /// object or holds an array or object value, and
    /// [`ValidationError::EmptyKey`] for an empty key.
    pub fn add_query_arguments_json(&mut self, arguments: &Value) -> Result<&mut Self> {
        let Value::Object(map) = arguments else {
            tracing::debug!(kind = json_kind(arguments), "arguments are not an object");
            return Err(ValidationError::InvalidArguments);
        };

        let pairs = map
            .iter()
            .map(|(key, value)| scalar_to_string(value).map(|value| (key.as_str(), value)))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                tracing::debug!("arguments hold a non-scalar value");
                ValidationError::InvalidArguments
            })?;

        self.add_query_arguments(pairs)
    }

    /// Merge a partial settings record over the current settings
    pub fn update_settings(&mut self, patch: impl Into<SettingsPatch>) -> &mut Self {
        self.settings.apply(patch.into());
        self.invalidate();
        self
    }

    /// Merge a dynamic partial settings record over the current settings.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSettings`] if `patch` is not a valid
    /// settings record; the current settings are kept.
    pub fn update_settings_json(&mut self, patch: &Value) -> Result<&mut Self> {
        let patch = SettingsPatch::from_json(patch)?;
        Ok(self.update_settings(patch))
    }

    /// Render the path followed by `?key=value&...` when there are arguments.
    ///
    /// The result is cached; calls without an intervening mutation return
    /// the same string.
    pub fn render(&self) -> &str {
        self.render_cache.get_or_init(|| {
            let mut out = String::with_capacity(self.path.len() + 16 * self.arguments.len());
            out.push_str(&self.path);
            if !self.arguments.is_empty() {
                out.push('?');
                self.arguments
                    .write_to(&mut out, self.settings.active_sort());
            }
            tracing::trace!(url = %out, "rendered url");
            out
        })
    }

    fn invalidate(&mut self) {
        self.render_cache.take();
    }
}

/// String form of a JSON scalar, `None` for arrays and objects
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_owned()),
        Value::Bool(false) | Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

impl core::fmt::Display for UrlBuilder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.render())
    }
}

impl core::str::FromStr for UrlBuilder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s, Settings::default())
    }
}

impl From<&UrlBuilder> for String {
    fn from(url: &UrlBuilder) -> Self {
        url.render().to_owned()
    }
}
