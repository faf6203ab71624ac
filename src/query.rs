use indexmap::IndexMap;

use crate::error::{Result, ValidationError};
use crate::helpers::{split_pair, trim};
use crate::sort::SortFlags;

/// Query arguments of a URL.
/// Keys are unique and kept in insertion order; overwriting a key keeps its position.
#[derive(Debug, Clone, Default)]
pub struct QueryArguments {
    entries: IndexMap<String, String>,
}

impl QueryArguments {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Parse a query string (without the leading `?`).
    ///
    /// Tokens are split on `&`, then at the first `=`. Keys and values are
    /// trimmed, a token without `=` gets an empty value, and the last
    /// occurrence of a repeated key wins. Tokens whose key is empty are dropped.
    pub fn parse(query: &str) -> Self {
        let mut arguments = Self::new();

        for token in query.split('&') {
            let (key, value) = split_pair(trim(token));
            let key = trim(key);
            if key.is_empty() {
                continue;
            }
            arguments
                .entries
                .insert(key.to_owned(), trim(value.unwrap_or_default()).to_owned());
        }

        arguments
    }

    /// Set `key` to `value`, both trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyKey`] if `key` is empty after trimming.
    pub fn insert(&mut self, key: &str, value: &str) -> Result<()> {
        let (key, value) = validate(key, value)?;
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    /// Insert pre-validated pairs
    pub(crate) fn extend_trusted(&mut self, pairs: Vec<(String, String)>) {
        self.entries.extend(pairs);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    /// Write `key=value` pairs joined by `&`, sorted by `sort` when given.
    /// Nothing is escaped.
    pub fn write_to(&self, out: &mut String, sort: Option<SortFlags>) {
        let mut pairs: Vec<(&str, &str)> = self.iter().collect();
        if let Some(flags) = sort {
            flags.sort_pairs(&mut pairs);
        }

        for (i, (key, value)) in pairs.into_iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
    }

    /// Query string without the leading `?`, in insertion order
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out, None);
        out
    }
}

impl core::fmt::Display for QueryArguments {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl From<&str> for QueryArguments {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

/// Trim a pair and reject empty keys
pub(crate) fn validate<'a>(key: &'a str, value: &'a str) -> Result<(&'a str, &'a str)> {
    let key = trim(key);
    if key.is_empty() {
        tracing::debug!("rejected query argument with empty key");
        return Err(ValidationError::EmptyKey);
    }
    Ok((key, trim(value)))
}
