//! Parse a URL's path and query string, add or merge query arguments, and
//! render the result back to a string, optionally with sorted arguments.
//!
//! Keys and values are kept verbatim: nothing is percent-encoded or decoded.

// Internal modules (not public API)
mod builder;
mod error;
mod helpers;
mod query;
mod settings;
mod sort;
mod source;

// Public API
pub use builder::UrlBuilder;
pub use error::{Result, ValidationError};
pub use query::QueryArguments;
pub use settings::{Settings, SettingsPatch};
pub use sort::SortFlags;
pub use source::{CgiRequestUrl, NoRequestUrl, RequestUrl};
