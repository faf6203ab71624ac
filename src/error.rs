/// Errors raised while building or mutating a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Settings record has the wrong shape or an unknown option value
    InvalidSettings,
    /// Query arguments are not a key/value mapping of scalars
    InvalidArguments,
    /// Query argument key is empty after trimming
    EmptyKey,
    /// Input URL is empty and no request URL is available
    MissingUrl,
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidSettings => "settings must be a valid settings record",
            Self::InvalidArguments => "arguments must be a mapping of keys to scalar values",
            Self::EmptyKey => "key must not be empty",
            Self::MissingUrl => "url is empty and no request url is available",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for ValidationError {}

/// Result type for URL building operations
pub type Result<T> = core::result::Result<T, ValidationError>;
