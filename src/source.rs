/// Provider of the current request's raw URL (path plus query string).
///
/// Consulted by [`UrlBuilder::with_request_url`](crate::UrlBuilder::with_request_url)
/// when the explicit URL is empty. Any `Fn() -> Option<String>` closure works.
pub trait RequestUrl {
    fn request_url(&self) -> Option<String>;
}

impl<F> RequestUrl for F
where
    F: Fn() -> Option<String>,
{
    fn request_url(&self) -> Option<String> {
        self()
    }
}

/// No ambient request; used outside of a request context
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRequestUrl;

impl RequestUrl for NoRequestUrl {
    fn request_url(&self) -> Option<String> {
        None
    }
}

/// Reads `REQUEST_URI`, as set by CGI hosts
#[derive(Debug, Clone, Copy, Default)]
pub struct CgiRequestUrl;

impl CgiRequestUrl {
    pub const VAR: &'static str = "REQUEST_URI";
}

impl RequestUrl for CgiRequestUrl {
    fn request_url(&self) -> Option<String> {
        std::env::var(Self::VAR).ok()
    }
}
