use std::fmt;

use crate::FetchError;

/// The outcome of fetching one URL.
///
/// Exactly one of these is produced per input URL. A failed fetch always
/// reports a size of 0, so failures sort ahead of every successful response.
#[derive(Debug)]
pub struct FetchResult {
    url: String,
    size: usize,
    error: Option<FetchError>,
}

impl FetchResult {
    pub fn ok(url: impl Into<String>, size: usize) -> Self {
        Self {
            url: url.into(),
            size,
            error: None,
        }
    }

    pub fn failed(url: impl Into<String>, error: FetchError) -> Self {
        Self {
            url: url.into(),
            size: 0,
            error: Some(error),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Body length in bytes, 0 when the fetch failed
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Formats the report line: `<url> <size>` or `<url> error: <message>`.
impl fmt::Display for FetchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => write!(f, "{} {}", self.url, self.size),
            Some(err) => write!(f, "{} error: {}", self.url, err),
        }
    }
}
