use thiserror::Error;

/// Everything that can go wrong while fetching a single URL.
///
/// The variants only exist to keep the underlying source around; callers
/// report every variant the same way, through its `Display` text.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{err}")]
    UnableToSendRequest { err: reqwest::Error },
    #[error("{err}")]
    UnableToReadBody { err: reqwest::Error },
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("fetch task aborted: {0}")]
    Aborted(String),
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}
