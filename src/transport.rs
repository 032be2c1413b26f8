use async_trait::async_trait;
use bytes::Bytes;

use crate::FetchError;

/// A way of issuing a single GET request.
///
/// Implementations read the response body to completion and hand it back.
/// The status code is ignored: a 404 with a body is still a body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Bytes, FetchError>;
}
