use crate::{FetchResult, Transport};

/// Fetches `url` once and turns the outcome into a [`FetchResult`].
///
/// Never fails: transport and body-read errors end up in the result, with the
/// url echoed back unchanged and a size of 0.
pub async fn fetch<T>(transport: &T, url: &str) -> FetchResult
where
    T: Transport + ?Sized,
{
    match transport.get(url).await {
        Ok(body) => {
            tracing::debug!(url, size = body.len(), "fetched");
            FetchResult::ok(url, body.len())
        }
        Err(err) => {
            tracing::warn!(url, error = %err, "fetch failed");
            FetchResult::failed(url, err)
        }
    }
}
