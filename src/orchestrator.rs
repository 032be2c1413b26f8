use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinHandle;

use crate::{fetch, FetchConfig, FetchError, FetchResult, Transport};

/// Fetches every url concurrently and returns the results sorted by size.
///
/// One task is spawned per url. Results are funneled through a single channel
/// and the channel only closes once every task has finished, so the returned
/// vector always holds exactly one entry per input url. The sort is stable:
/// entries of equal size keep the order in which they arrived.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use fetch_sizes::{run, Fetch, FetchConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), fetch_sizes::FetchError> {
///     let transport = Arc::new(Fetch::new(None)?);
///     let results = run(transport, Vec::new(), &FetchConfig::default()).await;
///     assert!(results.is_empty());
///     Ok(())
/// }
/// ```
pub async fn run<T>(transport: Arc<T>, urls: Vec<String>, config: &FetchConfig) -> Vec<FetchResult>
where
    T: Transport + ?Sized + 'static,
{
    let expected = urls.len();
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchResult>();
    let limit = config.concurrency_limit().map(|n| Arc::new(Semaphore::new(n)));

    let units: Vec<(String, JoinHandle<()>)> = urls
        .into_iter()
        .map(|url| {
            let handle = tokio::spawn(fetch_unit(
                Arc::clone(&transport),
                url.clone(),
                limit.clone(),
                tx.clone(),
            ));
            (url, handle)
        })
        .collect();
    tracing::debug!(units = expected, limit = ?config.concurrency_limit(), "dispatched");

    // Holds the last sender: the channel closes when this task is done.
    let coordinator = tokio::spawn(async move {
        for (url, handle) in units {
            if let Err(err) = handle.await {
                tracing::error!(url, error = %err, "fetch task did not complete");
                let _ = tx.send(FetchResult::failed(url, FetchError::Aborted(err.to_string())));
            }
        }
    });

    let mut results = Vec::with_capacity(expected);
    while let Some(result) = rx.recv().await {
        results.push(result);
    }
    if let Err(err) = coordinator.await {
        tracing::error!(error = %err, "coordinator task failed");
    }
    debug_assert_eq!(expected, results.len());

    results.sort_by_key(FetchResult::size);
    tracing::info!(
        urls = expected,
        failed = results.iter().filter(|r| !r.is_ok()).count(),
        "all fetches finished"
    );
    results
}

async fn fetch_unit<T>(
    transport: Arc<T>,
    url: String,
    limit: Option<Arc<Semaphore>>,
    tx: mpsc::UnboundedSender<FetchResult>,
) where
    T: Transport + ?Sized,
{
    // The semaphore is never closed, so acquiring only waits.
    let _permit = match limit {
        Some(limit) => limit.acquire_owned().await.ok(),
        None => None,
    };
    let result = fetch(transport.as_ref(), &url).await;
    // Only fails when the caller stopped waiting for results.
    let _ = tx.send(result);
}
