use tokio::sync::Semaphore;

use crate::FetchHeaders;

pub const MAX_CONCURRENCY_ENV: &str = "FETCH_SIZES_MAX_CONCURRENCY";

#[derive(Default, Debug, Clone)]
pub struct FetchConfig {
    /// Extra headers sent with every request, on top of the user agent
    pub headers: Option<FetchHeaders>,
    /// Upper bound on in-flight fetches. `None` starts every fetch at once
    pub max_concurrency: Option<usize>,
}

impl FetchConfig {
    /// Builds a config from the process environment.
    ///
    /// `FETCH_SIZES_MAX_CONCURRENCY` must be an integer between 1 and
    /// `Semaphore::MAX_PERMITS`; anything else is ignored and fetches stay
    /// unbounded.
    pub fn from_env() -> Self {
        Self {
            max_concurrency: std::env::var(MAX_CONCURRENCY_ENV)
                .ok()
                .and_then(|raw| parse_max_concurrency(&raw)),
            ..Default::default()
        }
    }

    /// The usable cap on in-flight fetches.
    ///
    /// A limit of 0 would never let a fetch start and is treated as no limit;
    /// larger values than a semaphore can hold are clamped.
    pub fn concurrency_limit(&self) -> Option<usize> {
        self.max_concurrency
            .filter(|&limit| limit > 0)
            .map(|limit| limit.min(Semaphore::MAX_PERMITS))
    }
}

fn parse_max_concurrency(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(limit) if (1..=Semaphore::MAX_PERMITS).contains(&limit) => Some(limit),
        _ => {
            tracing::warn!(value = raw, "ignoring invalid {MAX_CONCURRENCY_ENV}");
            None
        }
    }
}
