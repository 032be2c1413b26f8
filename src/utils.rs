use anyhow::anyhow;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::{FetchError, FetchHeaders};

pub(crate) fn map_to_reqwest_headers(headers: &FetchHeaders) -> Result<HeaderMap, FetchError> {
    let mut header_map = HeaderMap::with_capacity(headers.len());
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|e| FetchError::Unknown(anyhow!("invalid header name {key}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| FetchError::Unknown(anyhow!("invalid value for header {key}: {e}")))?;
        header_map.insert(name, value);
    }
    Ok(header_map)
}

/// Creates a `HashMap<String, String>` from `key : "value"` pairs.
///
/// # Example
/// ```rust
/// use fetch_sizes::map_string;
///
/// let headers = map_string! { accept : "*/*" };
/// assert_eq!("*/*", headers.get("accept").unwrap());
/// ```
#[macro_export]
macro_rules! map_string {
    ($($key:ident : $value:expr),* $(,)?) => {{
        let mut map: ::std::collections::HashMap<String, String> = ::std::collections::HashMap::new();
        $(
            map.insert(stringify!($key).to_string(), $value.to_string());
        )*
        map
    }};
}

#[cfg(test)]
mod tests {
    use super::map_to_reqwest_headers;

    #[test]
    fn converts_headers() {
        let headers = map_to_reqwest_headers(&map_string! { accept : "*/*" }).unwrap();
        assert_eq!("*/*", headers.get("accept").unwrap());
    }

    #[test]
    fn rejects_bad_header_names() {
        let mut headers = crate::FetchHeaders::new();
        headers.insert("bad header".to_string(), "x".to_string());
        assert!(map_to_reqwest_headers(&headers).is_err());
    }
}
