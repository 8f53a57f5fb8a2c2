//! Query string construction.

use std::fmt::Display;

/// Build a URL-encoded query string from `(name, value)` pairs.
///
/// Pairs whose value is `None` or renders to an empty string are omitted.
/// Every other value, including `0` and `false`, is kept and stringified.
/// Order is preserved.
#[must_use]
pub fn build_query<'a, I, V>(params: I) -> String
where
    I: IntoIterator<Item = (&'a str, Option<V>)>,
    V: Display,
{
    params
        .into_iter()
        .filter_map(|(name, value)| {
            let value = value?.to_string();
            (!value.is_empty()).then(|| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(&value)
                )
            })
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Join a base URL, an API path, and a query string.
#[must_use]
pub fn endpoint(base: &str, path: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{base}{path}")
    } else {
        format!("{base}{path}?{query}")
    }
}
