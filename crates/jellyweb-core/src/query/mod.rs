//! Query-string parameters and redirect targets.
//!
//! Best-effort parsing of the `key=value` pairs in a URL, single-parameter
//! lookup with a fallback, and the `next`-or-default redirect rule used after
//! sign-in. Nothing here fails: malformed input degrades to an empty map or
//! the fallback.

mod lookup;
mod redirect;
mod scan;

use std::collections::HashMap;

pub use lookup::{get_query_parameter, get_query_parameter_with, LookupMode};
pub use redirect::{resolve_redirect_target, resolve_redirect_target_with, NEXT_PARAM};
pub use scan::QueryPairs;

/// Parses every `key=value` pair in `url` into a map.
///
/// Keys and values are kept verbatim (no percent or `+` decoding). When a
/// key repeats, the last occurrence wins. A URL without a query yields an
/// empty map.
///
/// # Examples
///
/// - `parse_query_parameters("http://x/?a=1&b=2")` → `{a: "1", b: "2"}`
/// - `parse_query_parameters("?a=1&a=2")` → `{a: "2"}`
/// - `parse_query_parameters("?a=")` → `{a: ""}`
pub fn parse_query_parameters(url: &str) -> HashMap<String, String> {
    QueryPairs::new(url)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
