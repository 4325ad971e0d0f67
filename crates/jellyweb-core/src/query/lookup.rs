//! Single-parameter lookup with a fallback value.

use serde::{Deserialize, Serialize};

use super::scan::QueryPairs;

/// How [`get_query_parameter_with`] decides whether a parameter is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    /// Parse only if `name` occurs anywhere in the URL as a substring.
    ///
    /// A name that shows up in the path or inside another parameter passes
    /// the check without being bound, and the lookup then yields `None`
    /// instead of the fallback. Existing login pages rely on this.
    #[default]
    Substring,
    /// Look the name up among the parsed keys; unbound names get the fallback.
    Structural,
}

/// Returns the value of `name` in `url`, or `fallback`.
///
/// Uses [`LookupMode::Substring`]: when `name` is not a substring of `url`
/// the fallback comes back unchanged; when it is, the structural value is
/// returned, which is `None` if no `name=` pair exists.
pub fn get_query_parameter(url: &str, name: &str, fallback: &str) -> Option<String> {
    get_query_parameter_with(LookupMode::Substring, url, name, fallback)
}

/// Like [`get_query_parameter`] with an explicit [`LookupMode`].
pub fn get_query_parameter_with(
    mode: LookupMode,
    url: &str,
    name: &str,
    fallback: &str,
) -> Option<String> {
    match mode {
        LookupMode::Substring => {
            if !url.contains(name) {
                return Some(fallback.to_string());
            }
            bound_value(url, name)
        }
        LookupMode::Structural => {
            Some(bound_value(url, name).unwrap_or_else(|| fallback.to_string()))
        }
    }
}

/// Last value bound to `name`, matching the overwrite rule of the full map.
fn bound_value(url: &str, name: &str) -> Option<String> {
    QueryPairs::new(url)
        .filter(|(key, _)| *key == name)
        .last()
        .map(|(_, value)| value.to_string())
}
