//! `jellyweb param <url> <name>` – look up one query parameter.

use jellyweb_core::config::JellyWebConfig;
use jellyweb_core::query::get_query_parameter_with;

use super::lookup_mode;

/// Printed when the name occurs in the URL but is not bound to a value.
const UNBOUND: &str = "<unbound>";

pub fn run_param(cfg: &JellyWebConfig, url: &str, name: &str, default: &str, structural: bool) {
    println!("{}", param_value(cfg, url, name, default, structural));
}

/// The line `param` prints: the bound value, the default, or [`UNBOUND`].
pub(crate) fn param_value(
    cfg: &JellyWebConfig,
    url: &str,
    name: &str,
    default: &str,
    structural: bool,
) -> String {
    let mode = lookup_mode(cfg, structural);
    get_query_parameter_with(mode, url, name, default).unwrap_or_else(|| {
        tracing::debug!(url, name, "name present in URL but not bound");
        UNBOUND.to_string()
    })
}
