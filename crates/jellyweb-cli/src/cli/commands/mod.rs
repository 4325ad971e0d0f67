//! CLI command handlers, one file per command.

mod completions;
mod detach;
mod param;
mod params;
mod redirect;
mod sign_in;
mod star;

pub use completions::{run_completions, run_man};
pub use detach::run_detach;
pub use param::run_param;
pub use params::run_params;
pub use redirect::run_redirect;
pub use sign_in::run_sign_in;
pub use star::run_star;

use jellyweb_core::config::JellyWebConfig;
use jellyweb_core::query::LookupMode;

/// `--structural` forces structural lookup; otherwise the configured mode applies.
pub(crate) fn lookup_mode(cfg: &JellyWebConfig, structural: bool) -> LookupMode {
    if structural {
        LookupMode::Structural
    } else {
        cfg.lookup_mode
    }
}

/// `--default` when given, else the configured `default_redirect`.
pub(crate) fn default_redirect<'a>(
    cfg: &'a JellyWebConfig,
    default: Option<&'a str>,
) -> &'a str {
    default.unwrap_or(cfg.default_redirect.as_str())
}
