//! `jellyweb redirect <url>` – resolve the post-login redirect target.

use jellyweb_core::config::JellyWebConfig;
use jellyweb_core::query::resolve_redirect_target_with;

use super::{default_redirect, lookup_mode};

pub fn run_redirect(cfg: &JellyWebConfig, url: &str, default: Option<&str>, structural: bool) {
    println!("{}", redirect_target(cfg, url, default, structural));
}

pub(crate) fn redirect_target(
    cfg: &JellyWebConfig,
    url: &str,
    default: Option<&str>,
    structural: bool,
) -> String {
    let mode = lookup_mode(cfg, structural);
    resolve_redirect_target_with(mode, url, default_redirect(cfg, default))
}
