//! `jellyweb sign-in` – post an ID token the way the login page does.

use anyhow::Result;
use jellyweb_core::config::JellyWebConfig;
use jellyweb_core::http::CurlPoster;
use jellyweb_core::signin::{on_sign_in, SignInOutcome, SignInRequest};

use super::default_redirect;
use crate::cli::console::ConsoleNavigator;

pub fn run_sign_in(
    cfg: &JellyWebConfig,
    page_url: &str,
    token: &str,
    csrf: &str,
    default: Option<&str>,
) -> Result<()> {
    let poster = CurlPoster::new(&cfg.http());
    let mut nav = ConsoleNavigator::at(page_url);
    let request = SignInRequest {
        id_token: token,
        default_redirect: default_redirect(cfg, default),
        csrf_token: csrf,
    };

    match on_sign_in(&request, &cfg.sign_in_settings(), &poster, &mut nav)? {
        SignInOutcome::Redirect(_) => {}
        SignInOutcome::Alert { level, message } => {
            anyhow::bail!("sign-in rejected ({:?}): {}", level, message);
        }
    }
    Ok(())
}
