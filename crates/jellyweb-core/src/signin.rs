//! Third-party sign-in callback.
//!
//! The identity provider hands back an ID token; it is POSTed to the current
//! page as `idtoken=<token>` with the anti-forgery header attached. The server
//! answers `PASS` on success, or a human-readable reason otherwise.

use crate::collab::{HttpPost, Navigator, PostOptions};
use crate::error::ActionError;
use crate::query::{resolve_redirect_target_with, LookupMode};

/// Response body the server sends when the token was accepted.
pub const LOGIN_PASS: &str = "PASS";

/// Header carrying the anti-forgery token unless configured otherwise.
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

/// Severity of an alert shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Danger,
}

/// Result of handling the sign-in callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Token accepted; the page navigated here.
    Redirect(String),
    /// Token rejected; show `message` to the user.
    Alert { level: AlertLevel, message: String },
}

/// Inputs of one sign-in callback.
#[derive(Debug, Clone)]
pub struct SignInRequest<'a> {
    pub id_token: &'a str,
    /// Where to go when the page URL has no usable `next`.
    pub default_redirect: &'a str,
    /// Anti-forgery token from the page form.
    pub csrf_token: &'a str,
}

/// Settings that normally come from [`crate::config::JellyWebConfig`].
#[derive(Debug, Clone)]
pub struct SignInSettings {
    pub csrf_header: String,
    pub lookup_mode: LookupMode,
}

impl Default for SignInSettings {
    fn default() -> Self {
        Self {
            csrf_header: DEFAULT_CSRF_HEADER.to_string(),
            lookup_mode: LookupMode::default(),
        }
    }
}

/// Posts the ID token and navigates on success.
///
/// The token is placed in the body as-is; the provider issues URL-safe
/// tokens. Transport and non-2xx failures come back as `Err`; a 2xx with a
/// body other than `PASS` is an alert, not an error.
pub fn on_sign_in<P, N>(
    request: &SignInRequest<'_>,
    settings: &SignInSettings,
    poster: &P,
    nav: &mut N,
) -> Result<SignInOutcome, ActionError>
where
    P: HttpPost + ?Sized,
    N: Navigator + ?Sized,
{
    let location = nav.current_location();
    let body = format!("idtoken={}", request.id_token);
    let options = PostOptions::new().header(settings.csrf_header.as_str(), request.csrf_token);

    let response = poster.post(&location, &body, &options)?;

    if response == LOGIN_PASS {
        let target =
            resolve_redirect_target_with(settings.lookup_mode, &location, request.default_redirect);
        tracing::info!(target = %target, "sign-in accepted, redirecting");
        nav.replace(&target);
        Ok(SignInOutcome::Redirect(target))
    } else {
        tracing::warn!(reason = %response, "sign-in rejected");
        Ok(SignInOutcome::Alert {
            level: AlertLevel::Danger,
            message: response,
        })
    }
}
