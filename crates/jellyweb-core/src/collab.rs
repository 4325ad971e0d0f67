//! Collaborator interfaces the page actions depend on.
//!
//! The actions never touch a browser or a socket directly. Hosts plug in
//! implementations: [`crate::http::CurlPoster`] and
//! [`crate::http::FormChannelApi`] for real requests, console or test
//! doubles for the rest.

use crate::error::ActionError;

/// Extra request settings applied before a POST is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostOptions {
    /// Headers as `(name, value)`, e.g. the anti-forgery token header.
    pub headers: Vec<(String, String)>,
}

impl PostOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Performs a form POST and returns the raw response body.
pub trait HttpPost {
    fn post(&self, url: &str, body: &str, options: &PostOptions) -> Result<String, ActionError>;
}

/// Yes/no prompt gating a destructive action.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

/// The page's location and navigation.
pub trait Navigator {
    /// Full URL of the current page, query string included.
    fn current_location(&self) -> String;
    /// Navigate to `url`, replacing the current history entry.
    fn replace(&mut self, url: &str);
    fn reload(&mut self);
}

/// Starts the third-party sign-in; its callback lands in [`crate::signin::on_sign_in`].
pub trait SignInLauncher {
    fn launch(&mut self);
}

/// Server endpoints for channel list actions.
pub trait ChannelApi {
    fn change_star(&self, channel_id: &str, star: bool) -> Result<(), ActionError>;
    fn detach_profile(&self, profile_owner_id: &str, channel_owner_id: &str)
        -> Result<(), ActionError>;
}
