//! Channel list endpoints as form POSTs.

use url::form_urlencoded;
use url::Url;

use crate::collab::{ChannelApi, HttpPost, PostOptions};
use crate::config::JellyWebConfig;
use crate::error::ActionError;

/// [`ChannelApi`] that POSTs `cid`/`star` and `poid`/`coid` forms to
/// endpoints resolved against a base URL.
pub struct FormChannelApi<P> {
    poster: P,
    star_url: String,
    detach_url: String,
    options: PostOptions,
}

impl<P: HttpPost> FormChannelApi<P> {
    /// Resolves `star_path` and `detach_path` against `base_url`.
    pub fn new(
        poster: P,
        base_url: &str,
        star_path: &str,
        detach_path: &str,
        options: PostOptions,
    ) -> Result<Self, ActionError> {
        let base = Url::parse(base_url).map_err(|source| ActionError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        let join = |path: &str| {
            base.join(path)
                .map(String::from)
                .map_err(|source| ActionError::InvalidUrl {
                    url: path.to_string(),
                    source,
                })
        };
        Ok(Self {
            star_url: join(star_path)?,
            detach_url: join(detach_path)?,
            poster,
            options,
        })
    }

    /// Builds the API from configuration; `csrf_token` goes into the configured header.
    pub fn from_config(
        poster: P,
        cfg: &JellyWebConfig,
        csrf_token: Option<&str>,
    ) -> Result<Self, ActionError> {
        let options = match csrf_token {
            Some(token) => PostOptions::new().header(cfg.csrf_header.as_str(), token),
            None => PostOptions::new(),
        };
        Self::new(poster, &cfg.base_url, &cfg.star_path, &cfg.detach_path, options)
    }

    pub fn star_url(&self) -> &str {
        &self.star_url
    }

    pub fn detach_url(&self) -> &str {
        &self.detach_url
    }

    fn send(&self, url: &str, form: &[(&str, &str)]) -> Result<(), ActionError> {
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(form)
            .finish();
        let response = self.poster.post(url, &body, &self.options)?;
        tracing::debug!(url, response = %response, "channel action sent");
        Ok(())
    }
}

impl<P: HttpPost> ChannelApi for FormChannelApi<P> {
    fn change_star(&self, channel_id: &str, star: bool) -> Result<(), ActionError> {
        let star = if star { "true" } else { "false" };
        self.send(&self.star_url, &[("cid", channel_id), ("star", star)])
    }

    fn detach_profile(
        &self,
        profile_owner_id: &str,
        channel_owner_id: &str,
    ) -> Result<(), ActionError> {
        self.send(
            &self.detach_url,
            &[("poid", profile_owner_id), ("coid", channel_owner_id)],
        )
    }
}
