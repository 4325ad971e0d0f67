//! Form POSTs over libcurl.
//!
//! [`CurlPoster`] is the production [`HttpPost`]: one easy handle per request,
//! run in the calling thread. Redirects are followed and the final response
//! decides success. [`FormChannelApi`] builds the channel list
//! endpoints on top of any poster.

mod channel_api;

pub use channel_api::FormChannelApi;

use std::time::Duration;

use crate::collab::{HttpPost, PostOptions};
use crate::config::HttpConfig;
use crate::error::ActionError;

const FORM_CONTENT_TYPE: &str = "Content-Type: application/x-www-form-urlencoded; charset=UTF-8";

/// Blocking form POST client.
#[derive(Debug, Clone)]
pub struct CurlPoster {
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlPoster {
    pub fn new(cfg: &HttpConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }
}

impl Default for CurlPoster {
    fn default() -> Self {
        Self::new(&HttpConfig::default())
    }
}

impl HttpPost for CurlPoster {
    fn post(&self, url: &str, body: &str, options: &PostOptions) -> Result<String, ActionError> {
        let transport = |source: curl::Error| ActionError::Transport {
            url: url.to_string(),
            source,
        };

        let mut response: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(transport)?;
        easy.post(true).map_err(transport)?;
        easy.post_fields_copy(body.as_bytes()).map_err(transport)?;
        // A 301/302/303 turns the follow-up into a GET, as browsers do.
        easy.follow_location(true).map_err(transport)?;
        easy.connect_timeout(self.connect_timeout).map_err(transport)?;
        easy.timeout(self.timeout).map_err(transport)?;

        let mut list = curl::easy::List::new();
        list.append(FORM_CONTENT_TYPE).map_err(transport)?;
        for (name, value) in &options.headers {
            list.append(&format!("{}: {}", name.trim(), value.trim()))
                .map_err(transport)?;
        }
        easy.http_headers(list).map_err(transport)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    response.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(transport)?;
            transfer.perform().map_err(transport)?;
        }

        let status = easy.response_code().map_err(transport)?;
        tracing::debug!(url, status, bytes = response.len(), "POST finished");
        if !(200..300).contains(&status) {
            return Err(ActionError::Http {
                url: url.to_string(),
                status,
            });
        }

        String::from_utf8(response).map_err(|_| ActionError::Body {
            url: url.to_string(),
        })
    }
}
