//! `jellyweb star <channel-id>` – star or unstar a channel.

use anyhow::Result;
use jellyweb_core::actions::{on_star_click, StarButton};
use jellyweb_core::config::JellyWebConfig;
use jellyweb_core::http::{CurlPoster, FormChannelApi};

pub fn run_star(
    cfg: &JellyWebConfig,
    channel_id: &str,
    star: bool,
    csrf: Option<&str>,
) -> Result<()> {
    let api = FormChannelApi::from_config(CurlPoster::new(&cfg.http()), cfg, csrf)?;
    // One click flips the button into the requested state.
    let mut button = StarButton::new(channel_id, !star);
    let active = on_star_click(&mut button, &api)?;
    if active {
        println!("Starred channel {channel_id}");
    } else {
        println!("Unstarred channel {channel_id}");
    }
    Ok(())
}
