//! `jellyweb detach` – detach a profile from a channel after confirmation.

use anyhow::Result;
use jellyweb_core::actions::{on_detach_click, DetachOutcome, DetachTarget};
use jellyweb_core::collab::Confirm;
use jellyweb_core::config::JellyWebConfig;
use jellyweb_core::http::{CurlPoster, FormChannelApi};

use crate::cli::console::{AssumeYes, ConsoleNavigator, StdinConfirm};

pub fn run_detach(
    cfg: &JellyWebConfig,
    profile_owner_id: &str,
    channel_owner_id: &str,
    profile_name: &str,
    yes: bool,
    csrf: Option<&str>,
) -> Result<()> {
    let api = FormChannelApi::from_config(CurlPoster::new(&cfg.http()), cfg, csrf)?;
    let target = DetachTarget {
        profile_owner_id: profile_owner_id.to_string(),
        channel_owner_id: channel_owner_id.to_string(),
        profile_name: profile_name.to_string(),
    };
    let mut confirm: Box<dyn Confirm> = if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    };
    let mut nav = ConsoleNavigator::at(&cfg.base_url);

    match on_detach_click(
        &target,
        &cfg.detach_confirm_template,
        confirm.as_mut(),
        &api,
        &mut nav,
    )? {
        DetachOutcome::Declined => println!("Cancelled."),
        DetachOutcome::Detached => println!("Detached profile {profile_name}"),
    }
    Ok(())
}
