//! Channel list actions: star toggling and profile detaching.
//!
//! Each handler receives a typed payload fixed when the control was bound,
//! never reads attributes off the clicked element.

use crate::collab::{ChannelApi, Confirm, Navigator};
use crate::error::ActionError;

/// Confirmation text shown before detaching; `{name}` is the profile name.
pub const DEFAULT_DETACH_CONFIRM_TEMPLATE: &str =
    "Are you sure to detach the profile \"{name}\" from this channel?";

/// Channel a star button toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarTarget {
    pub channel_id: String,
}

/// Profile/channel pair a detach button acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetachTarget {
    pub profile_owner_id: String,
    pub channel_owner_id: String,
    /// Display name used in the confirmation prompt.
    pub profile_name: String,
}

/// A star button and whether it is currently active (starred).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarButton {
    pub target: StarTarget,
    pub active: bool,
}

impl StarButton {
    pub fn new(channel_id: impl Into<String>, active: bool) -> Self {
        Self {
            target: StarTarget {
                channel_id: channel_id.into(),
            },
            active,
        }
    }
}

/// What happened after a detach click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetachOutcome {
    /// User declined; no request was made.
    Declined,
    /// Profile detached and the page reloaded.
    Detached,
}

/// Toggles `button` and sends the new star state for its channel.
///
/// The toggle happens before the request and is not rolled back if the
/// request fails. Returns the new state.
pub fn on_star_click<A>(button: &mut StarButton, api: &A) -> Result<bool, ActionError>
where
    A: ChannelApi + ?Sized,
{
    button.active = !button.active;
    tracing::debug!(
        channel_id = %button.target.channel_id,
        active = button.active,
        "star toggled"
    );
    api.change_star(&button.target.channel_id, button.active)?;
    Ok(button.active)
}

/// Renders the detach confirmation prompt for `profile_name`.
pub fn detach_confirm_message(template: &str, profile_name: &str) -> String {
    template.replace("{name}", profile_name)
}

/// Asks for confirmation, detaches the profile, then reloads the page.
///
/// Nothing is sent when the user declines. The page is reloaded only after
/// the detach request succeeds.
pub fn on_detach_click<C, A, N>(
    target: &DetachTarget,
    confirm_template: &str,
    confirm: &mut C,
    api: &A,
    nav: &mut N,
) -> Result<DetachOutcome, ActionError>
where
    C: Confirm + ?Sized,
    A: ChannelApi + ?Sized,
    N: Navigator + ?Sized,
{
    let message = detach_confirm_message(confirm_template, &target.profile_name);
    if !confirm.confirm(&message) {
        tracing::debug!(profile = %target.profile_name, "detach declined");
        return Ok(DetachOutcome::Declined);
    }

    api.detach_profile(&target.profile_owner_id, &target.channel_owner_id)?;
    tracing::info!(
        profile_owner_id = %target.profile_owner_id,
        channel_owner_id = %target.channel_owner_id,
        "profile detached"
    );
    nav.reload();
    Ok(DetachOutcome::Detached)
}
