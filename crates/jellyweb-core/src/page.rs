//! Explicit page initialization and click dispatch.
//!
//! The host calls [`PageHost::init`] once with every control it wants wired
//! up, each paired with a typed [`Action`]. Clicks are then routed through
//! [`Page::click`] with the collaborators for that click.

use std::collections::HashMap;
use std::fmt;

use crate::actions::{
    on_detach_click, on_star_click, DetachOutcome, DetachTarget, StarButton, StarTarget,
};
use crate::collab::{ChannelApi, Confirm, Navigator, SignInLauncher};
use crate::error::PageError;

/// Identifier of a bound UI control (e.g. the element id).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControlId(String);

impl ControlId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a control does when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Star button; `active` is its state when the page was rendered.
    ToggleStar { target: StarTarget, active: bool },
    /// Detach button.
    Detach(DetachTarget),
    /// "Sign in with Google" button.
    LaunchSignIn,
}

/// One control and its action.
#[derive(Debug, Clone)]
pub struct Binding {
    pub control: ControlId,
    pub action: Action,
}

impl Binding {
    pub fn new(control: impl Into<String>, action: Action) -> Self {
        Self {
            control: ControlId::new(control),
            action,
        }
    }
}

/// Collaborators available while handling one click.
pub struct PageContext<'a> {
    pub api: &'a dyn ChannelApi,
    pub confirm: &'a mut dyn Confirm,
    pub nav: &'a mut dyn Navigator,
    pub launcher: &'a mut dyn SignInLauncher,
    /// Detach prompt template with a `{name}` placeholder.
    pub detach_confirm_template: &'a str,
}

/// Result of a dispatched click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Starred { channel_id: String, active: bool },
    Detach(DetachOutcome),
    SignInLaunched,
}

#[derive(Debug)]
enum BoundControl {
    Star(StarButton),
    Detach(DetachTarget),
    LaunchSignIn,
}

/// Controls bound to their actions, plus per-button star state.
#[derive(Debug)]
pub struct Page {
    controls: HashMap<ControlId, BoundControl>,
}

impl Page {
    fn bind(bindings: impl IntoIterator<Item = Binding>) -> Result<Self, PageError> {
        let mut controls = HashMap::new();
        for Binding { control, action } in bindings {
            if controls.contains_key(&control) {
                return Err(PageError::DuplicateControl(control));
            }
            let bound = match action {
                Action::ToggleStar { target, active } => {
                    BoundControl::Star(StarButton { target, active })
                }
                Action::Detach(target) => BoundControl::Detach(target),
                Action::LaunchSignIn => BoundControl::LaunchSignIn,
            };
            controls.insert(control, bound);
        }
        tracing::debug!(controls = controls.len(), "page controls bound");
        Ok(Self { controls })
    }

    /// Runs the action bound to `control`.
    pub fn click(
        &mut self,
        control: &ControlId,
        ctx: &mut PageContext<'_>,
    ) -> Result<ClickOutcome, PageError> {
        let bound = self
            .controls
            .get_mut(control)
            .ok_or_else(|| PageError::UnknownControl(control.clone()))?;
        tracing::debug!(control = %control, "click");

        match bound {
            BoundControl::Star(button) => {
                let active = on_star_click(button, ctx.api)?;
                Ok(ClickOutcome::Starred {
                    channel_id: button.target.channel_id.clone(),
                    active,
                })
            }
            BoundControl::Detach(target) => {
                let outcome = on_detach_click(
                    target,
                    ctx.detach_confirm_template,
                    &mut *ctx.confirm,
                    ctx.api,
                    &mut *ctx.nav,
                )?;
                Ok(ClickOutcome::Detach(outcome))
            }
            BoundControl::LaunchSignIn => {
                ctx.launcher.launch();
                Ok(ClickOutcome::SignInLaunched)
            }
        }
    }

    /// Current state of a star button, or `None` if `control` is not one.
    pub fn is_starred(&self, control: &ControlId) -> Option<bool> {
        match self.controls.get(control) {
            Some(BoundControl::Star(button)) => Some(button.active),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

/// Owner of the page; initialized at most once.
#[derive(Debug, Default)]
pub struct PageHost {
    page: Option<Page>,
}

impl PageHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `bindings` and returns the page. A second call fails with
    /// [`PageError::AlreadyInitialized`] and leaves the first page intact.
    pub fn init(
        &mut self,
        bindings: impl IntoIterator<Item = Binding>,
    ) -> Result<&mut Page, PageError> {
        if self.page.is_some() {
            return Err(PageError::AlreadyInitialized);
        }
        Ok(self.page.insert(Page::bind(bindings)?))
    }

    pub fn page(&mut self) -> Option<&mut Page> {
        self.page.as_mut()
    }
}
