//! Recording collaborator doubles shared by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::collab::{ChannelApi, Confirm, HttpPost, Navigator, PostOptions, SignInLauncher};
use crate::error::ActionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPost {
    pub url: String,
    pub body: String,
    pub options: PostOptions,
}

/// Answers each POST with the next queued body (or HTTP 500 when empty).
#[derive(Default)]
pub struct FakePoster {
    pub responses: RefCell<VecDeque<String>>,
    pub posts: RefCell<Vec<RecordedPost>>,
}

impl FakePoster {
    pub fn answering(body: &str) -> Self {
        let poster = Self::default();
        poster.responses.borrow_mut().push_back(body.to_string());
        poster
    }
}

impl HttpPost for FakePoster {
    fn post(&self, url: &str, body: &str, options: &PostOptions) -> Result<String, ActionError> {
        self.posts.borrow_mut().push(RecordedPost {
            url: url.to_string(),
            body: body.to_string(),
            options: options.clone(),
        });
        self.responses
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ActionError::Http {
                url: url.to_string(),
                status: 500,
            })
    }
}

pub struct FakeConfirm {
    pub answer: bool,
    pub prompts: Vec<String>,
}

impl FakeConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Vec::new(),
        }
    }
}

impl Confirm for FakeConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        self.prompts.push(message.to_string());
        self.answer
    }
}

#[derive(Default)]
pub struct FakeNavigator {
    pub location: String,
    pub replaced: Vec<String>,
    pub reloads: usize,
}

impl FakeNavigator {
    pub fn at(location: &str) -> Self {
        Self {
            location: location.to_string(),
            ..Self::default()
        }
    }
}

impl Navigator for FakeNavigator {
    fn current_location(&self) -> String {
        self.location.clone()
    }

    fn replace(&mut self, url: &str) {
        self.replaced.push(url.to_string());
    }

    fn reload(&mut self) {
        self.reloads += 1;
    }
}

#[derive(Default)]
pub struct FakeLauncher {
    pub launches: usize,
}

impl SignInLauncher for FakeLauncher {
    fn launch(&mut self) {
        self.launches += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Star { channel_id: String, star: bool },
    Detach { profile_owner_id: String, channel_owner_id: String },
}

#[derive(Default)]
pub struct FakeChannelApi {
    pub calls: RefCell<Vec<ApiCall>>,
    pub fail: bool,
}

impl FakeChannelApi {
    fn result(&self) -> Result<(), ActionError> {
        if self.fail {
            Err(ActionError::Http {
                url: "http://test/".to_string(),
                status: 500,
            })
        } else {
            Ok(())
        }
    }
}

impl ChannelApi for FakeChannelApi {
    fn change_star(&self, channel_id: &str, star: bool) -> Result<(), ActionError> {
        self.calls.borrow_mut().push(ApiCall::Star {
            channel_id: channel_id.to_string(),
            star,
        });
        self.result()
    }

    fn detach_profile(
        &self,
        profile_owner_id: &str,
        channel_owner_id: &str,
    ) -> Result<(), ActionError> {
        self.calls.borrow_mut().push(ApiCall::Detach {
            profile_owner_id: profile_owner_id.to_string(),
            channel_owner_id: channel_owner_id.to_string(),
        });
        self.result()
    }
}
