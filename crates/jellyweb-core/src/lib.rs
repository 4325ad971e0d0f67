pub mod config;
pub mod logging;

pub mod actions;
pub mod collab;
pub mod error;
pub mod http;
pub mod page;
pub mod query;
pub mod signin;

#[cfg(test)]
pub(crate) mod fakes;
