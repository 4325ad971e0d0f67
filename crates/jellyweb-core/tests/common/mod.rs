#![allow(dead_code)]

pub mod form_server;
