//! Equipment lending tracker driven by chat slash commands

pub mod domain;
pub mod application;
pub mod infrastructure;
