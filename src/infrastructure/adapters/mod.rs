//! Platform adapters

pub mod console;
pub mod mattermost;

pub use console::ConsoleAdapter;
pub use mattermost::MattermostAdapter;
