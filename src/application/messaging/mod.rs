//! Command handling - Slash command parsing, dispatch and reply rendering

pub mod dispatcher;
pub mod parser;
pub mod render;

pub use dispatcher::{CommandDispatcher, CommandRequest};
pub use parser::CommandParser;
