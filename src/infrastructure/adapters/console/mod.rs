//! Console adapter for development/testing

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::application::errors::LendingError;
use crate::application::messaging::{CommandDispatcher, CommandRequest};
use crate::domain::entities::{Reply, Visibility};

/// Runs slash commands typed on stdin as a fixed user
pub struct ConsoleAdapter {
    dispatcher: Arc<CommandDispatcher>,
    user_name: String,
}

impl ConsoleAdapter {
    pub fn new(dispatcher: Arc<CommandDispatcher>, user_name: impl Into<String>) -> Self {
        Self {
            dispatcher,
            user_name: user_name.into(),
        }
    }

    /// Handle one line as if it had been posted to the webhook
    pub fn handle_line(&self, line: &str) -> Result<Reply, LendingError> {
        let request = CommandRequest::new(self.dispatcher.token(), self.user_name.as_str(), line);
        self.dispatcher.dispatch(&request)
    }

    fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Read commands until EOF or `quit`
    pub fn run(&self) -> Result<(), LendingError> {
        tracing::info!("Starting console (dev mode) as {}", self.user_name);
        let stdin = io::stdin();
        let mut input = stdin.lock();

        while let Some(line) = Self::read_line(&mut input, "> ") {
            if line.is_empty() {
                continue;
            }
            if line == "quit" || line == "exit" {
                break;
            }

            match self.handle_line(&line) {
                Ok(reply) => println!("{}", format_reply(&reply)),
                Err(e) => println!("[ERROR] {}", e),
            }
        }
        Ok(())
    }
}

fn format_reply(reply: &Reply) -> String {
    let tag = match reply.response_type {
        Visibility::InChannel => "[CHANNEL]",
        Visibility::Ephemeral => "[PRIVATE]",
    };
    format!("{} {}", tag, reply.text)
}
