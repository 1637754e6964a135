//! Command dispatcher - Routes slash commands to the inventory service

use std::sync::Arc;

use super::parser::CommandParser;
use super::render;
use crate::application::errors::LendingError;
use crate::application::services::InventoryService;
use crate::domain::entities::{normalize_category, Category, LendingCommand, Reply};
use crate::domain::traits::StoreFactory;

/// An incoming slash command
#[derive(Debug, Clone)]
pub struct CommandRequest {
    pub token: String,
    pub user_name: String,
    pub text: String,
}

impl CommandRequest {
    pub fn new(token: impl Into<String>, user_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_name: user_name.into(),
            text: text.into(),
        }
    }
}

/// Checks the shared token, parses the command and runs it.
///
/// A store handle is opened only for commands that reach the inventory and
/// is dropped before `dispatch` returns.
pub struct CommandDispatcher {
    token: String,
    parser: CommandParser,
    stores: Arc<dyn StoreFactory>,
}

impl CommandDispatcher {
    pub fn new(token: impl Into<String>, stores: Arc<dyn StoreFactory>) -> Self {
        Self {
            token: token.into(),
            parser: CommandParser::new(),
            stores,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn dispatch(&self, request: &CommandRequest) -> Result<Reply, LendingError> {
        if request.token != self.token {
            return Err(LendingError::Unauthorized("token mismatch".to_string()));
        }

        let command = self.parser.parse(&request.text);
        tracing::debug!(command = command.name(), user = %request.user_name, "Parsed command");

        let category = match command.category() {
            Some(raw) => match normalize_category(raw) {
                Some(category) => Some(category),
                None => {
                    tracing::debug!(category = raw, "Unknown item type");
                    return Ok(render::unknown_category(raw));
                }
            },
            None => None,
        };

        self.run(command, category, &request.user_name)
    }

    fn run(
        &self,
        command: LendingCommand,
        category: Option<Category>,
        user_name: &str,
    ) -> Result<Reply, LendingError> {
        if matches!(command, LendingCommand::Help) {
            return Ok(render::help());
        }

        let mut store = self.stores.open()?;
        let mut service = InventoryService::new(store.as_mut());

        let outcome = match (command, category) {
            (LendingCommand::Status, _) => service.status()?,
            (LendingCommand::Rent { person, .. }, Some(category)) => {
                let requester = person.as_deref().unwrap_or(user_name);
                service.rent(requester, category)?
            }
            (LendingCommand::Return { person, .. }, Some(category)) => {
                let requester = person.as_deref().unwrap_or(user_name);
                service.return_item(requester, category)?
            }
            (LendingCommand::Transfer { from, to, .. }, Some(category)) => {
                service.transfer(&from, &to, category)?
            }
            (command, _) => {
                return Err(LendingError::Internal(format!(
                    "{} reached the store without a category",
                    command.name()
                )))
            }
        };

        if outcome.is_mutation() {
            tracing::info!(user = user_name, "Inventory changed");
        } else {
            tracing::debug!(user = user_name, "Inventory unchanged");
        }

        Ok(render::render(&outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Visibility;
    use crate::domain::traits::InventoryStore;
    use crate::infrastructure::storage::MemoryStore;

    const TOKEN: &str = "secret";

    fn setup() -> (MemoryStore, CommandDispatcher) {
        let store = MemoryStore::new();
        let mut handle = store.clone();
        handle.insert_item("umbrella", "U1").unwrap();
        handle.insert_item("umbrella", "U2").unwrap();
        let dispatcher = CommandDispatcher::new(TOKEN, Arc::new(store.clone()));
        (store, dispatcher)
    }

    fn send(dispatcher: &CommandDispatcher, user: &str, text: &str) -> Reply {
        dispatcher
            .dispatch(&CommandRequest::new(TOKEN, user, text))
            .expect("dispatch")
    }

    #[test]
    fn wrong_token_is_rejected_before_anything_runs() {
        let (store, dispatcher) = setup();
        let result = dispatcher.dispatch(&CommandRequest::new("nope", "alice", "rent umbrella"));
        assert!(matches!(result, Err(LendingError::Unauthorized(_))));
        assert!(store.snapshot().iter().all(|item| item.is_available()));
    }

    #[test]
    fn rent_defaults_to_invoking_user() {
        let (store, dispatcher) = setup();
        let reply = send(&dispatcher, "alice", "대여 우산");
        assert_eq!(reply.response_type, Visibility::InChannel);
        assert!(store.snapshot().iter().any(|item| item.is_held_by("alice")));
    }

    #[test]
    fn explicit_name_overrides_invoking_user() {
        let (store, dispatcher) = setup();
        send(&dispatcher, "alice", "rent umbrella 홍길동");
        assert!(store.snapshot().iter().any(|item| item.is_held_by("홍길동")));
        assert!(!store.snapshot().iter().any(|item| item.is_held_by("alice")));
    }

    #[test]
    fn unknown_category_changes_nothing() {
        let (store, dispatcher) = setup();
        let reply = send(&dispatcher, "alice", "rent foo");
        assert_eq!(reply.response_type, Visibility::Ephemeral);
        assert!(reply.text.contains("foo"));
        assert!(store.snapshot().iter().all(|item| item.is_available()));
    }

    #[test]
    fn unrecognized_text_gets_help() {
        let (_, dispatcher) = setup();
        let reply = send(&dispatcher, "alice", "what is this");
        assert_eq!(reply.text, render::HELP_TEXT);
        assert_eq!(reply.response_type, Visibility::Ephemeral);
    }

    #[test]
    fn status_is_broadcast() {
        let (_, dispatcher) = setup();
        let reply = send(&dispatcher, "alice", "현황");
        assert!(reply.is_broadcast());
        assert!(reply.text.contains("U1"));
        assert!(reply.text.contains("U2"));
    }

    #[test]
    fn transfer_uses_named_people_not_the_caller() {
        let (store, dispatcher) = setup();
        send(&dispatcher, "alice", "rent umbrella");
        let reply = send(&dispatcher, "mallory", "전달 우산 alice bob");
        assert!(reply.is_broadcast());
        assert!(store.snapshot().iter().any(|item| item.is_held_by("bob")));
    }
}
