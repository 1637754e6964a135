//! Lendable items and their holder state

use std::fmt;

/// A lendable piece of equipment and whoever currently has it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub category: String,
    pub name: String,
    pub holder: Option<String>,
}

/// Lending state of a single item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemState<'a> {
    Unheld,
    Held(&'a str),
}

impl Item {
    pub fn new(id: i64, category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            category: category.into(),
            name: name.into(),
            holder: None,
        }
    }

    pub fn with_holder(mut self, holder: impl Into<String>) -> Self {
        self.holder = Some(holder.into());
        self
    }

    pub fn is_available(&self) -> bool {
        self.holder.is_none()
    }

    pub fn is_held_by(&self, person: &str) -> bool {
        self.holder.as_deref() == Some(person)
    }

    pub fn state(&self) -> ItemState<'_> {
        match self.holder.as_deref() {
            Some(holder) => ItemState::Held(holder),
            None => ItemState::Unheld,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
