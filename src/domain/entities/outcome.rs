//! Inventory operation outcomes

use super::{Category, Item};

/// Result of an inventory operation.
///
/// Refusals are ordinary outcomes, not errors: they are reported back to
/// the user with the state left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Status(Vec<Item>),
    Rented {
        item: Item,
        holder: String,
    },
    AlreadyHolding {
        category: Category,
        holder: String,
        item: Item,
    },
    NoneAvailable {
        category: Category,
    },
    Returned {
        item: Item,
        holder: String,
    },
    NothingToReturn {
        category: Category,
        holder: String,
    },
    Transferred {
        item: Item,
        from: String,
        to: String,
    },
    NothingToTransfer {
        category: Category,
        from: String,
    },
    RecipientHolding {
        category: Category,
        to: String,
        item: Item,
    },
}

impl Outcome {
    /// Whether the operation changed who holds what
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Outcome::Rented { .. } | Outcome::Returned { .. } | Outcome::Transferred { .. }
        )
    }
}
