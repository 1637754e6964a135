//! Domain entities - Core business objects with no external dependencies

pub mod item;
pub mod category;
pub mod command;
pub mod outcome;
pub mod reply;

pub use item::{Item, ItemState};
pub use category::{normalize_category, Category};
pub use command::LendingCommand;
pub use outcome::Outcome;
pub use reply::{Reply, Visibility};
