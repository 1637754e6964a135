//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Items, categories, commands and replies
//! - Traits: Abstractions over inventory storage

pub mod entities;
pub mod traits;
