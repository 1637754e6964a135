//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Lending rules over the inventory
//! - Errors: Domain-specific errors
//! - Messaging: Command parsing, dispatching, reply rendering

pub mod errors;
pub mod services;
pub mod messaging;
