//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The user-service crate builds its ports and use cases on these types.

pub mod constants;
pub mod error;
pub mod message;
pub mod user;

pub use constants::*;
pub use error::DomainError;
pub use message::{Mailbox, Message};
pub use user::{CreateUserRequest, Profile, User};
