//! Application services layer - use cases.

mod create_user;

pub use create_user::{CreateUser, CreateUserUseCase};
