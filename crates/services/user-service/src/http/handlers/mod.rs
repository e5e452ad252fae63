//! Request handlers.

mod health_handler;
mod user_handler;

pub use health_handler::health_routes;
pub use user_handler::user_routes;
