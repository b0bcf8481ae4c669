//! Value objects shared across layers

/// Account creation command template
pub mod command;
/// Host user record
pub mod user;

pub use command::AddUserCommand;
pub use user::User;
