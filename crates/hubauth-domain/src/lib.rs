//! # hubauth domain
//!
//! Core types and contracts for the hubauth kiosk authenticator.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error type shared by every layer |
//! | [`ports`] | Authenticator, OS account directory and command runner contracts |
//! | [`value_objects`] | User record and the account creation command template |
//! | [`utils`] | Hub URL helpers |

pub mod constants;
pub mod error;
pub mod ports;
pub mod utils;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{AccountDirectory, Authenticator, CommandOutput, CommandRunner};
pub use value_objects::{AddUserCommand, User};
