//! # hubauth server
//!
//! A kiosk-mode hub: `GET /hub/login` logs in whichever user is named in
//! `auto_login_username.txt`, mapping them onto a local OS account first.
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     hubauth_server::run(None).await
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`HubState`] | Authenticator, user registry and cookie service |
//! | [`UserRegistry`] | Hub user records; fires the new-user hook |
//! | [`LoginCookies`] | Signed login cookie |

pub mod cookie;
pub mod handlers;
pub mod init;
pub mod registry;
pub mod routes;
pub mod state;
pub mod web;

pub use cookie::LoginCookies;
pub use init::run;
pub use registry::UserRegistry;
pub use routes::hub_rocket;
pub use state::HubState;
