//! Configuration types module

pub mod app;
pub mod auth;
pub mod hub;
pub mod logging;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use auth::{AuthConfig, AuthenticatorKind, CookieConfig};
pub use hub::HubConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
