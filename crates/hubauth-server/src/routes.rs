//! Hub routes
//!
//! Hub routes are mounted under the configured base URL, so the login route
//! lands exactly where `Authenticator::login_url` points.

use rocket::{Build, Rocket, routes};

use crate::handlers;
use crate::state::HubState;

/// Build the hub rocket instance
///
/// Routes:
/// - GET `<base>/login` - Auto-login
/// - GET `<base>/home` - Home page
/// - GET `<base>/logout` - Logout
/// - GET `/` - Redirect to home
pub fn hub_rocket(state: HubState) -> Rocket<Build> {
    let base = mount_base(&state.base_url);
    rocket::build()
        .manage(state)
        .mount(base, hub_routes())
        .mount("/", routes![handlers::root])
}

/// Routes mounted under the hub base URL
pub fn hub_routes() -> Vec<rocket::Route> {
    routes![handlers::login, handlers::home, handlers::logout]
}

/// Rocket mount point for a base URL such as `/hub/`
pub fn mount_base(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
