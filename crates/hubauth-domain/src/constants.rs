//! Domain layer constants

/// Placeholder replaced by the username in every account creation argument
pub const USERNAME_PLACEHOLDER: &str = "USERNAME";

/// Path segment of the auto-login route, relative to the hub base URL
pub const LOGIN_PATH: &str = "login";

/// Path segment of the home page, relative to the hub base URL
pub const HOME_PATH: &str = "home";

/// Path segment of the logout route, relative to the hub base URL
pub const LOGOUT_PATH: &str = "logout";
