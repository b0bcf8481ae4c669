//! Hub route handlers
//!
//! - `GET <base>/login` - kiosk auto-login from the username file
//! - `GET <base>/home` - landing page for the logged-in user
//! - `GET <base>/logout` - drop the login cookie
//! - `GET /` - send visitors to the hub home

use hubauth_domain::error::{Error, Result};
use rocket::http::{CookieJar, Status};
use rocket::response::Redirect;
use rocket::response::content::RawHtml;
use rocket::{Responder, State, get};
use std::path::Path;
use tracing::{error, info, warn};

use crate::cookie::LoggedInUser;
use crate::state::HubState;
use crate::web::render_home;

/// Read the auto-login username, dropping every newline
pub async fn read_username_file(path: &Path) -> Result<String> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::username_file(path, e))?;
    Ok(contents.replace('\n', ""))
}

/// HTTP status for a failed login
pub fn login_failure_status(err: &Error) -> Status {
    if err.is_login_rejection() {
        Status::Forbidden
    } else {
        Status::InternalServerError
    }
}

/// Auto-login handler.
///
/// Every request re-reads the username file and logs that user in.
#[get("/login")]
pub async fn login(
    state: &State<HubState>,
    jar: &CookieJar<'_>,
) -> std::result::Result<Redirect, Status> {
    match auto_login(state, jar).await {
        Ok(username) => {
            info!(user = %username, "Auto-login");
            Ok(Redirect::to(state.home_url()))
        }
        Err(e) => {
            let status = login_failure_status(&e);
            if status == Status::Forbidden {
                warn!("Login rejected: {}", e);
            } else {
                error!("Login failed: {}", e);
            }
            Err(status)
        }
    }
}

async fn auto_login(state: &HubState, jar: &CookieJar<'_>) -> Result<String> {
    let username = read_username_file(&state.username_file).await?;
    let user = state.registry.user_from_username(&username).await?;
    state.cookies.set_login_cookie(jar, &user.name)?;
    Ok(user.name)
}

/// Responses of the home route
#[derive(Responder)]
pub enum HomeResponse {
    /// The rendered page
    Page(RawHtml<String>),
    /// No valid login cookie
    Login(Redirect),
    /// Rendering failed
    Failed(Status),
}

/// Home page; visitors without a login are sent to the login URL
#[get("/home")]
pub fn home(state: &State<HubState>, user: Option<LoggedInUser>) -> HomeResponse {
    let Some(LoggedInUser(name)) = user else {
        return HomeResponse::Login(Redirect::to(state.login_url()));
    };
    match render_home(&state.templates, &name, &state.logout_url()) {
        Ok(html) => HomeResponse::Page(RawHtml(html)),
        Err(e) => {
            error!("Failed to render home page: {}", e);
            HomeResponse::Failed(Status::InternalServerError)
        }
    }
}

/// Clear the login cookie and go back to the login URL
#[get("/logout")]
pub fn logout(state: &State<HubState>, jar: &CookieJar<'_>) -> Redirect {
    state.cookies.clear_login_cookie(jar);
    Redirect::to(state.login_url())
}

/// Root redirect to the hub home
#[get("/")]
pub fn root(state: &State<HubState>) -> Redirect {
    Redirect::to(state.home_url())
}
