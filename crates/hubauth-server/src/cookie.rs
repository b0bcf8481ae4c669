//! Login cookie
//!
//! The hub remembers a login with a signed HS256 token in an HttpOnly
//! cookie. The token carries the username as `sub`.

use chrono::Utc;
use hubauth_domain::error::Result;
use hubauth_infrastructure::config::CookieConfig;
use hubauth_infrastructure::constants::GENERATED_COOKIE_SECRET_LEN;
use hubauth_infrastructure::error_ext::ErrorContext;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use rand::Rng;
use rand::distr::Alphanumeric;
use rocket::http::{Cookie, CookieJar, SameSite};
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::state::HubState;

/// Login token claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Username
    pub sub: String,
    /// Issued at (seconds since the epoch)
    pub iat: u64,
    /// Expiration (seconds since the epoch)
    pub exp: u64,
}

/// Issues and validates login cookies
pub struct LoginCookies {
    name: String,
    path: String,
    expiration_secs: u64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl LoginCookies {
    /// Create the cookie service for cookies scoped to `path`.
    ///
    /// An empty configured secret is replaced by a random one.
    pub fn new(config: &CookieConfig, path: &str) -> Self {
        let secret = if config.secret.is_empty() {
            warn!("No cookie secret configured; logins will not survive a restart");
            generate_secret()
        } else {
            config.secret.clone()
        };
        Self {
            name: config.name.clone(),
            path: path.to_string(),
            expiration_secs: config.expiration_secs,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Cookie name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Signed token for `username`
    pub fn token_for(&self, username: &str) -> Result<String> {
        let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
        let claims = Claims {
            sub: username.to_string(),
            iat: now,
            exp: now + self.expiration_secs,
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .auth_context("Failed to sign login token")
    }

    /// Username carried by a valid, unexpired token
    pub fn username_from(&self, token: &str) -> Result<String> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims.sub)
            .auth_context("Invalid login token")
    }

    /// Set the login cookie for `username`
    pub fn set_login_cookie(&self, jar: &CookieJar<'_>, username: &str) -> Result<()> {
        let token = self.token_for(username)?;
        let max_age = i64::try_from(self.expiration_secs).unwrap_or(i64::MAX);
        jar.add(
            Cookie::build((self.name.clone(), token))
                .path(self.path.clone())
                .http_only(true)
                .same_site(SameSite::Lax)
                .max_age(rocket::time::Duration::seconds(max_age)),
        );
        Ok(())
    }

    /// Remove the login cookie
    pub fn clear_login_cookie(&self, jar: &CookieJar<'_>) {
        jar.remove(Cookie::build((self.name.clone(), "")).path(self.path.clone()));
    }
}

fn generate_secret() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_COOKIE_SECRET_LEN)
        .map(char::from)
        .collect()
}

/// Request guard yielding the user of a valid login cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedInUser(pub String);

/// Reasons a request carries no usable login
#[derive(Debug)]
pub enum LoginCookieError {
    /// No cookie was sent
    Missing,
    /// The cookie failed validation
    Invalid,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for LoggedInUser {
    type Error = LoginCookieError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(state) = request.rocket().state::<HubState>() else {
            return Outcome::Error((
                rocket::http::Status::InternalServerError,
                LoginCookieError::Invalid,
            ));
        };

        let Some(cookie) = request.cookies().get(state.cookies.name()) else {
            return Outcome::Error((
                rocket::http::Status::Unauthorized,
                LoginCookieError::Missing,
            ));
        };

        match state.cookies.username_from(cookie.value()) {
            Ok(username) => Outcome::Success(LoggedInUser(username)),
            Err(e) => {
                debug!("Login cookie rejected: {}", e);
                Outcome::Error((
                    rocket::http::Status::Unauthorized,
                    LoginCookieError::Invalid,
                ))
            }
        }
    }
}
