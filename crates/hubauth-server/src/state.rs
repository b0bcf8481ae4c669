//! Shared hub state managed by Rocket

use hubauth_domain::constants::{HOME_PATH, LOGOUT_PATH};
use hubauth_domain::error::{Error, Result};
use hubauth_domain::ports::Authenticator;
use hubauth_domain::utils::url_path_join;
use hubauth_infrastructure::config::AppConfig;
use rocket::http::uri::Origin;
use std::path::PathBuf;
use std::sync::Arc;
use tera::Tera;

use crate::cookie::LoginCookies;
use crate::registry::UserRegistry;
use crate::routes::mount_base;
use crate::web::hub_templates;

/// Everything the hub routes need
pub struct HubState {
    /// Active authenticator
    pub authenticator: Arc<dyn Authenticator>,
    /// Known users
    pub registry: UserRegistry,
    /// Login cookie service
    pub cookies: LoginCookies,
    /// Prefix of every hub route
    pub base_url: String,
    /// File read by the auto-login handler
    pub username_file: PathBuf,
    /// Embedded page templates
    pub templates: Tera,
}

impl HubState {
    /// Assemble the state from configuration and an authenticator.
    ///
    /// Fails when the base URL cannot be used as a Rocket mount point.
    pub fn new(config: &AppConfig, authenticator: Arc<dyn Authenticator>) -> Result<Self> {
        let base_url = config.hub.base_url.clone();
        let base = mount_base(&base_url);
        match Origin::parse(&base) {
            Ok(origin) if origin.query().is_none() => {}
            Ok(_) => {
                return Err(Error::configuration(format!(
                    "Hub base URL '{base_url}' cannot carry a query"
                )));
            }
            Err(e) => {
                return Err(Error::configuration(format!(
                    "Hub base URL '{base_url}' is not a valid route base: {e}"
                )));
            }
        }

        Ok(Self {
            registry: UserRegistry::new(authenticator.clone(), config.hub.enforce_allow_list),
            cookies: LoginCookies::new(&config.auth.cookie, &base_url),
            templates: hub_templates()?,
            authenticator,
            username_file: config.hub.username_file.clone(),
            base_url,
        })
    }

    /// Where the authenticator wants logins to go
    pub fn login_url(&self) -> String {
        self.authenticator.login_url(&self.base_url)
    }

    /// The hub home page
    pub fn home_url(&self) -> String {
        url_path_join(&[&self.base_url, HOME_PATH])
    }

    /// The logout route
    pub fn logout_url(&self) -> String {
        url_path_join(&[&self.base_url, LOGOUT_PATH])
    }
}
