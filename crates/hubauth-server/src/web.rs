//! Hub HTML pages
//!
//! Templates are embedded at compile time and rendered with tera, which
//! escapes every `.html` template variable.

use hubauth_domain::error::{Error, Result};
use tera::{Context, Tera};

const TPL_HOME: &str = include_str!("web/templates/home.html");

/// Template name of the home page
pub const HOME_TEMPLATE: &str = "home.html";

/// Load the embedded hub templates
pub fn hub_templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template(HOME_TEMPLATE, TPL_HOME)
        .map_err(|e| Error::internal(format!("Invalid embedded template {HOME_TEMPLATE}: {e}")))?;
    Ok(tera)
}

/// Render the home page greeting `username`
pub fn render_home(tera: &Tera, username: &str, logout_url: &str) -> Result<String> {
    let mut context = Context::new();
    context.insert("username", username);
    context.insert("logout_url", logout_url);
    tera.render(HOME_TEMPLATE, &context)
        .map_err(|e| Error::internal(format!("Template error: {e}")))
}
