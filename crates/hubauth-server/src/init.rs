//! Server Initialization
//!
//! Loads configuration, sets up logging, builds the authenticator with the
//! OS adapters, provisions allow-listed users and launches Rocket.
//!
//! # Configuration
//!
//! - Config file: `--config <path>`, else `hubauth.toml` in the working
//!   directory or the user config directory
//! - Environment variables: `HUBAUTH__AUTH__CREATE_SYSTEM_USERS=true`

use std::path::Path;
use std::sync::Arc;

use hubauth_infrastructure::auth::build_authenticator;
use hubauth_infrastructure::config::{AppConfig, ConfigLoader};
use hubauth_infrastructure::logging::init_logging;
use hubauth_infrastructure::os::{NixAccountDirectory, ProcessCommandRunner};
use tracing::info;

use crate::routes::hub_rocket;
use crate::state::HubState;

/// Run the hub until Rocket shuts down
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        address = %config.server.address,
        port = config.server.port,
        base_url = %config.hub.base_url,
        username_file = %config.hub.username_file.display(),
        "Starting hubauth"
    );

    let state = create_state(&config)?;
    let provisioned = state.registry.provision_whitelisted().await;
    if provisioned > 0 {
        info!(count = provisioned, "Provisioned whitelisted users");
    }

    let figment = rocket::Config::figment()
        .merge(("address", config.server.address.clone()))
        .merge(("port", config.server.port));

    hub_rocket(state).configure(figment).launch().await?;
    Ok(())
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// Build the hub state with the real OS adapters
pub fn create_state(config: &AppConfig) -> Result<HubState, Box<dyn std::error::Error>> {
    let authenticator = build_authenticator(
        &config.auth,
        Arc::new(NixAccountDirectory::new()),
        Arc::new(ProcessCommandRunner::new()),
    )?;
    Ok(HubState::new(config, authenticator)?)
}
