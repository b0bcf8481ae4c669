//! hubauth - kiosk auto-login hub
//!
//! Logs in the user named in the username file and maps them onto a local
//! OS account, creating it when `auth.create_system_users` is set.

use clap::Parser;
use hubauth_server::run;

/// Command line interface for hubauth
#[derive(Parser, Debug)]
#[command(name = "hubauth-server")]
#[command(about = "Kiosk auto-login hub with local system account provisioning")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
