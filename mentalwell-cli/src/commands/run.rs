//! Run command - launches the terminal user interface.

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::build_client;

#[derive(Args, Default)]
#[command(after_long_help = "\
Examples:
  mentalwell                          Launch the TUI
  mentalwell run --api-url http://localhost:8000/api
")]
pub struct RunArgs {
    /// Backend base URL, overriding config and environment
    #[arg(long)]
    pub api_url: Option<String>,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let api = build_client(args.api_url.as_deref())?;

    info!("starting TUI");
    mentalwell_tui::install_panic_hook();

    let mut app = mentalwell_tui::App::new(api);
    app.run().await?;
    Ok(())
}
