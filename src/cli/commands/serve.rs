//! Web server command.

use console::style;

use crate::config::ServerSettings;

/// Start the web server.
pub async fn cmd_serve(settings: &ServerSettings) -> anyhow::Result<()> {
    println!(
        "{} Starting server at {}",
        style("→").cyan(),
        settings.base_url()
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings).await
}
