//! Dependency download command.

use console::style;

use crate::config::FetchSettings;
use crate::fetcher::{default_manifest, AssetFetcher};

/// Download every manifest entry. Individual failures are reported, not fatal.
pub async fn cmd_fetch(settings: &FetchSettings) -> anyhow::Result<()> {
    let manifest = default_manifest()?;
    let fetcher = AssetFetcher::new(settings)?;

    let report = fetcher.fetch_all(&manifest).await;

    println!(
        "{} {} downloaded, {} stubbed",
        style("✓").green(),
        report.downloaded(),
        report.stubbed()
    );
    if report.failed() > 0 {
        // Failures are surfaced here but do not change the exit status.
        println!(
            "  {} {} of {} files could not be downloaded",
            style("!").yellow(),
            report.failed(),
            manifest.len()
        );
    }

    Ok(())
}
