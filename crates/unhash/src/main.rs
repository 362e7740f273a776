use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::EnvFilter;
use unhash_fetch::{ReqwestClient, Unhasher};

use cli::App;
use config::Settings;

mod cli;
mod config;

#[tokio::main]
async fn main() -> Result<()> {
    let app = App::parse();
    init_logging(app.verbose);

    let file = config::load(app.config.as_deref())?;
    let settings = Settings::resolve(&app, file);

    let client = ReqwestClient::new().context("failed to build HTTP client")?;
    let unhasher = Unhasher::new(client, settings.hosts).with_options(settings.options);

    let bytes = unhasher
        .fetch(app.hash.as_str())
        .await
        .with_context(|| format!("failed to resolve {}", app.hash))?;

    match &app.output {
        Some(path) => tokio::fs::write(path, &bytes)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(&bytes).await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}

// Logs go to stderr; stdout carries the content.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
