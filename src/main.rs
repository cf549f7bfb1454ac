//! Neon UI gallery
//!
//! Renders every component into a standalone HTML page.

use anyhow::Context;
use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use neon_ui::Error;
use neon_ui::config::AppConfig;
use neon_ui::ui::gallery::write_gallery;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    // Logs go to stderr so the page can be piped from stdout (M-LOG-STRUCTURED)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(Error::Cli(e)) => e.exit(),
        Err(e) => return Err(e).context("failed to load configuration"),
    };

    info!(
        name: "gallery.config.loaded",
        title = %config.gallery.title,
        samples = config.gallery.samples.len(),
        animated = config.gallery.animated,
        "Gallery configuration loaded"
    );

    write_gallery(&config.gallery).context("failed to write gallery")?;
    Ok(())
}
