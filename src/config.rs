//! Gallery configuration.
//!
//! Layered, lowest priority first: built-in defaults, an optional YAML file,
//! `NEON_`-prefixed environment variables, then CLI flags.

use std::path::{Path, PathBuf};

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::progress::DEFAULT_MAX;
use crate::ui::components::{BarColor, RingColor};
use crate::ui::style::StyleKey;

/// Config file picked up from the working directory when none is given.
const CWD_CONFIG_STEM: &str = "neon-ui";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Write the page here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,

    /// Denominator for every sample
    #[arg(long)]
    pub max: Option<f64>,

    /// Render without fill transitions
    #[arg(long)]
    pub no_animation: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub gallery: GalleryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GalleryConfig {
    pub title: String,
    #[serde(default)]
    pub output: Option<PathBuf>,
    pub max: f64,
    pub samples: Vec<f64>,
    pub animated: bool,
    pub bar_color: String,
    pub ring_color: String,
}

impl GalleryConfig {
    /// Bar color, falling back to the default on an unknown key.
    #[must_use]
    pub fn bar_color(&self) -> BarColor {
        BarColor::from_key(&self.bar_color)
    }

    /// Ring color, falling back to the default on an unknown key.
    #[must_use]
    pub fn ring_color(&self) -> RingColor {
        RingColor::from_key(&self.ring_color)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        // `--help` and `--version` come back as `Error::Cli` for the caller to print.
        let cli = Cli::try_parse_from(args)?;

        let mut builder = Config::builder()
            .set_default("gallery.title", "Neon UI")?
            .set_default("gallery.max", DEFAULT_MAX)?
            .set_default("gallery.samples", vec![0.0, 33.6, 50.0, 75.0, 120.0])?
            .set_default("gallery.animated", true)?
            .set_default("gallery.bar_color", BarColor::default().key())?
            .set_default("gallery.ring_color", RingColor::default().key())?;

        // An explicit file must exist; the working-directory one is optional.
        builder = match &cli.config {
            Some(path) => {
                debug!(name: "config.file", path = %path, "Loading config file");
                builder.add_source(File::from(Path::new(path)).required(true))
            }
            None => builder.add_source(File::with_name(CWD_CONFIG_STEM).required(false)),
        };

        // E.g. NEON_GALLERY__MAX=250, NEON_GALLERY__SAMPLES=10,20,30
        builder = builder.add_source(
            Environment::with_prefix("NEON")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("gallery.samples")
                .try_parsing(true),
        );

        if let Some(output) = &cli.output {
            builder = builder.set_override("gallery.output", output.to_string_lossy().into_owned())?;
        }
        if let Some(title) = cli.title {
            builder = builder.set_override("gallery.title", title)?;
        }
        if let Some(max) = cli.max {
            builder = builder.set_override("gallery.max", max)?;
        }
        if cli.no_animation {
            builder = builder.set_override("gallery.animated", false)?;
        }

        let cfg = builder.build()?;
        Ok(cfg.try_deserialize()?)
    }
}
