//! Command-line entry point: regenerates the PWA icon set.
//!
//! With no arguments the built-in configuration is used: icons are resized
//! from `public/organic.gif` and written to `public/`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use pwa_icon_forge::{GeneratorConfig, RenderMode};
use tracing_subscriber::EnvFilter;

/// Generate PWA icons from a source image or a procedural plant glyph.
#[derive(Debug, Parser)]
#[command(name = "pwa-icon-forge", version, about)]
struct Args {
    /// JSON config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Content renderer to use.
    #[arg(long, value_enum)]
    mode: Option<RenderMode>,

    /// Source image for `--mode source`.
    #[arg(long)]
    source: Option<PathBuf>,

    /// Directory the icons are written to.
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_path(path)
                .wrap_err_with(|| format!("loading config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(out_dir) = self.out_dir {
            config.output_dir = out_dir;
        }
        Ok(config)
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.into_config()?;
    tracing::debug!(mode = %config.mode, source = %config.source.display(), "starting");

    let report = pwa_icon_forge::generate(&config).wrap_err("icon generation failed")?;
    for path in report.paths() {
        println!("  - {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Failures are reported, not turned into a non-zero exit status.
    if let Err(report) = run(Args::parse()) {
        tracing::error!("{report:?}");
    }
    Ok(())
}
