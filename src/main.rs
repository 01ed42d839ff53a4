use crate::catalog::Catalog;
use crate::config::Config;
use clap::Parser;
use eyre::Result;
use std::path::{Path, PathBuf};
use tracing::Level;

mod catalog;
mod config;
mod display;
mod model;
mod notice;
mod records;
mod rules;
mod session;
mod wizard;

#[derive(Debug, Parser)]
#[command(
    name = "postula",
    version,
    about = "Walk students through applying to an internship project position"
)]
struct Args {
    /// Use FILE instead of postula.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Load the catalog from FILE instead of the embedded data
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,
    /// Set verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = Config::load(
        args.config
            .as_deref()
            .unwrap_or_else(|| Path::new("postula.toml")),
    )?;
    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::embedded()?,
    };
    catalog.check()?;
    session::run(&catalog, &config).await
}
