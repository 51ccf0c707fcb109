mod args;
mod emoji;
mod error;
mod registry;
mod source;

mod lut {
    include!(concat!(env!("OUT_DIR"), "/lut.rs"));
}

use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use args::ArgHandler;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use registry::Registry;

/// Main application entrypoint.
fn main() {
    env_logger::Builder::new()
        .format_timestamp_secs()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Parse CLI arguments
    let arg_handler = ArgHandler::parse();

    if let Err(err) = start(&arg_handler) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

/// Print the registry for the catalog given on the command line.
fn start(arg_handler: &ArgHandler) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    run(arg_handler.input(), &mut out)?;
    out.flush().context("failed to write registry")
}

/// Build the registry from the catalog at `path` and write its report.
///
/// Nothing is written unless the whole catalog was read successfully.
fn run<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let entries = source::load(path)
        .with_context(|| format!("failed to load emojis from {}", path.display()))?;

    let registry = Registry::build(entries);
    if registry.is_empty() {
        warn!("Emoji source has no data rows");
    }
    info!(
        "Built registry of {} emoji(s) in {} length group(s)",
        registry.len(),
        registry.groups().len()
    );

    registry
        .write_report(out)
        .context("failed to write registry")
}
