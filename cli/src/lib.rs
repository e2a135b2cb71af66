//! firmware-cli
//!
//! Shared plumbing for the `prepare-firmware` and `verify-firmware` binaries.

use std::path::Path;
use std::process;

use anyhow::Context;
use clap::Parser;
use firmware_core::image::ImageSummary;
use firmware_core::io::prepare_firmware;
use log::LevelFilter;
use simple_logger::SimpleLogger;

pub mod args;

use args::PrepareArgs;

/// Parse arguments; a usage error prints to stderr and exits with status 1.
/// `--help` and `--version` keep clap's own handling (stdout, status 0).
pub fn parse_args<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            process::exit(1);
        }
        Err(err) => err.exit(),
    }
}

/// Install the stderr logger. `RUST_LOG` overrides the `-v` count.
pub fn init_logger(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    SimpleLogger::new()
        .with_level(level)
        .env()
        .init()
        .context("failed to install logger")
}

/// Console block for one image.
pub fn render_summary(title: &str, summary: &ImageSummary, path: &Path, path_label: &str) -> String {
    format!(
        "✓ {title}:\n  Version: {}\n  Size: {} bytes\n  SHA256: {}\n  {path_label}: {}",
        summary.version,
        summary.size,
        summary.sha256,
        path.display(),
    )
}

/// Run `prepare-firmware` and return what goes to stdout.
pub fn run_prepare(args: &PrepareArgs) -> anyhow::Result<String> {
    let summary = prepare_firmware(&args.input, &args.output, &args.firmware_version)
        .with_context(|| format!("failed to prepare {}", args.input.display()))?;

    if args.json {
        Ok(summary.to_json_pretty()?)
    } else {
        Ok(render_summary("Firmware prepared", &summary, &args.output, "Output"))
    }
}
