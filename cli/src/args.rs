//! Command-line arguments for both binaries.
//!
//! The positional version of `prepare-firmware` uses the id
//! `firmware_version`; `version` is taken by clap's `--version` flag.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "prepare-firmware",
    version,
    about = "Prepend a validation header (magic, version, size, SHA-256) to a firmware binary",
    after_help = "Example: prepare-firmware app.bin app_signed.bin 1.0.0"
)]
pub struct PrepareArgs {
    /// Raw firmware binary.
    pub input: PathBuf,

    /// Where to write header + firmware. Replaced if it exists.
    pub output: PathBuf,

    /// Firmware version, <major>.<minor>.<patch>, each 0-255.
    #[arg(id = "firmware_version", value_name = "VERSION")]
    pub firmware_version: String,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Parser)]
#[command(
    name = "verify-firmware",
    version,
    about = "Verify firmware images produced by prepare-firmware"
)]
pub struct VerifyArgs {
    /// Images to verify.
    #[arg(required = true)]
    pub images: Vec<PathBuf>,

    /// Worker threads (0 = one per CPU).
    #[arg(short, long, default_value_t = 0, env = "VERIFY_FIRMWARE_JOBS")]
    pub jobs: usize,

    /// Print one JSON object per image.
    #[arg(long)]
    pub json: bool,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
