//! prepare-firmware <input-file> <output-file> <version>
//!
//! Prepends the 44-byte firmware header to a raw binary.

use std::process::ExitCode;

use firmware_cli::args::PrepareArgs;
use firmware_cli::{init_logger, parse_args, run_prepare};

fn main() -> ExitCode {
    let args: PrepareArgs = parse_args();
    let result = init_logger(args.verbose).and_then(|()| run_prepare(&args));
    match result {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
