//! verify-firmware <image>...
//!
//! Checks magic, size and SHA-256 of one or more prepared images.

use std::process::ExitCode;

use firmware_cli::args::VerifyArgs;
use firmware_cli::{init_logger, parse_args, render_summary};
use firmware_core::batch::{verify_many, VerifyOutcome};
use firmware_core::image::ImageSummary;
use serde::Serialize;

/// One line of `--json` output.
#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    ok: bool,
    #[serde(flatten)]
    summary: Option<&'a ImageSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl<'a> JsonReport<'a> {
    fn from_outcome(outcome: &'a VerifyOutcome) -> Self {
        let path = outcome.path.display().to_string();
        match &outcome.result {
            Ok(summary) => Self { path, ok: true, summary: Some(summary), error: None, message: None },
            Err(err) => Self {
                path,
                ok: false,
                summary: None,
                error: Some(err.kind()),
                message: Some(err.to_string()),
            },
        }
    }
}

fn report(outcome: &VerifyOutcome, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(&JsonReport::from_outcome(outcome))?);
        return Ok(());
    }
    match &outcome.result {
        Ok(summary) => println!("{}", render_summary("Firmware valid", summary, &outcome.path, "Image")),
        Err(err) => eprintln!("✗ {}: {}", outcome.path.display(), err),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: VerifyArgs = parse_args();
    if let Err(err) = init_logger(args.verbose) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }

    let outcomes = verify_many(&args.images, args.jobs);
    for outcome in &outcomes {
        if let Err(err) = report(outcome, args.json) {
            eprintln!("error: {err:#}");
            return ExitCode::FAILURE;
        }
    }

    if outcomes.iter().all(VerifyOutcome::is_ok) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
