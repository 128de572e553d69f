//! reqcheck - requirements.txt version reporter CLI tool
//!
//! Lists the pinned version of every package in a requirements file and,
//! with `--check`, compares it against the latest release on PyPI.

use clap::Parser;
use reqcheck::checker::Checker;
use reqcheck::cli::CliArgs;
use reqcheck::manifest::{parse_manifest, ManifestSource};
use reqcheck::output::{create_formatter, OutputConfig};
use reqcheck::progress::CheckProgress;
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Exit code 2 is reserved for failed lookups, so argument errors exit with 1
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let checker = Checker::from_args(&args)?;

    let source = ManifestSource::from_arg(&args.file);

    // Print version info in verbose mode
    if args.verbose {
        eprintln!("reqcheck v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Source: {}", source);
        if checker.is_online() {
            eprintln!("Index: {}", args.index_url);
        }
    }

    source.validate()?;

    let reading = CheckProgress::reading(&source, args.show_progress());
    let content = source.read();
    reading.finish();
    let manifest = parse_manifest(&content?);

    if args.verbose {
        eprintln!(
            "Parsed {} lines: {} packages ({} pinned), {} skipped",
            manifest.lines,
            manifest.packages.len(),
            manifest.pinned(),
            manifest.skipped()
        );
    }

    let report = checker.run(source.to_string(), manifest.packages).await;

    // Create output formatter based on CLI options
    let output_config = OutputConfig::from_cli(args.json, args.outdated, args.no_color);
    let formatter = create_formatter(output_config);

    // Output results
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    // Print failed lookups in verbose mode
    if args.verbose && report.has_failures() {
        eprintln!();
        eprintln!("Lookups failed:");
        for failure in report.failures() {
            if let Some(error) = &failure.error {
                eprintln!("  - {}", error);
            }
        }
    }

    if report.has_failures() {
        // Partial success - some lookups failed
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
