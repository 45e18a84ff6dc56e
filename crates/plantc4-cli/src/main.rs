//! plantc4 CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use plantc4_cli::{Args, error_adapter::to_reportables};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    // Logs go to stderr so stdout stays a clean document
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .target(env_logger::Target::Stderr)
        .init();

    info!(log_level:?; "Starting plantc4");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = plantc4_cli::run(&args) {
        error!(input = args.input; "Failed to process diagram");
        let reporter = miette::GraphicalReportHandler::new();

        for reportable in to_reportables(&err) {
            let mut writer = String::new();
            if reporter.render_report(&mut writer, &reportable).is_err() {
                writer = reportable.to_string();
            }

            // Reported regardless of --log-level
            eprintln!("{writer}");
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
