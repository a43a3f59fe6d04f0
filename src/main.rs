//! Godzilla - exhaustive wordlist generation for penetration testing
//!
//! Main entry point for the command-line application.

use clap::Parser;
use log::LevelFilter;
use std::process;
use std::sync::atomic::Ordering;

use godzilla::cli::Args;
use godzilla::processor::{GenerationConfig, Processor};
use godzilla::progress::{print_banner, print_error, print_warning, RunStatus};

/// Exit status of a run stopped by SIGINT/SIGTERM
const EXIT_INTERRUPTED: i32 = 130;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    let level = if args.verbose {
        LevelFilter::Debug
    } else if args.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    match run(args) {
        Ok(RunStatus::Interrupted) => process::exit(EXIT_INTERRUPTED),
        Ok(_) => {}
        Err(e) => {
            print_error(&format!("{}", e));

            // Print chain of errors
            let mut source = e.source();
            while let Some(err) = source {
                print_error(&format!("  Caused by: {}", err));
                source = err.source();
            }

            process::exit(1);
        }
    }
}

fn run(args: Args) -> anyhow::Result<RunStatus> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    let config = GenerationConfig::from_args(&args)?;
    log::debug!("Resolved configuration: {:?}", config);

    let processor = Processor::new(config);

    if processor.config().dry_run {
        processor.dry_run_report();
        return Ok(RunStatus::Completed);
    }

    let interrupted = processor.interrupt_flag();
    if let Err(e) = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::Relaxed);
    }) {
        print_warning(&format!("Could not set interrupt handler: {}", e));
    }

    let summary = processor.run()?;
    if summary.status == RunStatus::Interrupted {
        print_warning("Process interrupted by user");
    }

    Ok(summary.status)
}
