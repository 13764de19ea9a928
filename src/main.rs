// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (and the optional config file)
// 2. Build the validation policy, the HTTP probe and the log sink
// 3. Walk every link reachable from the start file
// 4. Print the report
// 5. Exit with proper code (0 = success, 1 = bad links, 2 = error)
//
// The walk itself knows nothing about exit codes or report-only mode: it
// hands back the bad links and this file decides what they mean for the
// process.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - rules for a single link
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - validation policy
mod crawl; // src/crawl/ - the walk over the link graph
mod error; // src/error.rs - error types
mod logging; // src/logging.rs - progress output
mod report; // src/report.rs - bad-link report

use anyhow::{Context, Result};
use clap::Parser;

use checker::HttpProbe;
use cli::Cli;
use config::FileConfig;
use crawl::LinkChecker;
use error::ConfigError;
use logging::{FileSink, Level, LogSink, TracingSink};
use report::Report;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Fatal problems (bad start path, unreadable file, bad config)
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = no bad links, or report-only mode
//   Ok(1) = bad links found
//   Err   = the run could not complete
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let mut policy = file_config.policy.clone();
    cli.apply_overrides(&mut policy);
    let compiled = policy.compile()?;
    let report_only = cli.report_only || file_config.report_only;

    let probe = HttpProbe::new(compiled.timeout).map_err(ConfigError::from)?;

    let threshold = if cli.verbose { Level::Debug } else { Level::Info };
    let sink: Box<dyn LogSink> = match cli.log_file.as_ref().or(file_config.log_file.as_ref()) {
        Some(path) => Box::new(FileSink::create(path, threshold)?),
        None => Box::new(TracingSink),
    };

    sink.warn("This can take some time to complete.");
    sink.warn("Run with --verbose for more information.");
    sink.warn("");

    let current_dir = std::env::current_dir().context("cannot determine current directory")?;
    let start = cli.start_path(&current_dir);

    let outcome = LinkChecker::new(&compiled, &probe, &*sink)
        .run(&start)
        .await?;

    let report = Report::from_outcome(&outcome);
    report.log_summary(&*sink);
    report.print(cli.json)?;

    if !report.has_bad_links() {
        return Ok(0);
    }

    if report_only {
        sink.warn("Not failing for bad links as configured");
        Ok(0)
    } else {
        sink.warn("Failing for bad links as configured.");
        Ok(1)
    }
}
