use clap::Parser;
use loc_report_cli::args::Args;
use loc_report_cli::config::AppConfig;
use loc_report_cli::error::Result;
use loc_report_cli::progress::StderrProgress;
use loc_report_cli::{logging, presentation};
use loc_report_engine::NoProgress;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = AppConfig::try_from(args)?;
    log::info!(
        "scanning {} path(s) with {} worker(s)",
        config.scan.roots.len(),
        config.scan.workers
    );

    let summary = if config.progress {
        loc_report_engine::run_with_progress(&config.scan, &StderrProgress::new())?
    } else {
        loc_report_engine::run_with_progress(&config.scan, &NoProgress)?
    };

    let rendered = presentation::render(&summary, &config)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
