// crates/cli/src/args.rs
use crate::options::{OutputFormat, SortKey};
use crate::parsers::{self, ExtMapping};
use clap::{ArgAction, Parser, ValueHint};
use loc_report_engine::DEFAULT_WORKERS;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "loc_report",
    version,
    about = "Count code, comment and blank lines per language"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Files or directories to scan
    #[arg(required = true, value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Number of worker threads
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_WORKERS,
        value_parser = parsers::parse_jobs,
        help_heading = "Scan"
    )]
    pub jobs: usize,

    /// Follow symbolic links
    #[arg(short = 'L', long, help_heading = "Scan")]
    pub follow: bool,

    /// Count files with extension EXT as another registered extension (e.g. vue=ts)
    #[arg(long = "map-ext", value_name = "EXT=EXT", help_heading = "Scan")]
    pub map_ext: Vec<ExtMapping>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", help_heading = "Output")]
    pub format: OutputFormat,

    /// Order languages by this key instead of first-seen order
    #[arg(long, value_enum, help_heading = "Output")]
    pub sort: Option<SortKey>,

    /// Reverse the sort order
    #[arg(long, requires = "sort", help_heading = "Output")]
    pub desc: bool,

    /// Append a TOTAL row
    #[arg(long, help_heading = "Output")]
    pub total: bool,

    /// Print progress to stderr
    #[arg(long, help_heading = "Output")]
    pub progress: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
