// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options::OutputFormat;
use loc_report_core::{ExtensionMap, SortKey};
use loc_report_engine::ScanConfig;

/// Everything one invocation needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scan: ScanConfig,
    pub format: OutputFormat,
    pub sort: SortKey,
    pub descending: bool,
    pub total_row: bool,
    pub progress: bool,
}

impl TryFrom<Args> for AppConfig {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let extensions =
            ExtensionMap::from_pairs(args.map_ext.iter().map(|m| (m.from.as_str(), m.to.as_str())))?;

        let scan = ScanConfig::builder()
            .roots(args.paths)
            .workers(args.jobs)
            .follow_links(args.follow)
            .extensions(extensions)
            .build()?;
        scan.validate()?;

        Ok(Self {
            scan,
            format: args.format,
            sort: args.sort.map(SortKey::from).unwrap_or_default(),
            descending: args.desc,
            total_row: args.total,
            progress: args.progress,
        })
    }
}
