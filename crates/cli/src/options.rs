use clap::ValueEnum;
use loc_report_core::SortKey as ReportSortKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned table
    #[default]
    Table,
    /// One block per language
    Plain,
    Json,
    Yaml,
    Csv,
    Md,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Files,
    Code,
    Comment,
    Blank,
}

impl From<SortKey> for ReportSortKey {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => Self::Name,
            SortKey::Files => Self::Files,
            SortKey::Code => Self::Code,
            SortKey::Comment => Self::Comment,
            SortKey::Blank => Self::Blank,
        }
    }
}
