use loc_report_engine::MAX_WORKERS;
use std::str::FromStr;

/// `FROM=TO` pair given to `--map-ext`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtMapping {
    pub from: String,
    pub to: String,
}

impl FromStr for ExtMapping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once('=')
            .ok_or_else(|| format!("expected EXT=EXT, got '{s}'"))?;
        let (from, to) = (from.trim(), to.trim());
        if from.is_empty() || to.is_empty() {
            return Err(format!("expected EXT=EXT, got '{s}'"));
        }
        Ok(Self { from: from.to_string(), to: to.to_string() })
    }
}

/// Parses a worker count in `1..=MAX_WORKERS`.
///
/// # Errors
/// Returns a message clap prints as a usage error.
pub fn parse_jobs(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {s}"))?;
    if n == 0 || n > MAX_WORKERS {
        return Err(format!("must be between 1 and {MAX_WORKERS}"));
    }
    Ok(n)
}
