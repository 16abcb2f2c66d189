// crates/core/src/report.rs
//! Per-file reports and the per-language summary they are merged into.

use std::cmp::Ordering;
use std::path::PathBuf;

use serde::Serialize;

use crate::counts::LineCounts;
use crate::language::Language;

/// Counts for a single classified file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub language: Language,
    #[serde(flatten)]
    pub counts: LineCounts,
}

impl FileReport {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, language: Language, counts: LineCounts) -> Self {
        Self { path: path.into(), language, counts }
    }
}

/// Aggregated counters for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageReport {
    pub language: Language,
    pub files: usize,
    #[serde(flatten)]
    pub counts: LineCounts,
}

impl LanguageReport {
    fn first(report: &FileReport) -> Self {
        Self { language: report.language, files: 1, counts: report.counts }
    }

    fn add(&mut self, report: &FileReport) {
        self.files += 1;
        self.counts += report.counts;
    }
}

/// Grand total across every language of a summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub languages: usize,
    pub files: usize,
    #[serde(flatten)]
    pub counts: LineCounts,
}

/// Presentation ordering for language rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// First-seen order (no sorting).
    #[default]
    Seen,
    Name,
    Files,
    Code,
    Comment,
    Blank,
}

/// Result of a scan: one [`LanguageReport`] per language, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    languages: Vec<LanguageReport>,
}

impl Summary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the summary with `report` merged in.
    ///
    /// An existing language is updated in place; a new one is appended.
    #[must_use]
    pub fn merge(mut self, report: &FileReport) -> Self {
        self.absorb(report);
        self
    }

    /// In-place form of [`Summary::merge`].
    pub fn absorb(&mut self, report: &FileReport) {
        match self.languages.iter_mut().find(|l| l.language == report.language) {
            Some(existing) => existing.add(report),
            None => self.languages.push(LanguageReport::first(report)),
        }
    }

    #[must_use]
    pub fn get(&self, language: Language) -> Option<&LanguageReport> {
        self.languages.iter().find(|l| l.language == language)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageReport> {
        self.languages.iter()
    }

    #[must_use]
    pub fn languages(&self) -> &[LanguageReport] {
        &self.languages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals {
            languages: self.languages.len(),
            files: self.languages.iter().map(|l| l.files).sum(),
            counts: self.languages.iter().map(|l| l.counts).sum(),
        }
    }

    /// Language rows ordered for display, ascending unless `descending`.
    /// Ties fall back to the language name so output is deterministic.
    #[must_use]
    pub fn sorted_by(&self, key: SortKey, descending: bool) -> Vec<&LanguageReport> {
        let mut rows: Vec<&LanguageReport> = self.languages.iter().collect();
        if key == SortKey::Seen {
            if descending {
                rows.reverse();
            }
            return rows;
        }

        let by_name = |a: &LanguageReport, b: &LanguageReport| a.language.name().cmp(b.language.name());
        rows.sort_by(|a, b| {
            let order = match key {
                SortKey::Seen | SortKey::Name => Ordering::Equal,
                SortKey::Files => a.files.cmp(&b.files),
                SortKey::Code => a.counts.code.cmp(&b.counts.code),
                SortKey::Comment => a.counts.comment.cmp(&b.counts.comment),
                SortKey::Blank => a.counts.blank.cmp(&b.counts.blank),
            };
            order.then_with(|| by_name(a, b))
        });
        if descending {
            rows.reverse();
        }
        rows
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a LanguageReport;
    type IntoIter = std::slice::Iter<'a, LanguageReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.iter()
    }
}
