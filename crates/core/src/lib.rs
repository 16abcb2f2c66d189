// crates/core/src/lib.rs
//! Domain model of `loc_report`: which language a file is written in, how its
//! lines are classified and how per-file counts roll up into a [`Summary`].
//!
//! This crate performs no I/O.

#![allow(clippy::multiple_crate_versions)]

pub mod classify;
pub mod counts;
pub mod language;
pub mod report;

pub use classify::{classify, classify_bytes};
pub use counts::LineCounts;
pub use language::{CommentStyle, ExtensionMap, ExtensionMapError, Language};
pub use report::{FileReport, LanguageReport, SortKey, Summary, Totals};
