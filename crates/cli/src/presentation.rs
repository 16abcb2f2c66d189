// crates/cli/src/presentation.rs
use crate::config::AppConfig;
use crate::error::Result;
use crate::options::OutputFormat;
use comfy_table::{Cell, CellAlignment, Table, presets};
use loc_report_core::{LanguageReport, LineCounts, Summary, Totals};
use serde::Serialize;
use std::fmt::Write;

const HEADERS: [&str; 5] = ["Language", "Files", "Code", "Comment", "Blank"];
const TOTAL_LABEL: &str = "TOTAL";

/// Document written for `json` and `yaml`.
#[derive(Debug, Serialize)]
struct Document<'a> {
    version: &'static str,
    languages: Vec<&'a LanguageReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<Totals>,
}

/// Renders `summary` in the configured format. The result ends with a newline
/// unless there is nothing to print.
///
/// # Errors
/// Fails only if serialization fails.
pub fn render(summary: &Summary, config: &AppConfig) -> Result<String> {
    let rows = summary.sorted_by(config.sort, config.descending);
    let total = config.total_row.then(|| summary.totals());

    Ok(match config.format {
        OutputFormat::Table => render_table(&rows, total),
        OutputFormat::Plain => render_plain(&rows, total),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&document(rows, total))?;
            out.push('\n');
            out
        }
        OutputFormat::Yaml => serde_yaml::to_string(&document(rows, total))?,
        OutputFormat::Csv => render_csv(&rows, total),
        OutputFormat::Md => render_markdown(&rows, total),
    })
}

fn document(languages: Vec<&LanguageReport>, total: Option<Totals>) -> Document<'_> {
    Document { version: crate::VERSION, languages, total }
}

fn count_cells(files: usize, counts: LineCounts) -> [Cell; 4] {
    [files, counts.code, counts.comment, counts.blank]
        .map(|n| Cell::new(n).set_alignment(CellAlignment::Right))
}

fn render_table(rows: &[&LanguageReport], total: Option<Totals>) -> String {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).set_header(HEADERS);

    for row in rows {
        let mut cells = vec![Cell::new(row.language.name())];
        cells.extend(count_cells(row.files, row.counts));
        table.add_row(cells);
    }
    if let Some(t) = total {
        let mut cells = vec![Cell::new(TOTAL_LABEL)];
        cells.extend(count_cells(t.files, t.counts));
        table.add_row(cells);
    }

    let mut out = table.to_string();
    out.push('\n');
    out
}

/// One block per language: name, a rule, then the four counters.
fn plain_block(name: &str, files: usize, counts: LineCounts) -> String {
    format!(
        "{name}\n---------------------\n\
         Files:         {files:>6}\n\
         Lines of code: {:>6}\n\
         Comment lines: {:>6}\n\
         Blank lines:   {:>6}\n",
        counts.code, counts.comment, counts.blank
    )
}

fn render_plain(rows: &[&LanguageReport], total: Option<Totals>) -> String {
    let mut blocks: Vec<String> = rows
        .iter()
        .map(|r| plain_block(r.language.name(), r.files, r.counts))
        .collect();
    if let Some(t) = total {
        blocks.push(plain_block(TOTAL_LABEL, t.files, t.counts));
    }
    blocks.join("\n")
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn render_csv(rows: &[&LanguageReport], total: Option<Totals>) -> String {
    let mut out = HEADERS.map(str::to_ascii_lowercase).join(",");
    out.push('\n');

    let mut push_row = |name: &str, files: usize, c: LineCounts| {
        let _ = writeln!(out, "{},{files},{},{},{}", csv_field(name), c.code, c.comment, c.blank);
    };
    for row in rows {
        push_row(row.language.name(), row.files, row.counts);
    }
    if let Some(t) = total {
        push_row(TOTAL_LABEL, t.files, t.counts);
    }
    out
}

fn render_markdown(rows: &[&LanguageReport], total: Option<Totals>) -> String {
    let mut out = format!("| {} |\n", HEADERS.join(" | "));
    out.push_str("|:---|---:|---:|---:|---:|\n");

    for row in rows {
        let c = row.counts;
        let name = row.language.name().replace('|', "\\|");
        let _ = writeln!(out, "| {name} | {} | {} | {} | {} |", row.files, c.code, c.comment, c.blank);
    }
    if let Some(t) = total {
        let c = t.counts;
        let _ = writeln!(
            out,
            "| **{TOTAL_LABEL}** | **{}** | **{}** | **{}** | **{}** |",
            t.files, c.code, c.comment, c.blank
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use loc_report_core::{FileReport, Language, SortKey};

    fn summary() -> Summary {
        Summary::new()
            .merge(&FileReport::new("a.py", Language::Python, LineCounts::new(1, 1, 1)))
            .merge(&FileReport::new("b.rs", Language::Rust, LineCounts::new(10, 2, 3)))
            .merge(&FileReport::new("c.rs", Language::Rust, LineCounts::new(5, 0, 0)))
    }

    fn config(format: &str, extra: &[&str]) -> AppConfig {
        let mut argv = vec!["loc_report", "-f", format];
        argv.extend_from_slice(extra);
        argv.push(".");
        AppConfig::try_from(crate::args::Args::try_parse_from(argv).unwrap()).unwrap()
    }

    #[test]
    fn plain_matches_block_layout() {
        let out = render(&summary(), &config("plain", &[])).unwrap();
        let expected = "\
Python
---------------------
Files:              1
Lines of code:      1
Comment lines:      1
Blank lines:        1

Rust
---------------------
Files:              2
Lines of code:     15
Comment lines:      2
Blank lines:        3
";
        assert_eq!(out, expected);
    }

    #[test]
    fn plain_of_empty_summary_is_empty() {
        assert_eq!(render(&Summary::new(), &config("plain", &[])).unwrap(), "");
    }

    #[test]
    fn csv_sorted_descending_with_total() {
        let out = render(&summary(), &config("csv", &["--sort", "code", "--desc", "--total"])).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "language,files,code,comment,blank",
                "Rust,2,15,2,3",
                "Python,1,1,1,1",
                "TOTAL,3,16,3,4",
            ]
        );
    }

    #[test]
    fn csv_quotes_fields_with_commas() {
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("C#"), "C#");
    }

    #[test]
    fn json_lists_languages_and_optional_total() {
        let out = render(&summary(), &config("json", &[])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["languages"][1]["language"], "Rust");
        assert_eq!(value["languages"][1]["code"], 15);
        assert!(value.get("total").is_none());

        let out = render(&summary(), &config("json", &["--total"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total"]["files"], 3);
        assert_eq!(value["total"]["languages"], 2);
    }

    #[test]
    fn yaml_names_languages() {
        let out = render(&summary(), &config("yaml", &[])).unwrap();
        assert!(out.contains("language: Python"));
        assert!(out.contains("language: Rust"));
    }

    #[test]
    fn markdown_table() {
        let out = render(&summary(), &config("md", &["--total"])).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "| Language | Files | Code | Comment | Blank |");
        assert_eq!(lines[2], "| Python | 1 | 1 | 1 | 1 |");
        assert_eq!(lines[4], "| **TOTAL** | **3** | **16** | **3** | **4** |");
    }

    #[test]
    fn table_contains_every_row() {
        let out = render(&summary(), &config("table", &["--sort", "name", "--total"])).unwrap();
        for needle in ["Language", "Python", "Rust", "TOTAL", "15", "16"] {
            assert!(out.contains(needle), "missing {needle} in\n{out}");
        }
        let python = out.find("Python").unwrap();
        let rust = out.find("Rust").unwrap();
        assert!(python < rust);
    }

    #[test]
    fn default_order_is_first_seen() {
        let config = config("csv", &[]);
        assert_eq!(config.sort, SortKey::Seen);
        let out = render(&summary(), &config).unwrap();
        assert!(out.find("Python").unwrap() < out.find("Rust").unwrap());
    }
}
