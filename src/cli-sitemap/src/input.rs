//! Parsing of tab-separated entry lists.
//!
//! One entry per line: `location[\tlastmod[\tchangefreq[\tpriority]]]`. Blank lines and lines
//! starting with `#` are skipped, and empty columns mean the hint is absent. CRLF line endings
//! are accepted.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, Trim};

/// One raw, unvalidated entry as read from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryLine {
    pub location: String,
    pub lastmod: Option<String>,
    pub changefreq: Option<String>,
    pub priority: Option<f64>,
}

/// Reads the entry list from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_entry_list(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read entry list {}", path.display())),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Cannot read entry list from stdin")?;
            Ok(content)
        }
    }
}

/// Parses every entry line of `content`.
///
/// Columns are trimmed and quotes carry no meaning, so a `"` is kept as part of the value.
///
/// # Errors
///
/// Returns an error if a line cannot be read as a tab-separated record.
pub fn parse_entry_lines(content: &str) -> anyhow::Result<Vec<EntryLine>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .quoting(false)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut lines = Vec::new();
    for result in reader.records() {
        let record = result.context("Failed to parse entry line")?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        lines.push(parse_entry_record(&record));
    }
    Ok(lines)
}

fn parse_entry_record(record: &StringRecord) -> EntryLine {
    let column = |index: usize| record.get(index).filter(|c| !c.is_empty()).map(str::to_string);

    let location = column(0).unwrap_or_default();
    let priority = column(3).and_then(|raw| match raw.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::debug!("Ignoring non-numeric priority {:?} for {:?}", raw, location);
            None
        }
    });

    EntryLine {
        location,
        lastmod: column(1),
        changefreq: column(2),
        priority,
    }
}
