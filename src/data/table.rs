//! Tab-separated table reader.

use std::io::Read;
use std::path::Path;

use crate::data::palette::ColorScale;
use crate::data::record::Record;
use crate::foundation::error::{HeatmapError, HeatmapResult};

/// Required header columns, matched case-insensitively.
pub const HEADER: [&str; 6] = [
    "fileName",
    "label",
    "latitude",
    "longitude",
    "width",
    "stddeviations",
];

/// Read a tab-separated data table from `path`.
pub fn read_records_path(path: &Path, scale: &ColorScale) -> HeatmapResult<Vec<Record>> {
    let file = std::fs::File::open(path).map_err(|e| {
        HeatmapError::config(format!("cannot open data file '{}': {e}", path.display()))
    })?;
    read_records(std::io::BufReader::new(file), scale)
}

/// Read a tab-separated data table: one header row followed by data rows.
///
/// The header must be exactly [`HEADER`]; blank lines are skipped; any malformed row fails the
/// whole read.
pub fn read_records(reader: impl Read, scale: &ColorScale) -> HeatmapResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut rows = reader.records();
    let header = loop {
        match rows.next() {
            None => return Err(HeatmapError::config("data file is empty: missing header row")),
            Some(row) => {
                let row = row.map_err(|e| HeatmapError::config(format!("header row: {e}")))?;
                if !is_blank(&row) {
                    break row;
                }
            }
        }
    };
    validate_header(&header)?;

    let mut out = Vec::new();
    for row in rows {
        let row = row.map_err(|e| HeatmapError::data_parse(e.to_string()))?;
        if is_blank(&row) {
            continue;
        }
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        if row.len() != HEADER.len() {
            return Err(HeatmapError::data_parse(format!(
                "line {line}: expected 6 tab-separated fields, found {}",
                row.len()
            )));
        }
        let fields = [&row[0], &row[1], &row[2], &row[3], &row[4], &row[5]];
        out.push(Record::from_fields(fields, line, scale)?);
    }

    tracing::debug!(records = out.len(), "read data table");
    Ok(out)
}

fn is_blank(row: &csv::StringRecord) -> bool {
    row.iter().all(|f| f.trim().is_empty())
}

fn validate_header(row: &csv::StringRecord) -> HeatmapResult<()> {
    let ok = row.len() == HEADER.len()
        && row
            .iter()
            .zip(HEADER)
            .all(|(got, want)| got.trim().eq_ignore_ascii_case(want));
    if ok {
        return Ok(());
    }
    let line = row.iter().collect::<Vec<_>>().join("\t");
    Err(HeatmapError::config(format!(
        "improper header row: '{line}', expected '{}'",
        HEADER.join("\t")
    )))
}
