//! One typed data row.

use crate::data::palette::ColorScale;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{HeatmapError, HeatmapResult};

/// File-name value that requests sequence-numbered output.
pub const AUTO_FILE_NAME: &str = "auto";

/// Output naming requested by one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileName {
    /// Write the frame to this file name.
    Explicit(String),
    /// Key the frame by its label and number the output files in key order.
    Auto,
}

impl FileName {
    /// Interpret the raw `fileName` column.
    pub fn parse(raw: &str) -> HeatmapResult<Self> {
        let name = raw.trim();
        if name == AUTO_FILE_NAME {
            return Ok(Self::Auto);
        }
        validate_file_name(name)?;
        Ok(Self::Explicit(name.to_string()))
    }

    /// `true` for the `auto` sentinel.
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

/// Output names must be plain file names inside the output directory.
fn validate_file_name(name: &str) -> HeatmapResult<()> {
    if name.is_empty() {
        return Err(HeatmapError::config("frame file name must be non-empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(HeatmapError::config(format!(
            "frame file name '{name}' must not contain path separators"
        )));
    }
    if name == "." || name == ".." {
        return Err(HeatmapError::config(format!(
            "frame file name '{name}' is not a file name"
        )));
    }
    Ok(())
}

/// One input row with its resolved fill color.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Requested output naming.
    pub file_name: FileName,
    /// Frame caption, `None` when the column is empty.
    pub label: Option<String>,
    /// Cell center latitude in degrees.
    pub latitude: f64,
    /// Cell center longitude in degrees.
    pub longitude: f64,
    /// Side length of the square cell in degrees.
    pub width: f64,
    /// Deviation statistic driving the color.
    pub deviations: f64,
    /// Fill color, `None` below the color scale's baseline.
    pub color: Option<Rgba8>,
}

impl Record {
    /// Build a record from the six raw columns of a data row.
    ///
    /// `line` is only used for error messages.
    pub fn from_fields(fields: [&str; 6], line: u64, scale: &ColorScale) -> HeatmapResult<Self> {
        let [file_name, label, latitude, longitude, width, deviations] = fields;

        let file_name = FileName::parse(file_name).map_err(|e| match e {
            HeatmapError::Config(msg) => HeatmapError::config(format!("line {line}: {msg}")),
            other => other,
        })?;
        let label = Some(label)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string);
        let latitude = parse_number(latitude, "latitude", line)?;
        let longitude = parse_number(longitude, "longitude", line)?;
        let width = parse_number(width, "width", line)?;
        let deviations = parse_number(deviations, "stddeviations", line)?;

        Ok(Self {
            file_name,
            label,
            latitude,
            longitude,
            width,
            deviations,
            color: scale.color_for(deviations),
        })
    }

    /// Key grouping this record into a frame: the file name, or the label in `auto` mode.
    pub fn frame_key(&self) -> &str {
        match &self.file_name {
            FileName::Explicit(name) => name,
            FileName::Auto => self.label.as_deref().unwrap_or(""),
        }
    }
}

fn parse_number(raw: &str, column: &str, line: u64) -> HeatmapResult<f64> {
    let v: f64 = raw.trim().parse().map_err(|_| {
        HeatmapError::data_parse(format!(
            "line {line}: column '{column}' is not a number: '{raw}'"
        ))
    })?;
    if !v.is_finite() {
        return Err(HeatmapError::data_parse(format!(
            "line {line}: column '{column}' must be finite, got '{raw}'"
        )));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/data/record.rs"]
mod tests;
