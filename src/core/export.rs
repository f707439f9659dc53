use crate::domain::model::{Statistics, ValidationError};
use crate::utils::error::{ReportError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RejectedRow<'a> {
    line: usize,
    content: &'a str,
    reason: String,
}

/// Serializes the rejected lines as CSV with a `line,content,reason` header.
pub fn errors_to_csv(errors: &[ValidationError]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    // serialize() only emits the header once it sees a row.
    if errors.is_empty() {
        writer.write_record(["line", "content", "reason"])?;
    }

    for error in errors {
        writer.serialize(RejectedRow {
            line: error.line_number(),
            content: error.line_content(),
            reason: error.reason().to_string(),
        })?;
    }

    writer.into_inner().map_err(|e| {
        ReportError::IoError(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))
    })
}

#[derive(Debug, Serialize)]
pub struct SummaryView<'a> {
    pub total_records: usize,
    pub valid_records: usize,
    pub invalid_records: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub errors: &'a [ValidationError],
}

impl<'a> From<&'a Statistics> for SummaryView<'a> {
    fn from(stats: &'a Statistics) -> Self {
        Self {
            total_records: stats.total_records(),
            valid_records: stats.valid_records(),
            invalid_records: stats.invalid_records(),
            sum: stats.sum(),
            min: stats.min(),
            max: stats.max(),
            average: stats.average(),
            errors: stats.errors(),
        }
    }
}

pub fn summary_to_json(stats: &Statistics) -> Result<String> {
    Ok(serde_json::to_string_pretty(&SummaryView::from(stats))?)
}
