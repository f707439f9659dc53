//! Line validation.
//!
//! Each check runs in a fixed order and the first failure wins, so a line
//! with both an empty name and a bad id reports only the one checked first.

use crate::domain::model::{trim_line, Record, RejectReason, ValidationError, EXPECTED_FIELDS};

type Check<T> = std::result::Result<T, RejectReason>;

/// Validates one line, returning the parsed record or the first failed check.
pub fn validate_line(
    line: &str,
    line_number: usize,
    delimiter: &str,
) -> std::result::Result<Record, ValidationError> {
    parse_record(line, delimiter).map_err(|reason| ValidationError::new(line_number, line, reason))
}

/// Option-shaped variant of [`validate_line`]: `None` means the line is valid.
pub fn validate(line: &str, line_number: usize, delimiter: &str) -> Option<ValidationError> {
    validate_line(line, line_number, delimiter).err()
}

pub fn parse_record(line: &str, delimiter: &str) -> Check<Record> {
    let line = non_empty_line(line)?;
    let [id, name, value] = split_fields(line, delimiter)?;

    let id = require_field(id, RejectReason::EmptyIdentifier)?;
    let name = require_field(name, RejectReason::EmptyName)?;
    let value = require_field(value, RejectReason::EmptyValue)?;

    let id = parse_id(id)?;
    let value = parse_value(value)?;

    Ok(Record {
        id,
        name: name.to_string(),
        value,
    })
}

fn non_empty_line(line: &str) -> Check<&str> {
    let trimmed = trim_line(line);
    if trimmed.is_empty() {
        return Err(RejectReason::EmptyLine);
    }
    Ok(trimmed)
}

// `str::split` keeps trailing empty pieces, so "1,A," yields three fields.
fn split_fields<'a>(line: &'a str, delimiter: &str) -> Check<[&'a str; EXPECTED_FIELDS]> {
    let fields: Vec<&str> = line.split(delimiter).collect();
    let got = fields.len();
    fields
        .try_into()
        .map_err(|_| RejectReason::WrongFieldCount { got })
}

fn require_field(field: &str, reason: RejectReason) -> Check<&str> {
    let trimmed = trim_line(field);
    if trimmed.is_empty() {
        return Err(reason);
    }
    Ok(trimmed)
}

fn parse_id(raw: &str) -> Check<i32> {
    let id: i32 = raw
        .parse()
        .map_err(|_| RejectReason::IdentifierNotInteger)?;
    if id <= 0 {
        return Err(RejectReason::IdentifierNotPositive);
    }
    Ok(id)
}

fn parse_value(raw: &str) -> Check<f64> {
    let value: f64 = raw.parse().map_err(|_| RejectReason::ValueNotNumber)?;
    // f64's parser accepts "inf", "infinity" and "NaN".
    if !value.is_finite() {
        return Err(RejectReason::ValueNotFinite);
    }
    Ok(value)
}
