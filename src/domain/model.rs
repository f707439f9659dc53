use serde::Serialize;
use std::fmt;

/// Every field line is expected to split into exactly this many parts.
pub const EXPECTED_FIELDS: usize = 3;

/// Why a line was rejected. The set is closed: anything not matching one of
/// these is a valid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    EmptyLine,
    WrongFieldCount { got: usize },
    EmptyIdentifier,
    EmptyName,
    EmptyValue,
    IdentifierNotInteger,
    IdentifierNotPositive,
    ValueNotNumber,
    ValueNotFinite,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::EmptyLine => f.write_str("empty line"),
            RejectReason::WrongFieldCount { got } => write!(
                f,
                "wrong field count: expected {}, got {}",
                EXPECTED_FIELDS, got
            ),
            RejectReason::EmptyIdentifier => f.write_str("empty identifier"),
            RejectReason::EmptyName => f.write_str("empty name"),
            RejectReason::EmptyValue => f.write_str("empty numeric value"),
            RejectReason::IdentifierNotInteger => f.write_str("identifier is not an integer"),
            RejectReason::IdentifierNotPositive => {
                f.write_str("identifier must be a positive integer")
            }
            RejectReason::ValueNotNumber => f.write_str("numeric value is not a valid number"),
            RejectReason::ValueNotFinite => f.write_str("numeric value is NaN or infinite"),
        }
    }
}

/// Strips leading and trailing spaces and control characters (anything at or
/// below U+0020). Unicode spaces such as U+00A0 are kept as data.
pub fn trim_line(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// A rejected input line. `line_content` is stored trimmed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    line_number: usize,
    line_content: String,
    #[serde(serialize_with = "serialize_reason")]
    reason: RejectReason,
}

fn serialize_reason<S: serde::Serializer>(
    reason: &RejectReason,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

impl ValidationError {
    pub fn new(line_number: usize, line_content: &str, reason: RejectReason) -> Self {
        Self {
            line_number,
            line_content: trim_line(line_content).to_string(),
            reason,
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn line_content(&self) -> &str {
        &self.line_content
    }

    pub fn reason(&self) -> RejectReason {
        self.reason
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {}: \"{}\" - {}",
            self.line_number, self.line_content, self.reason
        )
    }
}

/// A line that passed every check.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: i32,
    pub name: String,
    pub value: f64,
}

/// Running totals for one run.
///
/// `min`/`max`/`average` report `0.0` while no valid record has been seen;
/// the report only prints them when `valid_records() > 0`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    total_records: usize,
    valid_records: usize,
    invalid_records: usize,
    sum: f64,
    min: f64,
    max: f64,
    errors: Vec<ValidationError>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_total(&mut self) {
        self.total_records += 1;
    }

    pub fn add_valid_record(&mut self, value: f64) {
        if self.valid_records == 0 {
            self.min = value;
            self.max = value;
        } else {
            if value < self.min {
                self.min = value;
            }
            if value > self.max {
                self.max = value;
            }
        }
        self.valid_records += 1;
        self.sum += value;
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.invalid_records += 1;
        self.errors.push(error);
    }

    pub fn total_records(&self) -> usize {
        self.total_records
    }

    pub fn valid_records(&self) -> usize {
        self.valid_records
    }

    pub fn invalid_records(&self) -> usize {
        self.invalid_records
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn min(&self) -> f64 {
        if self.valid_records > 0 {
            self.min
        } else {
            0.0
        }
    }

    pub fn max(&self) -> f64 {
        if self.valid_records > 0 {
            self.max
        } else {
            0.0
        }
    }

    pub fn average(&self) -> f64 {
        if self.valid_records > 0 {
            self.sum / self.valid_records as f64
        } else {
            0.0
        }
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}
