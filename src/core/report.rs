use crate::domain::model::Statistics;
use chrono::{DateTime, Local};

const BANNER_WIDTH: usize = 60;
pub const NO_ERRORS_MESSAGE: &str = "No errors found. All data is valid.";
pub const TIMESTAMP_PREFIX: &str = "Report generated: ";

/// Renders `value` with two decimals and a `.` separator.
///
/// Rounding works on the shortest decimal text that round-trips to `value`,
/// so `1.005` is rounded as the literal 1.005 (half-up, away from zero) and
/// prints as "1.01" regardless of its binary approximation.
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // f64's Display never uses exponent notation.
    let text = value.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(2).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - 2;
    let render = |part: &[u8]| -> String { part.iter().map(|d| char::from(b'0' + d)).collect() };
    let negative = value.is_sign_negative() && digits.iter().any(|&d| d != 0);

    format!(
        "{}{}.{}",
        if negative { "-" } else { "" },
        render(&digits[..split]),
        render(&digits[split..])
    )
}

pub fn format_report(stats: &Statistics) -> String {
    render_report(stats, Local::now())
}

pub fn render_report(stats: &Statistics, generated_at: DateTime<Local>) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut lines = vec![
        banner.clone(),
        "DATA PROCESSING REPORT".to_string(),
        banner.clone(),
        String::new(),
        format!("Total records: {}", stats.total_records()),
        format!("Valid records: {}", stats.valid_records()),
        format!("Invalid records: {}", stats.invalid_records()),
        String::new(),
    ];

    if stats.valid_records() > 0 {
        lines.push(format!("Sum: {}", format_decimal(stats.sum())));
        lines.push(format!("Min: {}", format_decimal(stats.min())));
        lines.push(format!("Max: {}", format_decimal(stats.max())));
        lines.push(format!("Average: {}", format_decimal(stats.average())));
        lines.push(String::new());
    }

    if stats.errors().is_empty() {
        lines.push(NO_ERRORS_MESSAGE.to_string());
    } else {
        lines.push("Errors found:".to_string());
        for (index, error) in stats.errors().iter().enumerate() {
            lines.push(format!("  {}. {}", index + 1, error));
        }
    }

    lines.push(String::new());
    lines.push(banner.clone());
    lines.push(format!(
        "{}{}",
        TIMESTAMP_PREFIX,
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(banner);

    lines.join("\n")
}
