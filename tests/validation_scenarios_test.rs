use anyhow::Result;
use record_report::core::aggregate::aggregate_reader;
use record_report::{validate, RejectReason, Statistics};
use std::io::Cursor;

fn run(content: &str, delimiter: &str) -> Result<Statistics> {
    Ok(aggregate_reader(Cursor::new(content.as_bytes().to_vec()), delimiter)?)
}

fn reasons(stats: &Statistics) -> Vec<String> {
    stats
        .errors()
        .iter()
        .map(|e| e.reason().to_string())
        .collect()
}

#[test]
fn test_valid_records() -> Result<()> {
    let stats = run("1,Item A,100.50\n2,Item B,200.75", ",")?;

    assert_eq!(stats.total_records(), 2);
    assert_eq!(stats.valid_records(), 2);
    assert_eq!(stats.invalid_records(), 0);
    assert!((stats.sum() - 301.25).abs() < 0.01);
    assert!((stats.min() - 100.50).abs() < 0.01);
    assert!((stats.max() - 200.75).abs() < 0.01);
    assert!((stats.average() - 150.625).abs() < 0.01);
    Ok(())
}

#[test]
fn test_empty_line_is_an_error() -> Result<()> {
    let stats = run("1,Item A,100.50\n\n2,Item B,200.75", ",")?;

    assert_eq!(stats.total_records(), 3);
    assert_eq!(stats.valid_records(), 2);
    assert_eq!(stats.invalid_records(), 1);
    assert_eq!(reasons(&stats), vec!["empty line"]);
    assert_eq!(stats.errors()[0].line_number(), 2);
    Ok(())
}

#[test]
fn test_wrong_field_count() -> Result<()> {
    let stats = run("1,Item A,100.50,extra_field\n2,Item B", ",")?;

    assert_eq!(stats.invalid_records(), 2);
    assert_eq!(
        reasons(&stats),
        vec![
            "wrong field count: expected 3, got 4",
            "wrong field count: expected 3, got 2"
        ]
    );
    Ok(())
}

#[test]
fn test_empty_fields() -> Result<()> {
    let stats = run(",Item A,100.50\n2,,200.75\n3,Item C,", ",")?;

    assert_eq!(stats.valid_records(), 0);
    assert_eq!(
        reasons(&stats),
        vec!["empty identifier", "empty name", "empty numeric value"]
    );
    Ok(())
}

#[test]
fn test_non_numeric_values() -> Result<()> {
    let stats = run("abc,Item A,100.50\n2,Item B,not-a-number", ",")?;

    assert_eq!(
        reasons(&stats),
        vec![
            "identifier is not an integer",
            "numeric value is not a valid number"
        ]
    );
    Ok(())
}

#[test]
fn test_negative_id() -> Result<()> {
    let stats = run("-1,Item A,100.50", ",")?;

    assert_eq!(stats.total_records(), 1);
    assert_eq!(stats.invalid_records(), 1);
    assert!(reasons(&stats)[0].contains("positive integer"));
    Ok(())
}

#[test]
fn test_semicolon_delimiter() -> Result<()> {
    let stats = run("1;Item A;100.50\n2;Item B;200.75", ";")?;

    assert_eq!(stats.valid_records(), 2);
    assert!((stats.sum() - 301.25).abs() < 0.01);
    Ok(())
}

#[test]
fn test_counts_always_balance() -> Result<()> {
    let content = "1,A,1\n\n,B,2\n3,,3\n4,D,\nx,E,5\n0,F,6\n7,G,h\n8,H,inf\n9,I,9\n1,2\n";
    let stats = run(content, ",")?;

    assert_eq!(stats.total_records(), 11);
    assert_eq!(
        stats.total_records(),
        stats.valid_records() + stats.invalid_records()
    );
    assert_eq!(stats.valid_records(), 2);
    assert_eq!(stats.errors().len(), stats.invalid_records());
    Ok(())
}

#[test]
fn test_single_deviation_yields_single_reason() {
    let cases = [
        ("   ", RejectReason::EmptyLine),
        ("1,Item", RejectReason::WrongFieldCount { got: 2 }),
        (" ,Item,1.5", RejectReason::EmptyIdentifier),
        ("1, ,1.5", RejectReason::EmptyName),
        ("1,Item, ", RejectReason::EmptyValue),
        ("one,Item,1.5", RejectReason::IdentifierNotInteger),
        ("0,Item,1.5", RejectReason::IdentifierNotPositive),
        ("1,Item,1.5.2", RejectReason::ValueNotNumber),
        ("1,Item,-infinity", RejectReason::ValueNotFinite),
    ];

    for (line, expected) in cases {
        let error = validate(line, 1, ",").expect(line);
        assert_eq!(error.reason(), expected, "line {:?}", line);
    }
    assert!(validate("1,Item,1.5", 1, ",").is_none());
}
