use csv_column_sum::ColumnSumError;
use csv_column_sum::ingestion::csv::{
    ingest_csv_from_path, ingest_csv_from_reader, parse_csv_bytes, reader_builder,
};

#[test]
fn ingest_csv_from_path_happy_path() {
    let ds = ingest_csv_from_path("tests/fixtures/amounts.csv").unwrap();

    assert_eq!(ds.row_count(), 3);
    assert_eq!(ds.header().unwrap(), ["Name", "Amount", "Note"]);
    assert_eq!(
        ds.rows[1],
        vec![
            "foo".to_string(),
            "10.5".to_string(),
            "first, with comma".to_string(),
        ]
    );
    assert_eq!(ds.rows[2][2], "say \"hi\"");
}

#[test]
fn ingest_csv_from_reader_keeps_header_row() {
    let input = "a,b\n1,2\n";
    let mut rdr = reader_builder().from_reader(input.as_bytes());

    let ds = ingest_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(ds.row_count(), 2);
    assert_eq!(ds.rows[0], vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn ingest_csv_errors_on_ragged_file() {
    let err = ingest_csv_from_path("tests/fixtures/ragged.csv").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("malformed row 3"));
    assert!(msg.contains("expected 2 fields, found 1"));
}

#[test]
fn ingest_csv_errors_on_missing_file() {
    let err = ingest_csv_from_path("tests/fixtures/does_not_exist.csv").unwrap_err();
    assert!(matches!(err, ColumnSumError::CsvProcess(_)));
    assert!(err.to_string().starts_with("error processing csv"));
}

#[test]
fn parsing_same_bytes_twice_is_idempotent() {
    let bytes = std::fs::read("tests/fixtures/amounts.csv").unwrap();
    assert_eq!(parse_csv_bytes(&bytes).unwrap(), parse_csv_bytes(&bytes).unwrap());
    assert_eq!(
        parse_csv_bytes(&bytes).unwrap(),
        ingest_csv_from_path("tests/fixtures/amounts.csv").unwrap()
    );
}
