//! Integration tests for csvgrid

use csvgrid::{CellValue, CsvError, CsvOptions, CsvParser, Record, Row};
use std::io::Write;
use tempfile::NamedTempFile;

fn row(cells: &[&str]) -> Row {
    cells.iter().map(|&c| CellValue::from(c)).collect()
}

fn numbers(cells: &[f64]) -> Row {
    cells.iter().map(|&n| CellValue::Number(n)).collect()
}

fn record(pairs: &[(&str, CellValue)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

// RFC 4180 section 2, rules 1-7

#[test]
fn test_rfc_records_end_with_crlf() {
    let mut parser = CsvParser::new("aaa,bbb,ccc\r\nzzz,yyy,xxx\r\n");
    assert_eq!(
        parser.to_table().unwrap().to_vec(),
        vec![row(&["aaa", "bbb", "ccc"]), row(&["zzz", "yyy", "xxx"])]
    );
}

#[test]
fn test_rfc_last_record_without_line_break() {
    let mut parser = CsvParser::new("aaa,bbb,ccc\r\nzzz,yyy,xxx");
    assert_eq!(
        parser.to_table().unwrap().to_vec(),
        vec![row(&["aaa", "bbb", "ccc"]), row(&["zzz", "yyy", "xxx"])]
    );
}

#[test]
fn test_rfc_header_line() {
    let mut parser = CsvParser::new(
        "field_name_1,field_name_2,field_name_3\r\naaa,bbb,ccc\r\nzzz,yyy,xxx\r\n",
    );

    assert_eq!(parser.to_table().unwrap().len(), 3);
    assert_eq!(
        parser.to_records().unwrap().to_vec(),
        vec![
            record(&[
                ("field_name_1", "aaa".into()),
                ("field_name_2", "bbb".into()),
                ("field_name_3", "ccc".into()),
            ]),
            record(&[
                ("field_name_1", "zzz".into()),
                ("field_name_2", "yyy".into()),
                ("field_name_3", "xxx".into()),
            ]),
        ]
    );
}

#[test]
fn test_rfc_optional_quotes() {
    let mut parser = CsvParser::new("\"aaa\",\"bbb\",\"ccc\"\r\nzzz,yyy,xxx");
    assert_eq!(
        parser.to_table().unwrap().to_vec(),
        vec![row(&["aaa", "bbb", "ccc"]), row(&["zzz", "yyy", "xxx"])]
    );
}

#[test]
fn test_rfc_quoted_line_break() {
    let mut parser = CsvParser::new("\"aaa\",\"b\r\nbb\",\"ccc\"\r\nzzz,yyy,xxx");
    assert_eq!(
        parser.to_table().unwrap().to_vec(),
        vec![row(&["aaa", "b\r\nbb", "ccc"]), row(&["zzz", "yyy", "xxx"])]
    );
}

#[test]
fn test_rfc_doubled_quote() {
    let mut parser = CsvParser::new(r#""aaa","b""bb","ccc""#);
    assert_eq!(
        parser.to_table().unwrap().to_vec(),
        vec![row(&["aaa", "b\"bb", "ccc"])]
    );
}

#[test]
fn test_comma_separated() {
    let mut parser = CsvParser::new("one,two,three\n1,2,3");

    assert_eq!(
        parser.to_table().unwrap().to_vec(),
        vec![row(&["one", "two", "three"]), numbers(&[1.0, 2.0, 3.0])]
    );
    assert_eq!(
        parser.to_records().unwrap().to_vec(),
        vec![record(&[
            ("one", CellValue::Number(1.0)),
            ("two", CellValue::Number(2.0)),
            ("three", CellValue::Number(3.0)),
        ])]
    );
}

#[test]
fn test_tab_and_space_separated() {
    for (data, delimiter) in [("one\ttwo\tthree\n1\t2\t3", '\t'), ("one two three\n1 2 3", ' ')] {
        let mut parser = CsvParser::new(data);
        parser.set_delimiter(delimiter);

        assert_eq!(
            parser.to_table().unwrap().to_vec(),
            vec![row(&["one", "two", "three"]), numbers(&[1.0, 2.0, 3.0])]
        );
        assert_eq!(parser.to_records().unwrap()[0]["three"], CellValue::Number(3.0));
    }
}

#[test]
fn test_data_with_qualifiers() {
    let mut parser = CsvParser::new("\"one,two,three\",\"two\",three\n123,2,3");

    assert_eq!(
        parser.to_table().unwrap().to_vec(),
        vec![row(&["one,two,three", "two", "three"]), numbers(&[123.0, 2.0, 3.0])]
    );
    assert_eq!(
        parser.to_records().unwrap()[0]["one,two,three"],
        CellValue::Number(123.0)
    );
}

#[test]
fn test_cell_containing_newline() {
    let mut parser = CsvParser::new("\"with\nnewline\",two,three\n1,2,3");

    let records = parser.to_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["with\nnewline"], CellValue::Number(1.0));
}

#[test]
fn test_malformed_data() {
    let mut parser = CsvParser::new("one,two,three\n1,2,3,4");
    let err = parser.to_table().unwrap_err();
    assert!(matches!(err, CsvError::MalformedData { .. }));
    assert!(err.to_string().starts_with("Malformed data"));

    parser.set_strict(false);
    let table = parser.to_table().unwrap();
    assert_eq!(
        table.to_vec(),
        vec![row(&["one", "two", "three"]), numbers(&[1.0, 2.0, 3.0, 4.0])]
    );
}

#[test]
fn test_lenient_embedded_qualifiers() {
    let mut parser = CsvParser::new("one,two,three\"four\"five,\"s\"i\"x\"\n1,2,3\"4\"5,\"6\"");
    let table = parser.to_table().unwrap();

    assert_eq!(table[0][2], CellValue::from("three\"four\"five"));
    assert_eq!(table[0][3], CellValue::from("s\"i\"x"));
    assert_eq!(table[1][2], CellValue::from("3\"4\"5"));
    assert_eq!(table[1][3], CellValue::Number(6.0));
}

#[test]
fn test_scalar_coercion() {
    let mut parser = CsvParser::new("n,f,t,no,nil,s,q\n42,3.14,true,false,null,abc,\"a,b\"");
    let table = parser.to_table().unwrap();

    assert_eq!(
        table[1],
        vec![
            CellValue::Number(42.0),
            CellValue::Number(3.14),
            CellValue::Bool(true),
            CellValue::Bool(false),
            CellValue::Null,
            CellValue::from("abc"),
            CellValue::from("a,b"),
        ]
    );

    // null is a value, not an empty cell
    assert_eq!(parser.to_records().unwrap()[0]["nil"], CellValue::Null);
}

#[test]
fn test_trim_only_outer_whitespace() {
    let mut parser = CsvParser::new("  a  b  ,\"  c d  \"");
    assert_eq!(parser.to_table().unwrap()[0], row(&["a  b", "c d"]));

    parser.set_trim(false);
    assert_eq!(parser.to_table().unwrap()[0], row(&["  a  b  ", "  c d  "]));
}

#[test]
fn test_empty_document() {
    let mut parser = CsvParser::new("");
    assert!(parser.to_table().unwrap().is_empty());
    assert!(parser.to_records().unwrap().is_empty());
}

#[test]
fn test_strict_rows_share_width() {
    let mut parser = CsvParser::new("a,b,c\n1\n1,2\n,,");
    let table = parser.to_table().unwrap();
    assert!(table.iter().all(|r| r.len() == 3));

    let records = parser.to_records().unwrap();
    assert_eq!(records[0], record(&[("a", CellValue::Number(1.0))]));
    assert!(records[2].is_empty());
}

#[test]
fn test_repeated_calls_are_identical() {
    let mut parser = CsvParser::new("a,b\n1,x\n2,y");
    let table = parser.to_table().unwrap().to_vec();
    let records = parser.to_records().unwrap().to_vec();

    assert_eq!(parser.to_table().unwrap().to_vec(), table);
    assert_eq!(parser.to_records().unwrap().to_vec(), records);
}

#[test]
fn test_set_data_replaces_document() {
    let mut parser = CsvParser::new("a\n1");
    assert_eq!(parser.to_records().unwrap().len(), 1);

    parser.set_data("a\n1\n2\n3");
    assert_eq!(parser.to_records().unwrap().len(), 3);

    parser.set_data(String::new());
    assert!(parser.to_table().unwrap().is_empty());
}

#[test]
fn test_open_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "id;name\n1;Alice\n2;Bob\n").unwrap();

    let options = CsvOptions::default().delimiter(';');
    let mut parser = CsvParser::open_with_options(file.path(), options).unwrap();

    let records = parser.to_records().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["name"], CellValue::from("Bob"));
}

#[test]
fn test_open_missing_file() {
    let err = CsvParser::open("definitely/not/here.csv").err().unwrap();
    assert!(matches!(err, CsvError::Io(_)));
}

#[cfg(feature = "serde")]
#[test]
fn test_serialize_records() {
    let mut parser = CsvParser::new("one,two,three,four\n1,x,true,null");
    let records = parser.to_records().unwrap();

    let json = serde_json::to_string(&records[0]).unwrap();
    assert_eq!(json, r#"{"one":1.0,"two":"x","three":true,"four":null}"#);
}
