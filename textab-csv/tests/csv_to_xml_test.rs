//! End to end: CSV fixture through the reader contract and out as XML.

use textab_core::{chrono::NaiveDate, CoreError, TextReader};
use textab_csv::{write_xml, CsvCursor};

const CSV_FILE_PATH: &str = "../mock/data.csv";

#[test]
fn test_read_fixture_through_reader() {
    let cursor = CsvCursor::from_path(CSV_FILE_PATH).unwrap();
    let headers = cursor.headers().to_vec();
    assert_eq!(headers, ["id", "name", "joined", "score"]);

    let mut reader = TextReader::new(headers, cursor);

    assert!(reader.advance().unwrap());
    assert_eq!(reader.value(0).unwrap(), "1");
    assert_eq!(reader.value_by_name("NAME").unwrap(), "Ann");
    assert_eq!(
        reader.get_date(2).unwrap(),
        NaiveDate::from_ymd_opt(2016, 3, 1).unwrap()
    );
    assert_eq!(reader.get_f64(3).unwrap(), 3.5);

    assert!(reader.advance().unwrap());
    assert!(reader.advance().unwrap());
    assert_eq!(reader.get_i32(0).unwrap(), 3);
    assert!(!reader.advance().unwrap());

    reader.close();
    assert!(matches!(reader.advance(), Err(CoreError::Released)));
}

#[test]
fn test_fixture_to_xml() {
    let cursor = CsvCursor::from_path(CSV_FILE_PATH).unwrap();
    let headers = cursor.headers().to_vec();
    let mut reader = TextReader::new(headers, cursor);

    let mut out = Vec::new();
    write_xml(&mut reader, &mut out).unwrap();
    let doc = String::from_utf8(out).unwrap();

    assert!(doc.contains(r#"<column name="joined" ordinal="3" type="String"/>"#));
    assert!(doc.contains(r#"<field name="name">Cyd</field>"#));
    assert_eq!(doc.matches("<row>").count(), 3);
}
