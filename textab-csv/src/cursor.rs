//! Csv cursor
//!
//! A row cursor backed by a CSV tokenizer. The header record is consumed up
//! front and surrendered to the caller, so the data records alone flow
//! through the reader contract. A record the tokenizer rejects surfaces as
//! an absent row, which the reader skips; the tokenizer is flexible about
//! row width, leaving width mismatches to the reader's own bounds checks.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecordsIntoIter};

use crate::CsvResult;

pub const DEFAULT_DELIMITER: u8 = b',';

pub struct CsvCursor<R>
where
    R: Read,
{
    headers: Vec<String>,
    records: StringRecordsIntoIter<R>,
}

impl CsvCursor<File> {
    /// open a CSV file with the default delimiter
    pub fn from_path<P>(path: P) -> CsvResult<Self>
    where
        P: AsRef<Path>,
    {
        Self::new(File::open(path)?)
    }
}

impl<R> CsvCursor<R>
where
    R: Read,
{
    /// CsvCursor constructor; reads the header record immediately
    pub fn new(rdr: R) -> CsvResult<Self> {
        Self::with_delimiter(rdr, DEFAULT_DELIMITER)
    }

    pub fn with_delimiter(rdr: R, delimiter: u8) -> CsvResult<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(rdr);

        let headers = reader.headers()?.iter().map(str::to_owned).collect();

        Ok(CsvCursor {
            headers,
            records: reader.into_records(),
        })
    }

    /// the header record consumed at construction
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R> Iterator for CsvCursor<R>
where
    R: Read,
{
    type Item = Option<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records
            .next()
            .map(|rec| rec.ok().map(|r| r.iter().map(str::to_owned).collect()))
    }
}

#[cfg(test)]
mod test_cursor {
    use super::*;

    const DATA: &str = "id,name\n1,Ann\n2,Bob\n";

    #[test]
    fn test_headers_then_rows() {
        let mut cursor = CsvCursor::new(DATA.as_bytes()).unwrap();

        assert_eq!(cursor.headers(), ["id", "name"]);

        assert_eq!(
            cursor.next(),
            Some(Some(vec!["1".to_owned(), "Ann".to_owned()]))
        );
        assert_eq!(
            cursor.next(),
            Some(Some(vec!["2".to_owned(), "Bob".to_owned()]))
        );
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_custom_delimiter() {
        let mut cursor = CsvCursor::with_delimiter("a;b\n1;2\n".as_bytes(), b';').unwrap();

        assert_eq!(cursor.headers(), ["a", "b"]);
        assert_eq!(
            cursor.next(),
            Some(Some(vec!["1".to_owned(), "2".to_owned()]))
        );
    }

    #[test]
    fn test_ragged_rows_pass_through() {
        let mut cursor = CsvCursor::new("a,b\n1\n1,2,3\n".as_bytes()).unwrap();

        assert_eq!(cursor.next(), Some(Some(vec!["1".to_owned()])));
        assert_eq!(
            cursor.next(),
            Some(Some(vec![
                "1".to_owned(),
                "2".to_owned(),
                "3".to_owned()
            ]))
        );
    }
}
