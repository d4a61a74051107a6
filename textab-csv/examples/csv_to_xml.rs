//! Read a CSV file and print it to stdout as an XML document, schema
//! included. Defaults to the workspace fixture when no path is given.

use std::io;

use textab_core::TextReader;
use textab_csv::{write_xml, CsvCursor};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mock/data.csv".to_owned());

    let cursor = CsvCursor::from_path(&path)?;
    let headers = cursor.headers().to_vec();

    let mut reader = TextReader::new(headers, cursor);
    write_xml(&mut reader, io::stdout().lock())?;
    reader.close();

    Ok(())
}
