//! Xml rendering
//!
//! Renders a materialized reader as an XML document: the schema description
//! first, then every remaining row. The reader is drained in the process;
//! this is the downstream structure-loader of the reader contract, it only
//! ever calls `schema` once and pulls rows forward.

use std::io::Write;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use textab_core::{RowCursor, TextReader};

use crate::CsvResult;

/// Write `reader`'s schema and all of its remaining rows to `out` as an XML
/// document.
pub fn write_xml<C, W>(reader: &mut TextReader<C>, out: W) -> CsvResult<()>
where
    C: RowCursor,
    W: Write,
{
    let mut writer = Writer::new_with_indent(out, b' ', 2);

    writer.write_event(Event::Start(BytesStart::new("table")))?;

    let schema = reader.schema()?.clone();
    writer.write_event(Event::Start(BytesStart::new("schema")))?;
    for col in schema.iter() {
        let ordinal = col.ordinal.to_string();
        let dtype = col.dtype.to_string();

        let mut elem = BytesStart::new("column");
        elem.push_attribute(("name", col.name.as_str()));
        elem.push_attribute(("ordinal", ordinal.as_str()));
        elem.push_attribute(("type", dtype.as_str()));
        writer.write_event(Event::Empty(elem))?;
    }
    writer.write_event(Event::End(BytesEnd::new("schema")))?;

    let headers = reader.headers()?.to_vec();
    while reader.advance()? {
        writer.write_event(Event::Start(BytesStart::new("row")))?;

        for i in 0..reader.field_count()? {
            let mut elem = BytesStart::new("field");
            // fields past the header list have no name to report
            if let Some(name) = headers.get(i) {
                elem.push_attribute(("name", name.as_str()));
            }
            writer.write_event(Event::Start(elem))?;
            writer.write_event(Event::Text(BytesText::new(reader.value(i)?)))?;
            writer.write_event(Event::End(BytesEnd::new("field")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("row")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("table")))?;

    Ok(())
}

#[cfg(test)]
mod test_xml {
    use super::*;

    #[test]
    fn test_document_shape() {
        let rows = vec![Some(vec!["1", "Ann & Co"]), Some(vec!["2", "Bob"])];
        let mut reader = TextReader::new(["id", "name"], rows.into_iter());

        let mut out = Vec::new();
        write_xml(&mut reader, &mut out).unwrap();
        let doc = String::from_utf8(out).unwrap();

        assert!(doc.starts_with("<table>"));
        assert!(doc.ends_with("</table>"));
        assert!(doc.contains(r#"<column name="id" ordinal="1" type="String"/>"#));
        assert!(doc.contains(r#"<column name="name" ordinal="2" type="String"/>"#));
        assert!(doc.contains(r#"<field name="id">1</field>"#));
        // text content is escaped
        assert!(doc.contains(r#"<field name="name">Ann &amp; Co</field>"#));
        assert_eq!(doc.matches("<row>").count(), 2);
    }

    #[test]
    fn test_reader_is_drained() {
        let rows = vec![Some(vec!["1"])];
        let mut reader = TextReader::new(["id"], rows.into_iter());

        write_xml(&mut reader, Vec::new()).unwrap();
        assert!(!reader.advance().unwrap());
    }
}
