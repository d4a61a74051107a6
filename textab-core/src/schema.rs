//! Schema
//!
//! The schema description of a text reader: one descriptor per header, in
//! header order, independent of row data. Every column is variable-length
//! text; the nullability, uniqueness and key flags keep their unknown/false
//! defaults because the source format carries no such metadata.

use serde::{Deserialize, Serialize};

use crate::ValueType;

/// column descriptor: name, one-based ordinal, type & provider flags
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ColumnDesc {
    pub name: String,
    /// one-based, as provider schema tables report it
    pub ordinal: usize,
    pub dtype: ValueType,
    /// -1 means variable length
    pub size: i64,
    pub is_long: bool,
    pub allow_null: bool,
    pub is_read_only: bool,
    pub is_row_version: bool,
    pub is_unique: bool,
    pub is_key: bool,
    pub is_auto_increment: bool,
}

impl ColumnDesc {
    /// descriptor of a variable-length text column at a zero-based position
    pub fn text<T>(name: T, position: usize) -> Self
    where
        T: Into<String>,
    {
        ColumnDesc {
            name: name.into(),
            ordinal: position + 1,
            dtype: ValueType::String,
            size: -1,
            is_long: false,
            allow_null: false,
            is_read_only: false,
            is_row_version: false,
            is_unique: false,
            is_key: false,
            is_auto_increment: false,
        }
    }
}

/// Schema
///
/// An ordered collection of `ColumnDesc`, one per header.
#[derive(PartialEq, Eq, Clone, Default, Debug, Serialize, Deserialize)]
pub struct Schema(Vec<ColumnDesc>);

impl Schema {
    pub fn new() -> Self {
        Schema(Vec::new())
    }

    /// build the descriptor table for a header list, O(header count)
    pub fn of_headers(headers: &[String]) -> Self {
        Schema(
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| ColumnDesc::text(h.as_str(), i))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColumnDesc> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnDesc> {
        self.0.iter()
    }
}

impl AsRef<[ColumnDesc]> for Schema {
    fn as_ref(&self) -> &[ColumnDesc] {
        &self.0
    }
}

impl From<Schema> for Vec<ColumnDesc> {
    fn from(schema: Schema) -> Self {
        schema.0
    }
}

#[cfg(test)]
mod test_schema {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_of_headers() {
        let schema = Schema::of_headers(&headers(&["id", "name", "score"]));

        assert_eq!(schema.len(), 3);

        let col = schema.get(1).unwrap();
        assert_eq!(col.name, "name");
        assert_eq!(col.ordinal, 2);
        assert_eq!(col.dtype, ValueType::String);
        assert_eq!(col.size, -1);
        assert!(!col.is_key);
        assert!(!col.is_unique);
        assert!(!col.allow_null);

        let names = schema.iter().map(|c| c.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["id", "name", "score"]);
    }

    #[test]
    fn test_empty_headers() {
        let schema = Schema::of_headers(&[]);
        assert!(schema.is_empty());
    }

    #[test]
    fn test_serialize() {
        let schema = Schema::of_headers(&headers(&["id"]));
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("\"name\":\"id\""));
        assert!(json.contains("\"ordinal\":1"));
        assert!(json.contains("\"dtype\":\"String\""));
    }
}
