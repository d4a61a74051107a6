//! Textab value
//!
//! This module contains `ValueType`, the closed set of types a textual field
//! can be converted into. The source format itself is untyped: every column
//! is text and `ValueType::String` is the only type a schema ever reports.
//! The remaining variants exist for the typed accessors, which parse the
//! textual field on demand and report the target type on failure.

use serde::{Deserialize, Serialize};

#[derive(PartialEq, Clone, Debug, Deserialize, Serialize, Eq, Hash, Default)]
pub enum ValueType {
    Bool,
    Char,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Date,
    Time,
    DateTime,
    #[default]
    String,
    Decimal,
    Uuid,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
