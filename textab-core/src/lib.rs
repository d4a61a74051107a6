//! Textab core
//!
//! A pull-based tabular reader over any lazily produced sequence of
//! delimited text rows: forward-only iteration, name and ordinal column
//! lookup, typed accessors and an on-demand schema description.

pub mod cursor;
pub mod error;
pub(crate) mod macros;
pub mod reader;
pub mod row;
pub mod schema;
pub(crate) mod util;
pub mod value;

pub use cursor::*;
pub use error::*;
pub use reader::*;
pub use row::*;
pub use schema::*;
pub use value::*;

pub use chrono;
pub use rust_decimal;
pub use uuid;
