//! Textab CSV source
//!
//! Collaborator glue around `textab-core`: a CSV-backed row cursor and a
//! console XML renderer for a materialized reader.

pub mod cursor;
pub mod error;
pub mod xml;

pub use cursor::*;
pub use error::*;
pub use xml::*;
