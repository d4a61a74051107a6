//! Csv source error
//!
//! This module contains the error type for the CSV source and the XML
//! renderer.

use thiserror::Error;

use textab_core::CoreError;

pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    StdIOError(#[from] std::io::Error),
}
