//! Core Error
//!
//! This module contains the error type shared by the whole reader contract.
//! One variant per failure class: released reader, out of range ordinal,
//! unknown column name, failed textual conversion and unsupported operation.

use std::fmt::Display;

use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("reader has been released")]
    Released,

    #[error("ordinal {0} out of range, width is {1}")]
    OutOfRange(usize, usize),

    #[error("column \"{0}\" not found")]
    ColumnNotFound(String),

    #[error("parse {0} into {1} error")]
    Parse(String, String),

    #[error("{0} is unsupported")]
    Unsupported(&'static str),
}

impl CoreError {
    pub fn new_parse_error<T1, T2>(content: T1, target: T2) -> CoreError
    where
        T1: Display,
        T2: Display,
    {
        CoreError::Parse(content.to_string(), target.to_string())
    }
}
