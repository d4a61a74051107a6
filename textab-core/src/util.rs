//! Textab util
//!
//! error helpers

use crate::CoreError;

/// out of range error
pub(crate) fn oob_err(ordinal: usize, width: usize) -> CoreError {
    CoreError::OutOfRange(ordinal, width)
}

/// column not found error
pub(crate) fn cnf_err(name: &str) -> CoreError {
    CoreError::ColumnNotFound(name.to_owned())
}

/// reader released error
pub(crate) fn rls_err() -> CoreError {
    CoreError::Released
}

/// unsupported operation error
pub(crate) fn uns_err(name: &'static str) -> CoreError {
    CoreError::Unsupported(name)
}
