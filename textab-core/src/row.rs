//! Textab row
//!
//! This module contains the current-row buffer and the conversion seam that
//! feeds it.
//!
//! `Fields` is the only row held in memory at any time. `IntoFields` decides,
//! per row representation, whether the row's own backing storage can be
//! reused or whether the fields must be collected into a fresh sequence:
//! owned string sequences (`Vec<String>`, `Box<[String]>`, `Fields`) move
//! their storage straight into the buffer, borrowed representations are
//! copied.

use serde::{Deserialize, Serialize};

/// The fields of the most recently read row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Fields(Vec<String>);

impl Fields {
    pub fn new(data: Vec<String>) -> Self {
        Fields(data)
    }

    /// get a field by ordinal
    pub fn get(&self, ordinal: usize) -> Option<&str> {
        self.0.get(ordinal).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// row width
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<String>> for Fields {
    fn from(data: Vec<String>) -> Self {
        Fields(data)
    }
}

impl From<Fields> for Vec<String> {
    fn from(fields: Fields) -> Self {
        fields.0
    }
}

/// Conversion of a producer's row into the current-row buffer.
///
/// Implementations that already own an ordered sequence of strings hand over
/// their storage without copying; everything else collects.
pub trait IntoFields {
    fn into_fields(self) -> Fields;
}

impl IntoFields for Fields {
    fn into_fields(self) -> Fields {
        self
    }
}

impl IntoFields for Vec<String> {
    fn into_fields(self) -> Fields {
        Fields(self)
    }
}

impl IntoFields for Box<[String]> {
    fn into_fields(self) -> Fields {
        Fields(self.into_vec())
    }
}

impl<'a> IntoFields for Vec<&'a str> {
    fn into_fields(self) -> Fields {
        Fields(self.into_iter().map(str::to_owned).collect())
    }
}

impl<'a> IntoFields for &'a [&'a str] {
    fn into_fields(self) -> Fields {
        Fields(self.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl<'a, const N: usize> IntoFields for [&'a str; N] {
    fn into_fields(self) -> Fields {
        Fields(self.into_iter().map(str::to_owned).collect())
    }
}
