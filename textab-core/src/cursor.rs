//! Textab cursor
//!
//! The contract of the external row producer: a lazy, finite, forward-only,
//! single-pass sequence of rows. An item of `None` stands for a row the
//! producer failed to furnish; the reader tolerates it by skipping instead
//! of failing the whole stream.
//!
//! Any iterator of `Option<R>` where `R` converts into the current-row
//! buffer fulfils the contract, so plain `Vec<Option<R>>` iterators work in
//! tests and any streaming tokenizer works in production.

use crate::IntoFields;

/// Forward-only producer of rows consumed by [`TextReader`].
///
/// [`TextReader`]: crate::TextReader
pub trait RowCursor {
    type Row: IntoFields;

    /// Pull the next row. `None` means the cursor is exhausted;
    /// `Some(None)` is a furnished-but-absent row to be skipped.
    fn next_row(&mut self) -> Option<Option<Self::Row>>;
}

impl<R, I> RowCursor for I
where
    R: IntoFields,
    I: Iterator<Item = Option<R>>,
{
    type Row = R;

    fn next_row(&mut self) -> Option<Option<R>> {
        self.next()
    }
}
