//! Text reader
//!
//! This module contains `TextReader`, the pull-based tabular reader over a
//! header list and a forward-only row cursor.
//!
//! Methods:
//! 1. new
//! 1. advance
//! 1. field_count
//! 1. name / ordinal / try_ordinal
//! 1. value / value_by_name / get_string / values / get_chars
//! 1. typed accessors (get_bool .. get_datetime)
//! 1. schema / data_type / data_type_name
//! 1. is_null / has_rows / has_more_results / depth / records_affected
//! 1. close / is_closed
//!
//! The reader is single-threaded by construction: it holds exclusive mutable
//! cursor and buffer state and every advancing operation takes `&mut self`.
//! It never reads ahead; the current row is the only row held in memory.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use itertools::Itertools;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::macros::impl_typed_accessor;
use crate::util::{cnf_err, oob_err, rls_err, uns_err};
use crate::{CoreError, CoreResult, Fields, IntoFields, RowCursor, Schema, ValueType};

/// Live state of an open reader. Dropped wholesale on `close`, which also
/// releases the cursor.
struct ReaderState<C> {
    headers: Vec<String>,
    cursor: C,
    /// cursors are not required to be fused; once exhausted, never poll again
    done: bool,
    fields: Option<Fields>,
    schema: Option<Schema>,
}

/// Pull-based tabular reader over a lazily produced sequence of text rows.
///
/// Construction does not prime the cursor: the collaborator is expected to
/// have consumed any header row from the underlying source beforehand.
/// After `close`, every operation except `close`, `is_closed` and
/// `get_bytes` fails with [`CoreError::Released`].
pub struct TextReader<C>
where
    C: RowCursor,
{
    state: Option<ReaderState<C>>,
}

impl<C> TextReader<C>
where
    C: RowCursor,
{
    /// TextReader constructor. Headers are copied once and immutable
    /// afterwards; ordinal position is the column identity.
    pub fn new<I, S>(headers: I, cursor: C) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TextReader {
            state: Some(ReaderState {
                headers: headers.into_iter().map(Into::into).collect(),
                cursor,
                done: false,
                fields: None,
                schema: None,
            }),
        }
    }

    fn inner(&self) -> CoreResult<&ReaderState<C>> {
        self.state.as_ref().ok_or_else(rls_err)
    }

    fn inner_mut(&mut self) -> CoreResult<&mut ReaderState<C>> {
        self.state.as_mut().ok_or_else(rls_err)
    }

    // ============================================================================================
    // Row advancement
    // ============================================================================================

    /// Pull the next row from the cursor into the current-row buffer.
    ///
    /// Returns `false` once the cursor is exhausted; exhaustion is terminal
    /// and clears the buffer. An absent row furnished by a misbehaving
    /// producer is skipped silently rather than failing the stream.
    pub fn advance(&mut self) -> CoreResult<bool> {
        let state = self.inner_mut()?;

        if state.done {
            return Ok(false);
        }

        loop {
            match state.cursor.next_row() {
                None => {
                    state.done = true;
                    state.fields = None;
                    return Ok(false);
                }
                // forgive and move on
                Some(None) => continue,
                Some(Some(row)) => {
                    state.fields = Some(row.into_fields());
                    return Ok(true);
                }
            }
        }
    }

    /// Width of the current row, or the header count before the first read
    /// and after exhaustion.
    pub fn field_count(&self) -> CoreResult<usize> {
        let state = self.inner()?;
        Ok(state.fields.as_ref().map_or(state.headers.len(), Fields::len))
    }

    // ============================================================================================
    // Column name & ordinal lookup
    // ============================================================================================

    /// Header at `ordinal`.
    pub fn name(&self, ordinal: usize) -> CoreResult<&str> {
        let headers = &self.inner()?.headers;
        headers
            .get(ordinal)
            .map(String::as_str)
            .ok_or_else(|| oob_err(ordinal, headers.len()))
    }

    /// First ordinal whose header matches `name`, ignoring case.
    pub fn ordinal(&self, name: &str) -> CoreResult<usize> {
        self.try_ordinal(name)?.ok_or_else(|| cnf_err(name))
    }

    /// Sentinel form of [`ordinal`](Self::ordinal): `None` instead of an error.
    pub fn try_ordinal(&self, name: &str) -> CoreResult<Option<usize>> {
        let needle = name.to_lowercase();

        Ok(self
            .inner()?
            .headers
            .iter()
            .find_position(|h| h.to_lowercase() == needle)
            .map(|(i, _)| i))
    }

    pub fn headers(&self) -> CoreResult<&[String]> {
        Ok(&self.inner()?.headers)
    }

    // ============================================================================================
    // Field access
    // ============================================================================================

    /// Textual field at `ordinal` of the current row. Out of range when no
    /// row has been read or the ordinal exceeds the current row's width.
    pub fn value(&self, ordinal: usize) -> CoreResult<&str> {
        let state = self.inner()?;
        let fields = state.fields.as_ref().map_or(&[][..], Fields::as_slice);
        fields
            .get(ordinal)
            .map(String::as_str)
            .ok_or_else(|| oob_err(ordinal, fields.len()))
    }

    /// Field looked up by column name instead of ordinal.
    pub fn value_by_name(&self, name: &str) -> CoreResult<&str> {
        self.value(self.ordinal(name)?)
    }

    /// Owned copy of the field at `ordinal`.
    pub fn get_string(&self, ordinal: usize) -> CoreResult<String> {
        self.value(ordinal).map(str::to_owned)
    }

    /// Copy the current row's fields positionally into `buffer`; returns the
    /// number copied, zero when no row is buffered.
    pub fn values(&self, buffer: &mut [String]) -> CoreResult<usize> {
        let state = self.inner()?;
        let fields = state.fields.as_ref().map_or(&[][..], Fields::as_slice);
        let count = fields.len().min(buffer.len());

        for (dst, src) in buffer.iter_mut().zip(fields.iter()) {
            dst.clone_from(src);
        }

        Ok(count)
    }

    /// Copy a window of the field at `ordinal` into `buffer`, starting at
    /// the character offset `data_offset`. Offsets past the end of the field
    /// copy nothing; otherwise the count is clamped to whatever of the field
    /// remains and to the buffer's capacity.
    pub fn get_chars(
        &self,
        ordinal: usize,
        data_offset: usize,
        buffer: &mut [char],
    ) -> CoreResult<usize> {
        let raw = self.value(ordinal)?;
        let mut count = 0;

        for (dst, src) in buffer.iter_mut().zip(raw.chars().skip(data_offset)) {
            *dst = src;
            count += 1;
        }

        Ok(count)
    }

    /// Always `false`: the source format has no null representation, an
    /// empty string is a valid value.
    pub fn is_null(&self, _ordinal: usize) -> CoreResult<bool> {
        self.inner().map(|_| false)
    }

    // ============================================================================================
    // Typed accessors. Each parses the textual field with the target type's
    // standard conversion; nothing is cached.
    // ============================================================================================

    impl_typed_accessor!(get_bool, bool, Bool);
    impl_typed_accessor!(get_char, char, Char);
    impl_typed_accessor!(get_u8, u8, U8);
    impl_typed_accessor!(get_u16, u16, U16);
    impl_typed_accessor!(get_u32, u32, U32);
    impl_typed_accessor!(get_u64, u64, U64);
    impl_typed_accessor!(get_i8, i8, I8);
    impl_typed_accessor!(get_i16, i16, I16);
    impl_typed_accessor!(get_i32, i32, I32);
    impl_typed_accessor!(get_i64, i64, I64);
    impl_typed_accessor!(get_f32, f32, F32);
    impl_typed_accessor!(get_f64, f64, F64);
    impl_typed_accessor!(get_decimal, Decimal, Decimal);
    impl_typed_accessor!(get_uuid, Uuid, Uuid);
    impl_typed_accessor!(get_date, NaiveDate, Date);
    impl_typed_accessor!(get_time, NaiveTime, Time);
    impl_typed_accessor!(get_datetime, NaiveDateTime, DateTime);

    /// Binary access on a text-only reader, rejected unconditionally.
    pub fn get_bytes(&self, _ordinal: usize) -> CoreResult<Vec<u8>> {
        Err(uns_err("binary field access"))
    }

    // ============================================================================================
    // Schema description
    // ============================================================================================

    /// The schema description: one text column descriptor per header, built
    /// on first request and cached for the reader's lifetime.
    pub fn schema(&mut self) -> CoreResult<&Schema> {
        let ReaderState {
            headers, schema, ..
        } = self.inner_mut()?;

        Ok(schema.get_or_insert_with(|| Schema::of_headers(headers)))
    }

    /// Declared type of a column; every column is text.
    pub fn data_type(&self, ordinal: usize) -> CoreResult<ValueType> {
        let headers = &self.inner()?.headers;
        if ordinal >= headers.len() {
            return Err(oob_err(ordinal, headers.len()));
        }
        Ok(ValueType::String)
    }

    pub fn data_type_name(&self, ordinal: usize) -> CoreResult<&'static str> {
        self.data_type(ordinal).map(|_| "String")
    }

    // ============================================================================================
    // Result-set protocol
    // ============================================================================================

    /// Always `true`: the reader never probes ahead to find out.
    pub fn has_rows(&self) -> CoreResult<bool> {
        self.inner().map(|_| true)
    }

    /// Always `false`: one result set per reader.
    pub fn has_more_results(&self) -> CoreResult<bool> {
        self.inner().map(|_| false)
    }

    /// Always 0: no nesting.
    pub fn depth(&self) -> CoreResult<usize> {
        self.inner().map(|_| 0)
    }

    /// Always 0: no mutation semantics.
    pub fn records_affected(&self) -> CoreResult<usize> {
        self.inner().map(|_| 0)
    }

    // ============================================================================================
    // Lifecycle
    // ============================================================================================

    /// Release the cursor, discard the current-row buffer and the cached
    /// schema. Idempotent; the cursor is dropped exactly once.
    pub fn close(&mut self) {
        self.state = None;
    }

    pub fn is_closed(&self) -> bool {
        self.state.is_none()
    }
}
