//! Textab core macros
//!
//! This module contains the macro used by the reader:
//! 1. impl_typed_accessor

/// impl a typed accessor on `TextReader`. Used in `reader.rs`.
///
/// Equivalent to:
///
/// ```rust,ignore
/// pub fn get_bool(&self, ordinal: usize) -> CoreResult<bool> {
///     let raw = self.value(ordinal)?;
///     raw.parse::<bool>()
///         .map_err(|_| CoreError::new_parse_error(raw, ValueType::Bool))
/// }
/// ```
macro_rules! impl_typed_accessor {
    ($method:ident, $ty:ty, $vtype:ident) => {
        pub fn $method(&self, ordinal: usize) -> CoreResult<$ty> {
            let raw = self.value(ordinal)?;
            raw.parse::<$ty>()
                .map_err(|_| CoreError::new_parse_error(raw, ValueType::$vtype))
        }
    };
}

pub(crate) use impl_typed_accessor;
