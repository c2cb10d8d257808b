//! A single-pass parser for a forgiving, JSON-like grammar.
//!
//! `relaxjson` turns text into a [`Value`] tree. It accepts a few common
//! mistakes that strict JSON parsers reject and reports the rest with a
//! classified [`SyntaxError`] that carries a snippet of the surrounding input.
//!
//! Grammar notes:
//! - Commas between array elements and object entries are optional, so
//!   `[1 2 3]` parses the same as `[1, 2, 3]`.
//! - Object keys must be double-quoted and made of word characters
//!   (`[A-Za-z0-9_]`). An unquoted key is reported as
//!   [`ErrorCode::MissingKeyQuotes`].
//! - Backslashes inside strings are removed, not interpreted: `"a\"b"` is
//!   `a"b`, and `"a\nb"` is `anb`.
//! - Content after the first complete value is ignored.
//!
//! ```
//! use relaxjson::{Value, parse};
//!
//! let value = parse(r#"{"answer": 42, "tags": ["a" "b"]}"#)?.unwrap();
//! assert_eq!(value.get("answer"), Some(&Value::Number(42.0)));
//! assert_eq!(value.to_string(), r#"{"answer":42,"tags":["a","b"]}"#);
//! # Ok::<(), relaxjson::SyntaxError>(())
//! ```
//!
//! Errors carry their code, message, position and context:
//!
//! ```
//! use relaxjson::{ErrorCode, parse};
//!
//! let err = parse("{foo: 1}").unwrap_err();
//! assert_eq!(err.code(), ErrorCode::MissingKeyQuotes);
//! assert_eq!(err.to_string(), "missing quotes near key (ERROR_OBJ_2) at 1:2");
//! assert_eq!(err.context(), "{<<HERE>>foo: 1}");
//! ```

mod error;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorCode, Result, SyntaxError};
pub use options::ParserOptions;
pub use value::{Array, Map, Value};

/// Parses `input` with the default [`ParserOptions`].
///
/// Returns `Ok(None)` when no value starts at the beginning of the input
/// (after optional whitespace), for example on empty input.
///
/// # Errors
///
/// Returns a [`SyntaxError`] at the first malformed array or object.
pub fn parse(input: &str) -> Result<Option<Value>> {
    parse_with_options(input, ParserOptions::default())
}

/// Parses `input`, rendering error context according to `options`.
///
/// # Errors
///
/// Returns a [`SyntaxError`] at the first malformed array or object.
pub fn parse_with_options(input: &str, options: ParserOptions) -> Result<Option<Value>> {
    parser::Parser::new(input, options).parse_document()
}
