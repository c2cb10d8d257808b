//! Value dispatcher and the array/object grammar.
//!
//! Overview
//! - [`Parser::parse_value`] skips whitespace and tries, in order: `false`,
//!   `true`, `null`, a string, a number, an array, an object. The first match
//!   wins; no match means "no value here" and the enclosing context decides
//!   which error that is.
//! - Open arrays and objects live on an explicit stack of [`Frame`]s rather
//!   than on the call stack, so nesting depth is limited by memory only.
//! - Separators between elements and entries are optional commas.
//!
//! Errors
//! - The first error aborts the parse; there is no resynchronization.

mod cursor;
mod scalars;


use cursor::{Cursor, Pattern};
use tracing::{debug, trace};

use crate::{
    Array, Map, Value,
    error::{ErrorCode, Result, SyntaxError},
    options::ParserOptions,
};

/// What the dispatcher found at the read position.
enum Start {
    Scalar(Value),
    Open(Frame),
}

/// An array or object whose closing bracket has not been seen yet.
enum Frame {
    Array(Array),
    /// `key` holds the key whose value is being parsed.
    Object { map: Map, key: String },
}

impl Frame {
    fn add(&mut self, value: Value) {
        match self {
            Frame::Array(items) => items.push(value),
            Frame::Object { map, key } => {
                map.insert(core::mem::take(key), value);
            }
        }
    }

    fn into_value(self) -> Value {
        match self {
            Frame::Array(items) => Value::Array(items),
            Frame::Object { map, .. } => Value::Object(map),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The container expects another value at the read position.
    NeedValue,
    /// The closing bracket was consumed.
    Closed,
}

pub(crate) struct Parser<'src> {
    cursor: Cursor<'src>,
    options: ParserOptions,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(input: &'src str, options: ParserOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
        }
    }

    /// Parses the first value of the input. Trailing content is ignored.
    pub(crate) fn parse_document(mut self) -> Result<Option<Value>> {
        trace!(len = self.cursor.input().len(), "parsing document");
        let mut stack: Vec<Frame> = Vec::new();

        'value: loop {
            let mut completed = match self.parse_value() {
                Some(Start::Scalar(value)) => value,
                Some(Start::Open(mut frame)) => {
                    trace!(depth = stack.len() + 1, offset = self.cursor.offset(), "open");
                    match self.advance(&mut frame)? {
                        Step::NeedValue => {
                            stack.push(frame);
                            continue 'value;
                        }
                        Step::Closed => frame.into_value(),
                    }
                }
                None => {
                    let code = match stack.last() {
                        None => {
                            trace!(offset = self.cursor.offset(), "no value");
                            return Ok(None);
                        }
                        Some(Frame::Array(_)) => ErrorCode::ArraySyntax,
                        Some(Frame::Object { .. }) => ErrorCode::MissingValue,
                    };
                    return Err(self.error(code));
                }
            };

            // Hand the finished value to its parent, closing parents whose
            // bracket follows immediately.
            while let Some(mut parent) = stack.pop() {
                parent.add(completed);
                self.cursor.try_consume(Pattern::Separator);
                match self.advance(&mut parent)? {
                    Step::NeedValue => {
                        stack.push(parent);
                        continue 'value;
                    }
                    Step::Closed => completed = parent.into_value(),
                }
            }

            trace!(
                trailing = self.cursor.remaining().len(),
                "document complete"
            );
            return Ok(Some(completed));
        }
    }

    /// Tries each value form at the read position.
    fn parse_value(&mut self) -> Option<Start> {
        self.cursor.try_consume(Pattern::Whitespace);

        if self.cursor.try_consume(Pattern::Keyword("false")).is_some() {
            return Some(Start::Scalar(Value::Boolean(false)));
        }
        if self.cursor.try_consume(Pattern::Keyword("true")).is_some() {
            return Some(Start::Scalar(Value::Boolean(true)));
        }
        if self.cursor.try_consume(Pattern::Keyword("null")).is_some() {
            return Some(Start::Scalar(Value::Null));
        }
        if let Some(found) = self.cursor.try_consume_match(Pattern::QuotedString) {
            let raw = found.capture.unwrap_or_default();
            return Some(Start::Scalar(Value::String(scalars::strip_backslashes(raw))));
        }
        if let Some(lexeme) = self.cursor.try_consume(Pattern::Number) {
            return scalars::number(lexeme).map(|n| Start::Scalar(Value::Number(n)));
        }
        if self.cursor.try_consume(Pattern::Open('[')).is_some() {
            return Some(Start::Open(Frame::Array(Array::new())));
        }
        if self.cursor.try_consume(Pattern::Open('{')).is_some() {
            return Some(Start::Open(Frame::Object {
                map: Map::new(),
                key: String::new(),
            }));
        }
        None
    }

    /// Closes `frame` if its bracket follows, otherwise positions the cursor
    /// at the start of its next value.
    fn advance(&mut self, frame: &mut Frame) -> Result<Step> {
        match frame {
            Frame::Array(_) => {
                if self.cursor.try_consume(Pattern::Close(']')).is_some() {
                    trace!(offset = self.cursor.offset(), "close array");
                    return Ok(Step::Closed);
                }
                Ok(Step::NeedValue)
            }
            Frame::Object { key, .. } => {
                if self.cursor.try_consume(Pattern::Close('}')).is_some() {
                    trace!(offset = self.cursor.offset(), "close object");
                    return Ok(Step::Closed);
                }
                if let Some(found) = self.cursor.peek_match(Pattern::Key) {
                    self.cursor.commit(&found);
                    found.capture.unwrap_or_default().clone_into(key);
                    return Ok(Step::NeedValue);
                }
                // Only used to explain the failure; a loose key never parses.
                if self.cursor.peek_match(Pattern::LooseKey).is_some() {
                    return Err(self.error(ErrorCode::MissingKeyQuotes));
                }
                Err(self.error(ErrorCode::ObjectSyntax))
            }
        }
    }

    fn error(&self, code: ErrorCode) -> SyntaxError {
        let err = SyntaxError::new(
            code,
            self.cursor.input(),
            self.cursor.offset(),
            &self.options,
        );
        debug!(
            %code,
            offset = err.offset(),
            line = err.line(),
            column = err.column(),
            "syntax error"
        );
        err
    }
}
