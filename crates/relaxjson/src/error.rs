use core::fmt;

use thiserror::Error;

use crate::options::ParserOptions;

/// Result type for parsing operations.
pub type Result<T> = core::result::Result<T, SyntaxError>;

/// Classification of a syntax error.
///
/// The set is closed: every error the parser raises carries exactly one of
/// these codes, and each code maps to a fixed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// An object body holds neither a key nor something key-shaped before
    /// its closing brace (`ERROR_OBJ_1`).
    ObjectSyntax,
    /// A key was found without surrounding double quotes, or with only one
    /// of them (`ERROR_OBJ_2`).
    MissingKeyQuotes,
    /// A key and colon were found but no value follows (`ERROR_OBJ_4`).
    MissingValue,
    /// An array element position holds no parsable value before the closing
    /// bracket (`ERROR_ARRAY_1`).
    ArraySyntax,
}

impl ErrorCode {
    /// Returns the stable code string, e.g. `"ERROR_OBJ_2"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ObjectSyntax => "ERROR_OBJ_1",
            Self::MissingKeyQuotes => "ERROR_OBJ_2",
            Self::MissingValue => "ERROR_OBJ_4",
            Self::ArraySyntax => "ERROR_ARRAY_1",
        }
    }

    /// Returns the human-readable message for this code.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ObjectSyntax | Self::ArraySyntax => "syntax error",
            Self::MissingKeyQuotes => "missing quotes near key",
            Self::MissingValue => "missing value for key",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified syntax error with positional context.
///
/// `offset` is a byte offset into the input; `line` and `column` are
/// 1-based and counted in characters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} ({code}) at {line}:{column}", .code.message())]
pub struct SyntaxError {
    code: ErrorCode,
    offset: usize,
    line: usize,
    column: usize,
    context: String,
}

impl SyntaxError {
    /// Builds an error for a failure at byte `offset` of `input`.
    pub(crate) fn new(
        code: ErrorCode,
        input: &str,
        offset: usize,
        options: &ParserOptions,
    ) -> Self {
        let (line, column) = line_column(&input[..offset]);
        Self {
            code,
            offset,
            line,
            column,
            context: render_context(input, offset, options),
        }
    }

    /// The error classification.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The message associated with [`code`](Self::code).
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.code.message()
    }

    /// Byte offset into the input at which parsing failed.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of the failure.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the failure, in characters.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// The input surrounding the failure with a marker at the failing
    /// position.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }
}

fn line_column(consumed: &str) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;
    for ch in consumed.chars() {
        if ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

/// Up to `context_radius` characters on each side of `offset`, joined by the
/// marker.
fn render_context(input: &str, offset: usize, options: &ParserOptions) -> String {
    let (before, after) = input.split_at(offset);
    let radius = options.context_radius;

    let start = before
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(offset, |(idx, _)| idx);
    let end = after
        .char_indices()
        .nth(radius)
        .map_or(after.len(), |(idx, _)| idx);

    let mut out = String::with_capacity(offset - start + options.context_marker.len() + end);
    out.push_str(&before[start..]);
    out.push_str(options.context_marker);
    out.push_str(&after[..end]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_at(input: &str, offset: usize, radius: usize) -> SyntaxError {
        let options = ParserOptions {
            context_radius: radius,
            ..Default::default()
        };
        SyntaxError::new(ErrorCode::ArraySyntax, input, offset, &options)
    }

    #[test]
    fn codes_and_messages() {
        assert_eq!(ErrorCode::ObjectSyntax.as_str(), "ERROR_OBJ_1");
        assert_eq!(ErrorCode::ObjectSyntax.message(), "syntax error");
        assert_eq!(ErrorCode::MissingKeyQuotes.as_str(), "ERROR_OBJ_2");
        assert_eq!(
            ErrorCode::MissingKeyQuotes.message(),
            "missing quotes near key"
        );
        assert_eq!(ErrorCode::MissingValue.as_str(), "ERROR_OBJ_4");
        assert_eq!(ErrorCode::MissingValue.message(), "missing value for key");
        assert_eq!(ErrorCode::ArraySyntax.as_str(), "ERROR_ARRAY_1");
        assert_eq!(ErrorCode::ArraySyntax.message(), "syntax error");
    }

    #[test]
    fn display_includes_message_code_and_position() {
        let err = error_at("[1,\n  }", 6, 100);
        assert_eq!(err.to_string(), "syntax error (ERROR_ARRAY_1) at 2:3");
    }

    #[test]
    fn context_marks_offset() {
        let err = error_at("[1, }", 4, 100);
        assert_eq!(err.context(), "[1, <<HERE>>}");
        assert_eq!(err.offset(), 4);
    }

    #[test]
    fn context_is_bounded_by_radius() {
        let err = error_at("abcdefghij", 5, 2);
        assert_eq!(err.context(), "de<<HERE>>fg");
    }

    #[test]
    fn context_at_edges() {
        assert_eq!(error_at("abc", 0, 2).context(), "<<HERE>>ab");
        assert_eq!(error_at("abc", 3, 2).context(), "bc<<HERE>>");
        assert_eq!(error_at("", 0, 100).context(), "<<HERE>>");
    }

    #[test]
    fn context_counts_characters_not_bytes() {
        let input = "ééé|ééé";
        let err = error_at(input, input.find('|').unwrap(), 2);
        assert_eq!(err.context(), "éé<<HERE>>|é");
        assert_eq!(err.column(), 4);
    }

    #[test]
    fn zero_radius_keeps_only_marker() {
        assert_eq!(error_at("abc", 1, 0).context(), "<<HERE>>");
    }
}
