//! Cursor: read position over the input plus the anchored token patterns.
//!
//! Every pattern is tested at the current position only. A test either
//! matches a prefix of the unread input or fails without side effects, so the
//! parser gets one-token lookahead through [`Cursor::peek_match`] and commits
//! with [`Cursor::commit`] or [`Cursor::try_consume`].
//!
//! Invariants
//! - `pos` is a char boundary of `input`.
//! - `pos` never decreases.

#[cfg(test)]
mod tests;

/// An anchored token pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pattern {
    /// Zero or more whitespace characters. Always matches.
    Whitespace,
    /// Optional whitespace, an optional comma, optional whitespace. Always
    /// matches.
    Separator,
    /// The given word, not followed by a word character.
    Keyword(&'static str),
    /// A single opening bracket.
    Open(char),
    /// Optional whitespace, the closing bracket, optional whitespace.
    Close(char),
    /// A double-quoted span ending at the first quote not preceded by a
    /// backslash. Captures the text between the quotes.
    QuotedString,
    /// `-?\d+(\.\d+)?([eE][-+]?\d+)?`
    Number,
    /// `\s*"(\w+)"\s*:\s*`, capturing the key.
    Key,
    /// `\s*"?(\w+)"?\s*:\s*`, capturing the key.
    LooseKey,
}

/// A successful pattern test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Match<'src> {
    /// The matched prefix of the unread input.
    pub text: &'src str,
    /// The pattern's capture group, if it has one.
    pub capture: Option<&'src str>,
}

impl Pattern {
    /// Tests the pattern against the start of `rest`.
    pub(crate) fn match_at(self, rest: &str) -> Option<Match<'_>> {
        let (len, capture) = match self {
            Pattern::Whitespace => (skip_space(rest, 0), None),
            Pattern::Separator => {
                let mut i = skip_space(rest, 0);
                if rest[i..].starts_with(',') {
                    i += 1;
                }
                (skip_space(rest, i), None)
            }
            Pattern::Keyword(word) => {
                let tail = rest.strip_prefix(word)?;
                if tail.starts_with(is_word_char) {
                    return None;
                }
                (word.len(), None)
            }
            Pattern::Open(ch) => {
                if !rest.starts_with(ch) {
                    return None;
                }
                (ch.len_utf8(), None)
            }
            Pattern::Close(ch) => {
                let i = skip_space(rest, 0);
                if !rest[i..].starts_with(ch) {
                    return None;
                }
                (skip_space(rest, i + ch.len_utf8()), None)
            }
            Pattern::QuotedString => {
                let len = quoted_len(rest)?;
                (len, Some(&rest[1..len - 1]))
            }
            Pattern::Number => (number_len(rest)?, None),
            Pattern::Key => {
                let (len, key) = key_match(rest, true)?;
                (len, Some(key))
            }
            Pattern::LooseKey => {
                let (len, key) = key_match(rest, false)?;
                (len, Some(key))
            }
        };
        Some(Match {
            text: &rest[..len],
            capture,
        })
    }
}

/// Read position over an immutable input.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'src> {
    input: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(input: &'src str) -> Self {
        Self { input, pos: 0 }
    }

    /// The whole input, consumed or not.
    pub(crate) fn input(&self) -> &'src str {
        self.input
    }

    /// Byte offset of the read position.
    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    /// The unread input.
    pub(crate) fn remaining(&self) -> &'src str {
        &self.input[self.pos..]
    }

    /// Tests `pattern` at the read position without advancing.
    pub(crate) fn peek_match(&self, pattern: Pattern) -> Option<Match<'src>> {
        pattern.match_at(self.remaining())
    }

    /// Advances past a match previously returned by
    /// [`peek_match`](Self::peek_match) at the current position.
    pub(crate) fn commit(&mut self, m: &Match<'src>) {
        debug_assert!(self.remaining().starts_with(m.text));
        self.pos += m.text.len();
    }

    /// Advances past `pattern` if it matches, returning the matched text.
    /// On failure the read position is unchanged.
    pub(crate) fn try_consume(&mut self, pattern: Pattern) -> Option<&'src str> {
        let m = self.peek_match(pattern)?;
        self.commit(&m);
        Some(m.text)
    }

    /// Like [`try_consume`](Self::try_consume), returning the whole match.
    pub(crate) fn try_consume_match(&mut self, pattern: Pattern) -> Option<Match<'src>> {
        let m = self.peek_match(pattern)?;
        self.commit(&m);
        Some(m)
    }
}

/// `\s` as understood by ECMAScript regular expressions.
pub(crate) fn is_space(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// `\w`: ASCII letters, digits and underscore.
pub(crate) fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn skip_space(s: &str, from: usize) -> usize {
    s.len() - s[from..].trim_start_matches(is_space).len()
}

fn skip_word(s: &str, from: usize) -> usize {
    s.len() - s[from..].trim_start_matches(is_word_char).len()
}

fn skip_digits(s: &str, from: usize) -> usize {
    s.get(from..)
        .map_or(from, |tail| s.len() - tail.trim_start_matches(|c: char| c.is_ascii_digit()).len())
}

fn quoted_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix('"')?;
    let mut prev = '"';
    for (idx, ch) in body.char_indices() {
        if ch == '"' && prev != '\\' {
            return Some(idx + 2);
        }
        if is_line_terminator(ch) {
            return None;
        }
        prev = ch;
    }
    None
}

fn number_len(s: &str) -> Option<usize> {
    let start = usize::from(s.starts_with('-'));
    let mut end = skip_digits(s, start);
    if end == start {
        return None;
    }

    if s[end..].starts_with('.') {
        let frac_end = skip_digits(s, end + 1);
        if frac_end > end + 1 {
            end = frac_end;
        }
    }

    if s[end..].starts_with(['e', 'E']) {
        let mut exp_start = end + 1;
        if s[exp_start..].starts_with(['+', '-']) {
            exp_start += 1;
        }
        let exp_end = skip_digits(s, exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    Some(end)
}

fn key_match(s: &str, quotes_required: bool) -> Option<(usize, &str)> {
    let mut i = skip_space(s, 0);
    if s[i..].starts_with('"') {
        i += 1;
    } else if quotes_required {
        return None;
    }

    let key_start = i;
    i = skip_word(s, i);
    if i == key_start {
        return None;
    }
    let key = &s[key_start..i];

    if s[i..].starts_with('"') {
        i += 1;
    } else if quotes_required {
        return None;
    }

    i = skip_space(s, i);
    if !s[i..].starts_with(':') {
        return None;
    }
    Some((skip_space(s, i + 1), key))
}
