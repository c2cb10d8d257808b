use super::*;

fn matched(pattern: Pattern, input: &str) -> Option<&str> {
    pattern.match_at(input).map(|m| m.text)
}

fn captured(pattern: Pattern, input: &str) -> Option<&str> {
    pattern.match_at(input).and_then(|m| m.capture)
}

#[test]
fn try_consume_advances_only_on_match() {
    let mut c = Cursor::new("null, 1");
    assert_eq!(c.try_consume(Pattern::Keyword("true")), None);
    assert_eq!(c.offset(), 0);
    assert_eq!(c.try_consume(Pattern::Keyword("null")), Some("null"));
    assert_eq!(c.offset(), 4);
    assert_eq!(c.try_consume(Pattern::Separator), Some(", "));
    assert_eq!(c.remaining(), "1");
    assert_eq!(c.input(), "null, 1");
}

#[test]
fn peek_match_never_advances() {
    let mut c = Cursor::new(r#" "key" : 1"#);
    let found = c.peek_match(Pattern::Key).unwrap();
    assert_eq!(found.capture, Some("key"));
    assert_eq!(c.offset(), 0);
    c.commit(&found);
    assert_eq!(c.remaining(), "1");
}

#[test]
fn whitespace_always_matches() {
    assert_eq!(matched(Pattern::Whitespace, "x"), Some(""));
    assert_eq!(matched(Pattern::Whitespace, " \t\r\n\u{3000}\u{feff}x"), Some(" \t\r\n\u{3000}\u{feff}"));
    // NEL is not whitespace here.
    assert_eq!(matched(Pattern::Whitespace, "\u{85}"), Some(""));
}

#[test]
fn separator_comma_is_optional() {
    assert_eq!(matched(Pattern::Separator, " , 2"), Some(" , "));
    assert_eq!(matched(Pattern::Separator, "  2"), Some("  "));
    assert_eq!(matched(Pattern::Separator, ",,2"), Some(","));
    assert_eq!(matched(Pattern::Separator, "2"), Some(""));
}

#[test]
fn keywords_are_whole_words() {
    assert_eq!(matched(Pattern::Keyword("true"), "true]"), Some("true"));
    assert_eq!(matched(Pattern::Keyword("true"), "true"), Some("true"));
    assert_eq!(matched(Pattern::Keyword("true"), "trueish"), None);
    assert_eq!(matched(Pattern::Keyword("null"), "null_"), None);
    assert_eq!(matched(Pattern::Keyword("null"), "null-"), Some("null"));
    assert_eq!(matched(Pattern::Keyword("false"), "fals"), None);
}

#[test]
fn brackets() {
    assert_eq!(matched(Pattern::Open('['), "[1]"), Some("["));
    assert_eq!(matched(Pattern::Open('['), " [1]"), None);
    assert_eq!(matched(Pattern::Close(']'), "  ]  ,"), Some("  ]  "));
    assert_eq!(matched(Pattern::Close('}'), "]"), None);
}

#[test]
fn quoted_string_stops_at_first_unescaped_quote() {
    assert_eq!(captured(Pattern::QuotedString, r#""""#), Some(""));
    assert_eq!(captured(Pattern::QuotedString, r#""a" "b""#), Some("a"));
    assert_eq!(
        captured(Pattern::QuotedString, r#""bar \"bar\" bar", 1"#),
        Some(r#"bar \"bar\" bar"#)
    );
    assert_eq!(matched(Pattern::QuotedString, r#""é ü""#), Some(r#""é ü""#));
}

#[test]
fn quoted_string_rejects_unterminated_and_multiline() {
    assert_eq!(matched(Pattern::QuotedString, r#""abc"#), None);
    assert_eq!(matched(Pattern::QuotedString, r#""abc\""#), None);
    assert_eq!(matched(Pattern::QuotedString, "\"a\nb\""), None);
    assert_eq!(matched(Pattern::QuotedString, "\"a\u{2028}b\""), None);
    assert_eq!(matched(Pattern::QuotedString, "abc"), None);
}

#[test]
fn escaped_backslash_before_quote_does_not_terminate() {
    // The quote after `\\` is still preceded by a backslash.
    assert_eq!(captured(Pattern::QuotedString, r#""a\\" x""#), Some(r#"a\\" x"#));
}

#[test]
fn numbers() {
    assert_eq!(matched(Pattern::Number, "0000,"), Some("0000"));
    assert_eq!(matched(Pattern::Number, "-10.01]"), Some("-10.01"));
    assert_eq!(matched(Pattern::Number, "1e-1}"), Some("1e-1"));
    assert_eq!(matched(Pattern::Number, "2E+10"), Some("2E+10"));
    assert_eq!(matched(Pattern::Number, "1.5e3x"), Some("1.5e3"));
}

#[test]
fn number_optional_parts_need_digits() {
    assert_eq!(matched(Pattern::Number, "1."), Some("1"));
    assert_eq!(matched(Pattern::Number, "1.e5"), Some("1"));
    assert_eq!(matched(Pattern::Number, "1e"), Some("1"));
    assert_eq!(matched(Pattern::Number, "1e+"), Some("1"));
    assert_eq!(matched(Pattern::Number, "-"), None);
    assert_eq!(matched(Pattern::Number, "-x"), None);
    assert_eq!(matched(Pattern::Number, ".5"), None);
    assert_eq!(matched(Pattern::Number, "+1"), None);
}

#[test]
fn strict_key_requires_quotes_and_word_characters() {
    assert_eq!(captured(Pattern::Key, r#"  "a_1"  :  2"#), Some("a_1"));
    assert_eq!(matched(Pattern::Key, "\"k\":\n\t2"), Some("\"k\":\n\t"));
    assert_eq!(captured(Pattern::Key, "foo: 1"), None);
    assert_eq!(captured(Pattern::Key, r#""foo: 1"#), None);
    assert_eq!(captured(Pattern::Key, r#""foo bar": 1"#), None);
    assert_eq!(captured(Pattern::Key, r#""": 1"#), None);
    assert_eq!(captured(Pattern::Key, r#""é": 1"#), None);
    assert_eq!(captured(Pattern::Key, r#""foo" 1"#), None);
}

#[test]
fn loose_key_tolerates_missing_quotes() {
    assert_eq!(captured(Pattern::LooseKey, "foo: 1"), Some("foo"));
    assert_eq!(captured(Pattern::LooseKey, r#""foo: 1"#), Some("foo"));
    assert_eq!(captured(Pattern::LooseKey, r#" foo" : 1"#), Some("foo"));
    assert_eq!(captured(Pattern::LooseKey, r#""foo bar": 1"#), None);
    assert_eq!(captured(Pattern::LooseKey, "foo 1"), None);
    assert_eq!(captured(Pattern::LooseKey, "'foo': 1"), None);
}

#[test]
fn character_classes() {
    assert!(is_space('\u{A0}'));
    assert!(is_space('\u{2005}'));
    assert!(!is_space('\u{85}'));
    assert!(is_word_char('_'));
    assert!(is_word_char('Z'));
    assert!(!is_word_char('é'));
    assert!(!is_word_char('-'));
}
