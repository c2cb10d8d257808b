/// Configuration options for the parser.
///
/// Options only affect how errors are rendered; the accepted grammar is the
/// same for every configuration.
///
/// # Examples
///
/// ```rust
/// use relaxjson::{ParserOptions, parse_with_options};
///
/// let options = ParserOptions {
///     context_radius: 3,
///     context_marker: " >>> ",
/// };
/// let err = parse_with_options(r#"[1, 2, }"#, options).unwrap_err();
/// assert_eq!(err.context(), "2,  >>> }");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Number of characters of input kept on each side of the failure
    /// position in [`SyntaxError::context`](crate::SyntaxError::context).
    ///
    /// # Default
    ///
    /// `100`
    pub context_radius: usize,

    /// Text inserted at the failure position in
    /// [`SyntaxError::context`](crate::SyntaxError::context).
    ///
    /// # Default
    ///
    /// `"<<HERE>>"`
    pub context_marker: &'static str,
}

impl ParserOptions {
    /// Default value of [`context_radius`](Self::context_radius).
    pub const DEFAULT_CONTEXT_RADIUS: usize = 100;

    /// Default value of [`context_marker`](Self::context_marker).
    pub const DEFAULT_CONTEXT_MARKER: &'static str = "<<HERE>>";
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            context_radius: Self::DEFAULT_CONTEXT_RADIUS,
            context_marker: Self::DEFAULT_CONTEXT_MARKER,
        }
    }
}
