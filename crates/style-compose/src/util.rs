//! String helpers for embedding literal values in CSS declarations.

/// Escapes a string for use inside a double-quoted CSS string literal.
///
/// Only `"`, `\` and newline are rewritten (to `\"`, `\\` and `\A`);
/// every other character passes through unchanged.
///
/// # Example
///
/// ```rust
/// use style_compose::escape;
///
/// assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
/// assert_eq!(escape("a\nb"), r"a\Ab");
/// ```
pub fn escape(value: &str) -> String {
    let mut result = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\A"),
            other => result.push(other),
        }
    }

    result
}

/// Quotes a string for use in CSS.
///
/// ```rust
/// use style_compose::quote;
///
/// assert_eq!(quote("testing"), "\"testing\"");
/// ```
pub fn quote(value: &str) -> String {
    format!("\"{}\"", escape(value))
}

/// Wraps a string in a CSS `url()` function.
///
/// ```rust
/// use style_compose::url;
///
/// assert_eq!(url("/path.png"), "url(\"/path.png\")");
/// ```
pub fn url(value: &str) -> String {
    format!("url({})", quote(value))
}
