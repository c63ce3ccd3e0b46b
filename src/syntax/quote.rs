//! Quoting and escaping of DOT identifiers.
//!
//! Whether an identifier needs quotes is a pure function of its content:
//! barewords, numerals, HTML-like strings and already-quoted literals pass
//! through untouched, everything else is wrapped in double quotes.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

// ─── Patterns ────────────────────────────────────────────────────────────────

/// Bareword (`[a-zA-Z_][a-zA-Z0-9_]*`) or numeral (`-?(.d+|d+(.d*)?)`).
static ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z_][a-zA-Z0-9_]*|-?(?:\.[0-9]+|[0-9]+(?:\.[0-9]*)?))$")
        .expect("valid identifier pattern")
});

/// HTML-like label: starts with `<` and ends with `>`, newlines included.
static HTML_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^<.*>$").expect("valid html pattern"));

/// Already double-quoted literal with properly escaped inner quotes.
static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)^"(?:[^"\\]|\\.)*"$"#).expect("valid quoted pattern"));

/// Reserved words of the DOT grammar; matched case-insensitively.
pub const KEYWORDS: &[&str] = &["node", "edge", "graph", "digraph", "subgraph", "strict"];

// ─── Predicates ──────────────────────────────────────────────────────────────

/// True if `s` is an HTML-like string (`<...>`).
pub fn is_html(s: &str) -> bool {
    HTML_STRING.is_match(s)
}

/// True if `s` is a DOT keyword in any letter case.
pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(s))
}

/// True if `s` can be emitted as-is.
pub fn is_safe(s: &str) -> bool {
    if is_html(s) || QUOTED.is_match(s) {
        return true;
    }
    ID.is_match(s) && !is_keyword(s)
}

// ─── Quoting ─────────────────────────────────────────────────────────────────

/// Escape `s` for use inside a double-quoted DOT string.
///
/// Unescaped `"` become `\"`; a backslash directly before a newline is
/// doubled so the renderer does not read it as a line continuation.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    let mut chars = s.chars().peekable();
    let mut prev_backslash = false;
    while let Some(c) = chars.next() {
        match c {
            '"' if !prev_backslash => out.push_str("\\\""),
            '\\' if !prev_backslash && chars.peek() == Some(&'\n') => {
                out.push_str("\\\\");
                prev_backslash = false;
                continue;
            }
            _ => out.push(c),
        }
        prev_backslash = c == '\\' && !prev_backslash;
    }
    out
}

/// Return the rendered form of an identifier or attribute value.
///
/// ```
/// use dotgraph::syntax::quote::quote;
/// assert_eq!(quote("spam"), "spam");
/// assert_eq!(quote("-4.2"), "-4.2");
/// assert_eq!(quote("spam eggs"), "\"spam eggs\"");
/// assert_eq!(quote("node"), "\"node\"");
/// assert_eq!(quote(""), "\"\"");
/// ```
pub fn quote(identifier: &str) -> Cow<'_, str> {
    if is_safe(identifier) {
        Cow::Borrowed(identifier)
    } else {
        Cow::Owned(format!("\"{}\"", escape(identifier)))
    }
}

/// Quote a `node`, `node:port` or `node:port:compass` locator component-wise.
///
/// The compass part is passed through verbatim.
pub fn quote_edge(identifier: &str) -> String {
    let (node, rest) = match identifier.split_once(':') {
        Some((node, rest)) if !rest.is_empty() => (node, Some(rest)),
        Some((node, _)) => (node, None),
        None => (identifier, None),
    };
    let mut parts = vec![quote(node)];
    if let Some(rest) = rest {
        match rest.split_once(':') {
            Some((port, compass)) => {
                parts.push(quote(port));
                if !compass.is_empty() {
                    parts.push(Cow::Borrowed(compass));
                }
            }
            None => parts.push(quote(rest)),
        }
    }
    parts.join(":")
}

#[cfg(test)]
#[path = "../../tests/rust/test_syntax_quote.rs"]
mod tests;
