//! HTML escaping for generated `<head>` fragments.

use std::borrow::Cow;

/// Characters escaped in text content.
const TEXT_CHARS: [char; 3] = ['<', '>', '&'];

/// Characters escaped inside quoted attribute values.
const ATTR_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

#[inline]
fn entity(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape text content, e.g. inside `<title>`.
///
/// Borrows when nothing needs escaping.
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &TEXT_CHARS)
}

/// Escape an attribute value (both quote styles).
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ATTR_CHARS)
}

fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match entity(c).filter(|_| chars.contains(&c)) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_borrows_plain_text() {
        assert!(matches!(escape("hello"), Cow::Borrowed("hello")));
        assert!(matches!(escape_attr("hello"), Cow::Borrowed("hello")));
    }

    #[test]
    fn test_escape_text_keeps_quotes() {
        assert_eq!(escape("@Betree's <Blog> & more"), "@Betree's &lt;Blog&gt; &amp; more");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("@Betree's Blog"), "@Betree&#39;s Blog");
        assert_eq!(escape_attr(r#"a "b" & c"#), "a &quot;b&quot; &amp; c");
    }
}
