use std::borrow::Cow;

/// Characters with a meaning in regular expressions. Everything else in a
/// pattern is matched as-is.
const REGEX_META: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Escape `s` so that it matches itself literally inside a regular
/// expression.
///
/// Only the characters `. * + ? ^ $ { } ( ) | [ ] \` are prefixed with a
/// backslash. Unlike [`regex::escape`], characters such as `-` and `#` are left
/// alone, so the escaped text of ordinary path segments stays readable.
#[must_use]
pub fn escape_for_regex(s: &str) -> Cow<'_, str> {
    if !s.contains(REGEX_META) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 4);
    for ch in s.chars() {
        if REGEX_META.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    Cow::Owned(escaped)
}
