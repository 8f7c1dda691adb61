use std::fmt;

use winnow::{ModalResult, Parser, combinator::delimited, token::take_while};

use crate::escape_for_regex;

/// Capture group for a single path segment.
pub const SINGLE_CAPTURE: &str = r"([\w\.\-]+)";

/// Capture group for one or more path segments.
pub const MULTI_CAPTURE: &str = r"([\w\/\.\-]+)";

/// One `/`-separated segment of a pattern, together with the regex fragment
/// that matches it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Part {
    /// Literal text, matched verbatim.
    Static { literal: String, fragment: String },
    /// `[id]suffix`: binds the characters of a single segment.
    Single {
        id: String,
        suffix: String,
        fragment: String,
    },
    /// `[...id]suffix`: binds one or more segments, including the separators
    /// between them.
    Multi {
        id: String,
        suffix: String,
        fragment: String,
    },
}

/// Regex fragment matching `text` verbatim.
///
/// The compiled regex runs with Unicode mode off so that `\w` only covers
/// ASCII, and non-ASCII literals are rejected in that mode. Each run of
/// non-ASCII characters is therefore wrapped in a `(?u:...)` group.
fn literal_fragment(text: &str) -> String {
    let escaped = escape_for_regex(text);
    if escaped.is_ascii() {
        return escaped.into_owned();
    }

    let mut fragment = String::with_capacity(escaped.len() + 8);
    let mut in_unicode_run = false;
    for ch in escaped.chars() {
        if ch.is_ascii() == in_unicode_run {
            fragment.push_str(if in_unicode_run { ")" } else { "(?u:" });
            in_unicode_run = !in_unicode_run;
        }
        fragment.push(ch);
    }
    if in_unicode_run {
        fragment.push(')');
    }
    fragment
}

/// Placeholder names are ASCII alphanumeric.
fn placeholder_name<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric()).parse_next(input)
}

/// Literal text that may trail a placeholder within its segment.
fn placeholder_suffix<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(0.., |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
    })
    .parse_next(input)
}

fn multi_placeholder<'s>(input: &mut &'s str) -> ModalResult<(&'s str, &'s str)> {
    (
        delimited("[...", placeholder_name, "]"),
        placeholder_suffix,
    )
        .parse_next(input)
}

fn single_placeholder<'s>(input: &mut &'s str) -> ModalResult<(&'s str, &'s str)> {
    (delimited("[", placeholder_name, "]"), placeholder_suffix).parse_next(input)
}

impl Part {
    /// Classify a single pattern segment (which must not contain `/`).
    ///
    /// The placeholder grammar has to cover the whole segment. Anything else,
    /// including text with a placeholder in the middle of it, is static.
    #[must_use]
    pub fn parse(segment: &str) -> Self {
        if let Ok((id, suffix)) = multi_placeholder.parse(segment) {
            Part::Multi {
                id: id.to_owned(),
                suffix: suffix.to_owned(),
                fragment: format!("{MULTI_CAPTURE}{}", literal_fragment(suffix)),
            }
        } else if let Ok((id, suffix)) = single_placeholder.parse(segment) {
            Part::Single {
                id: id.to_owned(),
                suffix: suffix.to_owned(),
                fragment: format!("{SINGLE_CAPTURE}{}", literal_fragment(suffix)),
            }
        } else {
            Part::Static {
                literal: segment.to_owned(),
                fragment: literal_fragment(segment),
            }
        }
    }

    /// The regex fragment matching this segment.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> &str {
        match self {
            Part::Static { fragment, .. }
            | Part::Single { fragment, .. }
            | Part::Multi { fragment, .. } => fragment,
        }
    }

    /// The placeholder name, or `None` for static parts.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Part::Static { .. } => None,
            Part::Single { id, .. } | Part::Multi { id, .. } => Some(id),
        }
    }

    /// True for placeholders, i.e. parts that capture a value.
    #[inline]
    #[must_use]
    pub fn is_bindable(&self) -> bool {
        !matches!(self, Part::Static { .. })
    }

    /// The placeholder token as written in the pattern, without its suffix:
    /// `[id]` or `[...id]`.
    #[must_use]
    pub fn placeholder(&self) -> Option<String> {
        match self {
            Part::Static { .. } => None,
            Part::Single { id, .. } => Some(format!("[{id}]")),
            Part::Multi { id, .. } => Some(format!("[...{id}]")),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Static { literal, .. } => f.write_str(literal),
            Part::Single { id, suffix, .. } => write!(f, "[{id}]{suffix}"),
            Part::Multi { id, suffix, .. } => write!(f, "[...{id}]{suffix}"),
        }
    }
}
