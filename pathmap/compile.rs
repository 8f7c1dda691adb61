use crate::{Error, Part};

/// Separator between segment fragments in the compiled expression.
const SEPARATOR: &str = r"\/";

/// A pattern split into parts, and the regex that matches whole paths
/// against it.
///
/// The regex is anchored at both ends and accepts an optional leading and
/// trailing `/` around the pattern body. Capture group `k + 1` holds the value
/// of the `k`-th bindable part.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    parts: Box<[Part]>,
    regex: regex::Regex,
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.parts == other.parts && self.regex.as_str() == other.regex.as_str()
    }
}

impl Eq for CompiledPattern {}

impl std::hash::Hash for CompiledPattern {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.parts.hash(state);
        self.regex.as_str().hash(state);
    }
}

/// Compile a pattern such as `/pages/[...page].page.json`.
///
/// A leading `/` in the pattern is not a segment of its own.
pub fn compile(pattern: &str) -> Result<CompiledPattern, Error> {
    let mut segments = pattern.split('/').peekable();
    // Leading slash, or the empty pattern.
    _ = segments.next_if_eq(&"");

    let parts: Box<[Part]> = segments.map(Part::parse).collect();

    let mut regex_pattern = String::from(r"^\/?");
    for (index, part) in parts.iter().enumerate() {
        if index != 0 {
            regex_pattern.push_str(SEPARATOR);
        }
        regex_pattern.push_str(part.fragment());
    }
    regex_pattern.push_str(r"\/?$");

    // Placeholders match ASCII word characters only.
    let regex = regex::RegexBuilder::new(&regex_pattern)
        .unicode(false)
        .build()
        .map_err(|source| Error::Regex {
            pattern: pattern.to_owned(),
            source,
        })?;

    tracing::debug!("Compiled pattern '{pattern}' to {:?}", regex.as_str());

    Ok(CompiledPattern { parts, regex })
}

impl CompiledPattern {
    /// Every part of the pattern, static parts included, in pattern order.
    #[inline]
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// The parts that capture a value.
    pub fn bindable(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter().filter(|part| part.is_bindable())
    }

    #[inline]
    #[must_use]
    pub fn regex(&self) -> &regex::Regex {
        &self.regex
    }

    /// Source text of the compiled regex.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Literal text of the static parts before the first placeholder, joined
    /// with `/` and rooted at `/`.
    #[must_use]
    pub fn base_path(&self) -> String {
        let mut base = String::from("/");
        let literals = self.parts.iter().map_while(|part| match part {
            Part::Static { literal, .. } => Some(literal),
            _ => None,
        });
        for (index, literal) in literals.enumerate() {
            if index != 0 {
                base.push('/');
            }
            base.push_str(literal);
        }
        base
    }
}

impl std::fmt::Display for CompiledPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.regex.as_str())
    }
}
