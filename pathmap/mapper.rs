use std::{collections::HashMap, str::FromStr};

use crate::{Bindings, CompiledPattern, Error, Part, compile};

/// Matches paths against a pattern, extracts the placeholder values, and
/// builds paths from values.
///
/// The pattern is compiled once in [`PathMapper::new`]. All other operations
/// take `&self`, so a mapper can be shared between threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapper {
    pattern: String,
    compiled: CompiledPattern,
    base_path: String,
}

impl PathMapper {
    pub fn new(pattern: impl Into<String>) -> Result<Self, Error> {
        let pattern = pattern.into();
        let compiled = compile(&pattern)?;
        let base_path = compiled.base_path();
        Ok(Self {
            pattern,
            compiled,
            base_path,
        })
    }

    /// The pattern as it was passed to [`PathMapper::new`].
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub fn compiled(&self) -> &CompiledPattern {
        &self.compiled
    }

    #[inline]
    #[must_use]
    pub fn regex(&self) -> &regex::Regex {
        self.compiled.regex()
    }

    /// The static prefix of the pattern, up to the first placeholder.
    #[inline]
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Placeholder names in pattern order. A name used twice is listed twice.
    #[must_use]
    pub fn params(&self) -> Vec<&str> {
        self.compiled.bindable().filter_map(Part::id).collect()
    }

    /// True if `path` matches the pattern.
    #[must_use]
    pub fn test(&self, path: &str) -> bool {
        self.compiled.regex().is_match(path)
    }

    /// Bind the placeholders of the pattern to the corresponding parts of
    /// `path`.
    ///
    /// Returns [`Error::Match`] if the path does not match; use
    /// [`PathMapper::test`] to check first when a miss is expected.
    pub fn match_path(&self, path: &str) -> Result<Bindings, Error> {
        tracing::trace!("Matching '{path}' against {:?}", self.compiled.as_str());

        let Some(captures) = self.compiled.regex().captures(path) else {
            return Err(Error::Match {
                path: path.to_owned(),
                regex: self.compiled.to_string(),
            });
        };

        // Skip the implicit whole-string match group.
        let values = captures.iter().skip(1);
        Ok(self
            .compiled
            .bindable()
            .zip(values)
            .filter_map(|(part, value)| {
                Some((part.id()?, value.map_or("", |value| value.as_str())))
            })
            .collect())
    }

    /// Substitute `bindings` into the pattern.
    ///
    /// There must be exactly one binding per placeholder. Each placeholder
    /// token in the pattern is replaced by the value bound to its name; when a
    /// name occurs several times, the `n`-th occurrence takes the `n`-th value
    /// bound to that name if there is one. The result is not checked against
    /// the pattern.
    pub fn stringify(&self, bindings: &Bindings) -> Result<String, Error> {
        let required = self.params();
        if bindings.len() != required.len() {
            return Err(Error::ParamCount {
                supplied: bindings.keys().map(str::to_owned).collect(),
                required: required.into_iter().map(str::to_owned).collect(),
            });
        }

        tracing::trace!("Stringifying {bindings} with '{}'", self.pattern);

        let mut path = self.pattern.clone();
        let mut cursor = 0;
        let mut occurrences: HashMap<&str, usize> = HashMap::new();

        for part in self.compiled.bindable() {
            let (Some(id), Some(token)) = (part.id(), part.placeholder()) else {
                continue;
            };

            let nth = occurrences.entry(id).or_default();
            let value = bindings
                .get_all(id)
                .nth(*nth)
                .or_else(|| bindings.get(id))
                .ok_or_else(|| Error::MissingParam(id.to_owned()))?;
            *nth += 1;

            if let Some(offset) = path[cursor..].find(&token) {
                let start = cursor + offset;
                path.replace_range(start..start + token.len(), value);
                cursor = start + value.len();
            }
        }

        Ok(path)
    }
}

impl FromStr for PathMapper {
    type Err = Error;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for PathMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}
