#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The path given to [`PathMapper::match_path`](crate::PathMapper::match_path)
    /// is not matched by the pattern.
    #[error("path '{path}' does not match regex '{regex}'")]
    Match { path: String, regex: String },
    /// The number of bindings given to
    /// [`PathMapper::stringify`](crate::PathMapper::stringify) differs from the
    /// number of placeholders in the pattern.
    #[error(
        "wrong number of params: {}. required: {}",
        .supplied.join(", "),
        .required.join(", ")
    )]
    ParamCount {
        supplied: Vec<String>,
        required: Vec<String>,
    },
    #[error("no value for param `{0}`")]
    MissingParam(String),
    #[error("invalid pattern `{pattern}`: {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// True if this is a routing miss rather than a usage error.
    #[inline]
    #[must_use]
    pub fn is_no_match(&self) -> bool {
        matches!(self, Error::Match { .. })
    }
}
