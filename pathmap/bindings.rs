use std::fmt;

use serde::ser::SerializeMap as _;

/// Values bound to the placeholders of a pattern.
///
/// Entries are kept in the order the placeholders appear in the pattern. A
/// pattern may use the same name more than once (`[element]/[...element]`),
/// in which case each occurrence gets its own entry; [`Bindings::get`] returns
/// the first one.
///
/// Equality compares entries in order. Bindings produced by
/// [`PathMapper::match_path`](crate::PathMapper::match_path) are always in
/// capture order, so two matches of the same pattern compare as expected;
/// hand-built bindings with the same entries in another order are not equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bindings {
    entries: Vec<(String, String)>,
}

impl Bindings {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.entries.push((id.into(), value.into()));
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first value bound to `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, value)| &**value)
    }

    /// All values bound to `id`, in pattern order.
    pub fn get_all<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a str> {
        self.entries
            .iter()
            .filter(move |(key, _)| key == id)
            .map(|(_, value)| &**value)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == id)
    }

    /// The value at position `index`, counting every entry.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(_, value)| &**value)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (&**key, &**value))
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|(key, _)| &**key)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.iter().map(|(_, value)| &**value)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Bindings {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Bindings {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.entries.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Bindings {
    #[inline]
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl IntoIterator for Bindings {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value:?}")?;
        }
        f.write_str("}")
    }
}

impl serde::Serialize for Bindings {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
