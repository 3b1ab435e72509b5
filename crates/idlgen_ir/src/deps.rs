//! External crate dependency list.

/// Deduplicated list of external crate names.
///
/// Iteration order is first-seen order: the first occurrence of a name fixes its position and later duplicates
/// are dropped. It never depends on hashing or sorting, so the same input always yields the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternCrates {
    names: Vec<String>,
}

impl ExternCrates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a crate; returns `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExternCrates {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut crates = Self::new();
        for name in iter {
            crates.insert(name);
        }
        crates
    }
}

impl<'a> IntoIterator for &'a ExternCrates {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter().map(String::as_str as fn(&'a String) -> &'a str)
    }
}
