use std::collections::HashSet;

/// Registry of type names declared so far.
///
/// Filled in source order while a file is scanned, so a lookup only sees
/// types declared earlier. Append-only; one instance per file unless the
/// caller threads a single registry through several files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRegistry {
    names: HashSet<String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type name. Returns `false` if it was already known.
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
