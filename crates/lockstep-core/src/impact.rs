use indexmap::IndexSet;

/// Names of the packages that must receive the new version.
///
/// Built fresh for every bump. Iteration follows insertion order so reports
/// list packages in the order they were discovered; equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImpactSet {
    names: IndexSet<String>,
}

impl ImpactSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a package name. Returns `false` when it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ImpactSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for ImpactSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}
