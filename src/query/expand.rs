//! Relation expansion directive
//!
//! Tells the server to inline related entities in each row instead of
//! returning references. Paths may be dotted to reach nested relations,
//! e.g. `positions.assortment`.

/// Ordered set of relation paths to expand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expand {
    paths: Vec<String>,
}

impl Expand {
    /// Create an expand directive from relation paths
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Add another relation path
    #[must_use]
    pub fn and(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Relation paths in insertion order
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Render as the `expand` query parameter value
    pub fn to_param(&self) -> String {
        self.paths.join(",")
    }
}

impl<S: Into<String>> From<S> for Expand {
    fn from(path: S) -> Self {
        Self {
            paths: vec![path.into()],
        }
    }
}
