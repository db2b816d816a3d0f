use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// Namespace-qualified name, written `prefix:local` in query clauses.
///
/// The prefix is kept only for rendering and diagnostics: two names are equal
/// when their namespace and local name are equal, whatever prefix they were
/// written with.
///
/// # Example
/// ```
/// use oslc_query::QualifiedName;
///
/// let name = QualifiedName::new("http://qm.example.com/ns/", "testcase");
/// assert_eq!(name.uri(), "http://qm.example.com/ns/testcase");
/// ```
#[derive(Debug, Clone, Eq)]
pub struct QualifiedName {
    pub namespace: String,
    pub local: String,
    pub prefix: Option<String>,
}

impl QualifiedName {
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        QualifiedName {
            namespace: namespace.into(),
            local: local.into(),
            prefix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Full property URI: namespace followed by local name.
    pub fn uri(&self) -> String {
        format!("{}{}", self.namespace, self.local)
    }
}

impl PartialEq for QualifiedName {
    fn eq(&self, other: &Self) -> bool {
        self.namespace == other.namespace && self.local == other.local
    }
}

impl Hash for QualifiedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.namespace.hash(state);
        self.local.hash(state);
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{}:{}", prefix, self.local),
            None => write!(f, "<{}{}>", self.namespace, self.local),
        }
    }
}
