use std::fmt;

use indexmap::IndexMap;

/// Table from namespace prefix to namespace URI, built from an `oslc.prefix`
/// clause and used to resolve qualified names in the other clauses.
///
/// Entries keep their declaration order so the map renders back to the
/// clause it came from.
///
/// # Example
/// ```
/// use oslc_query::PrefixMap;
///
/// let mut prefixes = PrefixMap::new();
/// prefixes.insert("qm", "http://qm.example.com/ns/");
/// assert_eq!(prefixes.resolve("qm"), Some("http://qm.example.com/ns/"));
/// assert_eq!(prefixes.to_string(), "qm=<http://qm.example.com/ns/>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrefixMap {
    entries: IndexMap<String, String>,
}

impl PrefixMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `prefix`, replacing any earlier binding in place.
    ///
    /// Returns the namespace previously bound to the prefix.
    pub fn insert(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Option<String> {
        self.entries.insert(prefix.into(), namespace.into())
    }

    pub fn resolve(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.entries.contains_key(prefix)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PrefixMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = PrefixMap::new();
        for (prefix, namespace) in iter {
            map.insert(prefix, namespace);
        }
        map
    }
}

impl fmt::Display for PrefixMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (prefix, namespace)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}=<{}>", prefix, namespace)?;
        }
        Ok(())
    }
}
