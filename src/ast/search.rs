use std::fmt;

/// Phrases of an `oslc.searchTerms` clause, quotes stripped.
///
/// Never empty when produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerms {
    terms: Vec<String>,
}

impl SearchTerms {
    pub(crate) fn new(terms: Vec<String>) -> Self {
        SearchTerms { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.terms
    }
}

impl<'a> IntoIterator for &'a SearchTerms {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl fmt::Display for SearchTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "\"{}\"", term)?;
        }
        Ok(())
    }
}
