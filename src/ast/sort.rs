use std::fmt;

use crate::ast::QualifiedName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// `+`
    Ascending,
    /// `-`
    Descending,
}

impl SortDirection {
    pub fn sign(&self) -> char {
        match self {
            SortDirection::Ascending => '+',
            SortDirection::Descending => '-',
        }
    }
}

/// Sort key of an `oslc.orderBy` clause.
///
/// A key with `nested` terms sorts through a relation: `+qm:tested_by{-oslc:name}`
/// orders by the name of the related resource.
#[derive(Debug, Clone, PartialEq)]
pub struct SortTerm {
    pub direction: SortDirection,
    pub property: QualifiedName,
    pub nested: Option<Vec<SortTerm>>,
}

impl SortTerm {
    pub fn new(direction: SortDirection, property: QualifiedName) -> Self {
        SortTerm {
            direction,
            property,
            nested: None,
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.direction == SortDirection::Ascending
    }
}

/// Renders sort terms as an `oslc.orderBy` expression.
pub fn render_sort_terms(terms: &[SortTerm]) -> String {
    terms
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl fmt::Display for SortTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.sign(), self.property)?;
        if let Some(nested) = &self.nested {
            write!(f, "{{{}}}", render_sort_terms(nested))?;
        }
        Ok(())
    }
}
