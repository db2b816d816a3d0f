use std::fmt;

use crate::{
    ast::{Operator, QualifiedName},
    value::Value,
};

/// Conjunction of terms: the root of a parsed `oslc.where` clause, and the
/// body of a nested term.
///
/// # Example
/// ```text
/// oslc:create!="Bob" and qm:verified!=true
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundTerm {
    pub terms: Vec<SimpleTerm>,
}

impl CompoundTerm {
    pub fn new(terms: Vec<SimpleTerm>) -> Self {
        CompoundTerm { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimpleTerm> {
        self.terms.iter()
    }
}

impl<'a> IntoIterator for &'a CompoundTerm {
    type Item = &'a SimpleTerm;
    type IntoIter = std::slice::Iter<'a, SimpleTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Single term of a where clause.
#[derive(Debug, Clone, PartialEq)]
pub enum SimpleTerm {
    /// Property compared with a literal
    ///
    /// # Example
    /// ```text
    /// qm:duration>=10.4
    /// ```
    Comparison {
        property: QualifiedName,
        operator: Operator,
        operand: Value,
    },

    /// Set membership
    ///
    /// # Example
    /// ```text
    /// qm:state in ["Done","Open"]
    /// ```
    In {
        property: QualifiedName,
        operands: Vec<Value>,
    },

    /// Terms applied to the resource reached through a property
    ///
    /// # Example
    /// ```text
    /// oslc:verified_by{oslc:owner="Steve" and qm:duration=-47.0}
    /// ```
    Nested {
        property: QualifiedName,
        children: CompoundTerm,
    },
}

impl SimpleTerm {
    pub fn property(&self) -> &QualifiedName {
        match self {
            SimpleTerm::Comparison { property, .. }
            | SimpleTerm::In { property, .. }
            | SimpleTerm::Nested { property, .. } => property,
        }
    }
}

impl fmt::Display for CompoundTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

impl fmt::Display for SimpleTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimpleTerm::Comparison {
                property,
                operator,
                operand,
            } => write!(f, "{}{}{}", property, operator, operand),
            SimpleTerm::In { property, operands } => {
                write!(f, "{} in [", property)?;
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", operand)?;
                }
                f.write_str("]")
            }
            SimpleTerm::Nested { property, children } => write!(f, "{}{{{}}}", property, children),
        }
    }
}
