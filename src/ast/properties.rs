use std::fmt;

use crate::ast::QualifiedName;

/// Ordered property list parsed from `oslc.select` or `oslc.properties`.
///
/// Kept exactly as written; merging happens in
/// [`invert_selection`](crate::selection::invert_selection).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties {
    pub children: Vec<Property>,
}

impl Properties {
    pub fn new(children: Vec<Property>) -> Self {
        Properties { children }
    }

    /// Selection with a single `*` child, used when no clause was given.
    pub fn wildcard() -> Self {
        Properties {
            children: vec![Property::Wildcard],
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.children.iter()
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

/// One entry of a property selection.
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    /// Named property, not recursed into (`qm:testcase`)
    Identifier(QualifiedName),

    /// Every property at this level, none recursed into (`*`)
    Wildcard,

    /// Named property recursed into (`qm:state{oslc:verified_by}`)
    NestedIdentifier {
        name: QualifiedName,
        children: Properties,
    },

    /// Every property at this level, each recursed into (`*{dcterms:title}`)
    NestedWildcard { children: Properties },
}

impl Property {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Property::Wildcard | Property::NestedWildcard { .. })
    }

    /// Property name; wildcards have none.
    pub fn identifier(&self) -> Option<&QualifiedName> {
        match self {
            Property::Identifier(name) | Property::NestedIdentifier { name, .. } => Some(name),
            Property::Wildcard | Property::NestedWildcard { .. } => None,
        }
    }

    pub fn children(&self) -> Option<&Properties> {
        match self {
            Property::NestedIdentifier { children, .. } | Property::NestedWildcard { children } => {
                Some(children)
            }
            Property::Identifier(_) | Property::Wildcard => None,
        }
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, property) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", property)?;
        }
        Ok(())
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Identifier(name) => write!(f, "{}", name),
            Property::Wildcard => f.write_str("*"),
            Property::NestedIdentifier { name, children } => write!(f, "{}{{{}}}", name, children),
            Property::NestedWildcard { children } => write!(f, "*{{{}}}", children),
        }
    }
}
