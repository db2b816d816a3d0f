//! Property-selection inversion.
//!
//! A parsed `oslc.select` / `oslc.properties` tree is written from the
//! client's point of view. Serializers need the opposite view: given a
//! property URI, should the value be emitted, and should the related
//! resource be recursed into? [`invert_selection`] builds that lookup
//! structure.
//!
//! The result is canonical. Sibling order in the clause never changes it,
//! and entries that say no more than their level's wildcard are dropped, so
//! two clauses selecting the same thing invert to equal values.

use std::{collections::BTreeMap, mem};

use tracing::trace;

use crate::ast::{Properties, Property};

/// Selection recorded for one named property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Emit the property, do not recurse
    Singleton,
    /// Emit the property and recurse with the nested selection
    Nested(InvertedSelection),
}

impl Selection {
    fn join(self, other: Selection) -> Selection {
        match (self, other) {
            (Selection::Singleton, selection) | (selection, Selection::Singleton) => selection,
            (Selection::Nested(mut lhs), Selection::Nested(rhs)) => {
                lhs.merge(rhs);
                Selection::Nested(lhs)
            }
        }
    }
}

/// Wildcard carried by one level of an [`InvertedSelection`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Wildcard {
    /// Only named properties are selected
    #[default]
    None,
    /// `*`: every property passes through, none is recursed into
    Singleton,
    /// `*{...}`: every property passes through and inherits the common
    /// nested selection
    ///
    /// The common selection is the inversion of the braces' contents, so
    /// `*{*}` nests a selection carrying only [`Wildcard::Singleton`].
    Nested(Box<InvertedSelection>),
}

impl Wildcard {
    /// True when unnamed properties at this level are selected.
    pub fn selects_all(&self) -> bool {
        !matches!(self, Wildcard::None)
    }

    /// Nested selection shared by every property at this level.
    pub fn common(&self) -> Option<&InvertedSelection> {
        match self {
            Wildcard::Nested(common) => Some(common.as_ref()),
            Wildcard::None | Wildcard::Singleton => None,
        }
    }

    fn join(&mut self, other: Wildcard) {
        *self = match (mem::take(self), other) {
            (Wildcard::None, wildcard) | (wildcard, Wildcard::None) => wildcard,
            (Wildcard::Singleton, wildcard) | (wildcard, Wildcard::Singleton) => wildcard,
            (Wildcard::Nested(mut lhs), Wildcard::Nested(rhs)) => {
                lhs.merge(*rhs);
                Wildcard::Nested(lhs)
            }
        };
    }
}

/// Answer of [`InvertedSelection::select`] for one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selected<'a> {
    /// Emit the value without recursing
    Singleton,
    /// Emit the value and recurse with this selection
    Nested(&'a InvertedSelection),
}

/// Map from full property URI to [`Selection`], plus the level's [`Wildcard`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvertedSelection {
    entries: BTreeMap<String, Selection>,
    wildcard: Wildcard,
}

impl InvertedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wildcard(&self) -> &Wildcard {
        &self.wildcard
    }

    pub fn has_singleton_wildcard(&self) -> bool {
        self.wildcard.selects_all()
    }

    pub fn common_nested(&self) -> Option<&InvertedSelection> {
        self.wildcard.common()
    }

    /// Explicit entry for a property, ignoring the wildcard.
    pub fn get(&self, property_uri: &str) -> Option<&Selection> {
        self.entries.get(property_uri)
    }

    pub fn contains(&self, property_uri: &str) -> bool {
        self.entries.contains_key(property_uri)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.entries.iter().map(|(uri, selection)| (uri.as_str(), selection))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing at all is selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.wildcard == Wildcard::None
    }

    /// Decides whether a property is emitted, and how.
    ///
    /// Named entries win; unnamed properties fall back to the wildcard.
    /// `None` means the property is not selected.
    pub fn select(&self, property_uri: &str) -> Option<Selected<'_>> {
        if let Some(selection) = self.entries.get(property_uri) {
            return Some(match selection {
                Selection::Singleton => Selected::Singleton,
                Selection::Nested(nested) => Selected::Nested(nested),
            });
        }

        match &self.wildcard {
            Wildcard::None => None,
            Wildcard::Singleton => Some(Selected::Singleton),
            Wildcard::Nested(common) => Some(Selected::Nested(common)),
        }
    }

    /// Deep-merges `other` into `self`.
    ///
    /// A key only in `other`, or only a singleton in `self`, takes `other`'s
    /// selection; nested selections merge recursively; wildcards combine.
    pub fn merge(&mut self, other: InvertedSelection) {
        if *self == other {
            return;
        }
        for (uri, selection) in other.entries {
            self.insert(uri, selection);
        }
        self.wildcard.join(other.wildcard);
        self.normalize();
    }

    fn insert(&mut self, uri: String, selection: Selection) {
        let merged = match self.entries.remove(&uri) {
            Some(existing) => existing.join(selection),
            None => selection,
        };
        self.entries.insert(uri, merged);
    }

    /// Applies the nested wildcard to every entry, including entries added
    /// before it, then drops entries equal to the wildcard fallback.
    fn normalize(&mut self) {
        let InvertedSelection { entries, wildcard } = self;
        match wildcard {
            Wildcard::None => {}
            Wildcard::Singleton => entries.retain(|_, selection| *selection != Selection::Singleton),
            Wildcard::Nested(common) => {
                for selection in entries.values_mut() {
                    let current = mem::replace(selection, Selection::Singleton);
                    *selection = current.join(Selection::Nested((**common).clone()));
                }
                entries.retain(|_, selection| {
                    !matches!(selection, Selection::Nested(nested) if nested == &**common)
                });
            }
        }
    }
}

/// Inverts a property selection tree into an [`InvertedSelection`].
///
/// # Examples
///
/// ```
/// use oslc_query::{invert_selection, parse_prefixes, parse_select, Selected};
///
/// let prefixes = parse_prefixes("qm=<http://qm.example.com/ns/>").unwrap();
/// let select = parse_select("*{qm:a},qm:b{qm:c}", &prefixes).unwrap();
/// let inverted = invert_selection(&select);
///
/// let Some(Selected::Nested(b)) = inverted.select("http://qm.example.com/ns/b") else {
///     panic!("qm:b should recurse");
/// };
/// assert!(b.contains("http://qm.example.com/ns/a"));
/// assert!(b.contains("http://qm.example.com/ns/c"));
/// ```
pub fn invert_selection(properties: &Properties) -> InvertedSelection {
    let mut result = InvertedSelection::new();

    for property in properties {
        match property {
            Property::Wildcard => {
                result.wildcard.join(Wildcard::Singleton);
            }
            Property::Identifier(name) => {
                if result.wildcard.selects_all() {
                    trace!(property = %name, "property already selected by wildcard");
                    continue;
                }
                result.insert(name.uri(), Selection::Singleton);
            }
            Property::NestedWildcard { children } => {
                let common = invert_selection(children);
                result.wildcard.join(Wildcard::Nested(Box::new(common)));
            }
            Property::NestedIdentifier { name, children } => {
                let nested = invert_selection(children);
                result.insert(name.uri(), Selection::Nested(nested));
            }
        }
    }

    result.normalize();
    trace!(
        entries = result.len(),
        wildcard = result.has_singleton_wildcard(),
        nested_wildcard = result.common_nested().is_some(),
        "inverted property selection"
    );
    result
}
