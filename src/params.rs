//! The `oslc.*` query parameters of one request, parsed together.
//!
//! ```
//! use oslc_query::{QueryParameters, Selected};
//!
//! let params = QueryParameters::from_pairs([
//!     ("oslc.prefix", "dcterms=<http://purl.org/dc/terms/>"),
//!     ("oslc.select", "dcterms:title"),
//!     ("page", "2"),
//! ]);
//! let query = params.parse().unwrap();
//!
//! let selection = query.selection();
//! assert_eq!(selection.select("http://purl.org/dc/terms/title"), Some(Selected::Singleton));
//! assert_eq!(selection.select("http://purl.org/dc/terms/creator"), None);
//! ```

use tracing::{debug, trace};

use crate::{
    ast::{CompoundTerm, Properties, SearchTerms, SortTerm},
    error::ParseError,
    parser::{
        parse_order_by, parse_prefixes, parse_properties, parse_search_terms, parse_select,
        parse_where,
    },
    prefix_map::PrefixMap,
    selection::{InvertedSelection, invert_selection},
};

pub const PREFIX_PARAM: &str = "oslc.prefix";
pub const WHERE_PARAM: &str = "oslc.where";
pub const SELECT_PARAM: &str = "oslc.select";
pub const PROPERTIES_PARAM: &str = "oslc.properties";
pub const ORDER_BY_PARAM: &str = "oslc.orderBy";
pub const SEARCH_TERMS_PARAM: &str = "oslc.searchTerms";

/// Raw, already URL-decoded `oslc.*` parameter values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters {
    pub prefix: Option<String>,
    pub where_clause: Option<String>,
    pub select: Option<String>,
    pub properties: Option<String>,
    pub order_by: Option<String>,
    pub search_terms: Option<String>,
}

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the `oslc.*` parameters from request key/value pairs.
    ///
    /// Other keys are ignored. A repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = QueryParameters::new();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                PREFIX_PARAM => &mut params.prefix,
                WHERE_PARAM => &mut params.where_clause,
                SELECT_PARAM => &mut params.select,
                PROPERTIES_PARAM => &mut params.properties,
                ORDER_BY_PARAM => &mut params.order_by,
                SEARCH_TERMS_PARAM => &mut params.search_terms,
                other => {
                    trace!(key = other, "ignoring non-query parameter");
                    continue;
                }
            };
            *slot = Some(value.into());
        }
        params
    }

    /// Parses the prefix clause, then every other clause that is present.
    ///
    /// The first failing clause aborts the whole parse.
    pub fn parse(&self) -> Result<ParsedQuery, ParseError> {
        let prefixes = match &self.prefix {
            Some(expression) => parse_prefixes(expression)?,
            None => PrefixMap::new(),
        };

        let where_clause = self
            .where_clause
            .as_deref()
            .map(|e| parse_where(e, &prefixes))
            .transpose()?;
        let select = self
            .select
            .as_deref()
            .map(|e| parse_select(e, &prefixes))
            .transpose()?;
        let properties = self
            .properties
            .as_deref()
            .map(|e| parse_properties(e, &prefixes))
            .transpose()?;
        let order_by = self
            .order_by
            .as_deref()
            .map(|e| parse_order_by(e, &prefixes))
            .transpose()?;
        let search_terms = self
            .search_terms
            .as_deref()
            .map(parse_search_terms)
            .transpose()?;

        debug!(
            prefixes = prefixes.len(),
            has_where = where_clause.is_some(),
            has_select = select.is_some(),
            has_properties = properties.is_some(),
            has_order_by = order_by.is_some(),
            has_search_terms = search_terms.is_some(),
            "parsed query parameters"
        );

        Ok(ParsedQuery {
            prefixes,
            where_clause,
            select,
            properties,
            order_by,
            search_terms,
        })
    }
}

/// Parsed form of [`QueryParameters`]; absent parameters stay `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub prefixes: PrefixMap,
    pub where_clause: Option<CompoundTerm>,
    pub select: Option<Properties>,
    pub properties: Option<Properties>,
    pub order_by: Option<Vec<SortTerm>>,
    pub search_terms: Option<SearchTerms>,
}

impl ParsedQuery {
    /// Selection tree governing serialization: `oslc.properties` when given,
    /// else `oslc.select`, else `*`.
    pub fn selection_tree(&self) -> Properties {
        self.properties
            .as_ref()
            .or(self.select.as_ref())
            .cloned()
            .unwrap_or_else(Properties::wildcard)
    }

    /// Inverted form of [`selection_tree`](Self::selection_tree).
    pub fn selection(&self) -> InvertedSelection {
        invert_selection(&self.selection_tree())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_from_pairs_keeps_last_value() {
        let params = QueryParameters::from_pairs([
            ("oslc.orderBy", "+a:b"),
            ("oslc.orderBy", "-a:c"),
            ("oslc.paging", "true"),
        ]);
        assert_eq!(params.order_by.as_deref(), Some("-a:c"));
        assert_eq!(params.select, None);
    }

    #[test]
    fn test_missing_selection_selects_everything() {
        let query = QueryParameters::new().parse().unwrap();
        assert!(query.prefixes.is_empty());
        assert_eq!(query.selection_tree(), Properties::wildcard());
        assert!(query.selection().has_singleton_wildcard());
    }

    #[test]
    fn test_clause_without_prefix_clause_fails() {
        let params = QueryParameters {
            where_clause: Some("qm:state=\"Open\"".to_string()),
            ..QueryParameters::default()
        };
        let err = params.parse().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Semantic);
    }
}
