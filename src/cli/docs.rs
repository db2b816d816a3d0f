//! Grammar reference for the oslcq CLI

use super::CliError;

/// Available documentation topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTopic {
    Prefix,
    Where,
    Select,
    OrderBy,
    SearchTerms,
    Selection,
}

impl DocTopic {
    /// Parse topic name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '.'], "_").as_str() {
            "prefix" | "prefixes" | "oslc_prefix" => Some(Self::Prefix),
            "where" | "oslc_where" => Some(Self::Where),
            "select" | "properties" | "oslc_select" | "oslc_properties" => Some(Self::Select),
            "order_by" | "orderby" | "oslc_orderby" => Some(Self::OrderBy),
            "search_terms" | "searchterms" | "oslc_searchterms" => Some(Self::SearchTerms),
            "selection" | "invert" | "inversion" => Some(Self::Selection),
            _ => None,
        }
    }
}

/// Get the docs overview (topic listing)
pub fn get_docs_overview() -> &'static str {
    r#"OSLC QUERY DOCUMENTATION

oslcq parses the query-string parameters of the OSLC Core query capability
and prints the resulting trees as JSON. Expressions are given URL-decoded.

DOCUMENTATION TOPICS

  prefix            oslc.prefix: binding namespace prefixes
  where             oslc.where: filtering with comparisons, in-lists and scopes
  select            oslc.select and oslc.properties: choosing properties
  order-by          oslc.orderBy: sort keys
  search-terms      oslc.searchTerms: full-text phrases
  selection         How a selection is inverted for serialization

QUICK REFERENCE

  oslcq check prefix 'dcterms=<http://purl.org/dc/terms/>'
  oslcq check where 'dcterms:title="Bug"' --prefixes 'dcterms=<http://purl.org/dc/terms/>'
  oslcq check select '*{dcterms:title}' --invert --pretty
  echo '"foobar"' | oslcq check search-terms

  OSLC_PREFIXES     Default for --prefixes
  RUST_LOG          Log filter (default: warn)

Run 'oslcq doc <topic>' for detailed documentation.
"#
}

/// Get documentation for a specific topic
pub fn get_doc_topic(name: &str) -> Result<&'static str, CliError> {
    match DocTopic::from_name(name) {
        Some(DocTopic::Prefix) => Ok(PREFIX_DOC),
        Some(DocTopic::Where) => Ok(WHERE_DOC),
        Some(DocTopic::Select) => Ok(SELECT_DOC),
        Some(DocTopic::OrderBy) => Ok(ORDER_BY_DOC),
        Some(DocTopic::SearchTerms) => Ok(SEARCH_TERMS_DOC),
        Some(DocTopic::Selection) => Ok(SELECTION_DOC),
        None => Err(CliError::UnknownTopic(name.to_string())),
    }
}

const PREFIX_DOC: &str = r#"PREFIX - Namespace Bindings

GRAMMAR
  prefix_defs := prefix_def (',' prefix_def)*
  prefix_def  := name '=' '<' uri '>'

  Example:
    qm=<http://qm.example.com/ns/>,oslc=<http://open-services.net/ns/core#>

RULES
  - Every prefix used by another clause must be bound here
  - An empty clause binds nothing
  - A prefix bound twice keeps its last namespace
  - An unterminated URI is a syntax error:
      qm=<http://qm.example.com/ns/>,XXX>
"#;

const WHERE_DOC: &str = r#"WHERE - Filtering

GRAMMAR
  compound_term := simple_term ('and' simple_term)*
  simple_term   := term | scoped_term
  term          := pname op value | pname 'in' '[' value (',' value)* ']'
  scoped_term   := pname '{' compound_term '}'
  op            := '=' | '!=' | '<' | '>' | '<=' | '>='

VALUES
  <http://example.org/tests/24>          URI reference
  true, false                            boolean
  10, -47.0, +3.25                       decimal (scale kept)
  "Done"                                 string
  "2011-10-10T07:00:00Z"^^xs:dateTime    typed string
  "The End"@en-US                        language-tagged string

  Examples:
    qm:testCase=<http://example.org/tests/24>
    qm:state in ["Done","Open"]
    oslc:verified_by{oslc:owner="Steve" and qm:duration=-47.0}

  Constraints:
    - Terms are joined with 'and' only, there is no 'or'
    - An 'in' list needs at least one value
    - A quoted "*" is an ordinary string
"#;

const SELECT_DOC: &str = r#"SELECT - Choosing Properties

GRAMMAR
  properties := property (',' property)*
  property   := pname | '*' | pname '{' properties '}' | '*' '{' properties '}'

  oslc.properties uses the same grammar as oslc.select.

  Examples:
    qm:testcase,*
    qm:state{oslc:verified_by{oslc:owner,qm:duration}}
    *{dcterms:title}

  Meaning:
    pname            emit the property
    *                emit every property
    pname{...}       emit the property and recurse into the related resource
    *{...}           emit every property and recurse into each with {...}

Use --invert to print the lookup structure a serializer would use.
"#;

const ORDER_BY_DOC: &str = r#"ORDER-BY - Sort Keys

GRAMMAR
  sort_terms := sort_term (',' sort_term)*
  sort_term  := ('+' | '-') pname | ('+' | '-')? pname '{' sort_terms '}'

  Examples:
    -qm:priority,+oslc:name
    +qm:tested_by{-oslc:name}

  Constraints:
    - A plain key needs its direction sign
    - A scoped key without a sign sorts ascending
"#;

const SEARCH_TERMS_DOC: &str = r#"SEARCH-TERMS - Full-Text Phrases

GRAMMAR
  search_terms := string (',' string)*

  Example:
    "foobar","whatsis"

  Constraints:
    - At least one phrase is required
    - Quotes are stripped, escapes are kept as written
"#;

const SELECTION_DOC: &str = r#"SELECTION - Inverted Property Selection

A parsed selection is inverted into a map from full property URI to either
'emit' or 'emit and recurse with this nested selection'. Each level also
records whether '*' or '*{...}' was given.

RULES
  - Sibling order never changes the result
  - A nested entry wins over a plain entry for the same property
  - Repeated nested entries merge recursively
  - A plain name next to '*' adds nothing
  - '*{...}' is merged into every named property at its level

  Example:
    *{qm:a},qm:b{qm:c}

    qm:b    emit, recurse with {qm:a, qm:c}
    other   emit, recurse with {qm:a}

Try: oslcq check select '*{qm:a},qm:b{qm:c}' --invert --prefixes 'qm=<http://qm.example.com/ns/>'
"#;
