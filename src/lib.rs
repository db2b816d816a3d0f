pub mod ast;
pub mod error;
pub mod lexer;
pub mod output;
pub mod params;
pub mod parser;
pub mod prefix_map;
pub mod selection;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use ast::{
    CompoundTerm, Operator, Properties, Property, QualifiedName, SearchTerms, SimpleTerm,
    SortDirection, SortTerm, Token,
};
pub use error::{Cause, ErrorKind, LexError, ParseError};
pub use lexer::Lexer;
pub use output::{ToJson, to_json, to_json_pretty};
pub use params::{ParsedQuery, QueryParameters};
pub use parser::{
    Parser, parse_order_by, parse_prefixes, parse_properties, parse_search_terms, parse_select,
    parse_where,
};
pub use prefix_map::PrefixMap;
pub use selection::{InvertedSelection, Selected, Selection, Wildcard, invert_selection};
pub use value::Value;
