//! # OSLC Query - Abstract Syntax Trees
//!
//! This module defines the trees produced by the OSLC query clause parsers.
//! The OSLC Core query capability accepts five query-string parameters on a
//! resource collection, each with its own small grammar over a shared set of
//! tokens.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[pname]** - Qualified names (`prefix:local`) resolved against a prefix map
//! - **[operators]** - Comparison operators of the where clause
//! - **[terms]** - Where-clause terms (comparisons, `in` terms, nested scopes)
//! - **[properties]** - Select/properties trees (names, wildcards, nested blocks)
//! - **[sort]** - OrderBy sort keys
//! - **[search]** - SearchTerms phrase lists
//!
//! Operand literals live in [`crate::value`].
//!
//! ## Quick Start
//!
//! ```text
//! oslc.prefix=qm=<http://qm.example.com/ns/>,oslc=<http://open-services.net/ns/core#>
//! oslc.where=qm:state in ["Done","Open"] and oslc:verified_by{oslc:owner="Steve"}
//! oslc.select=qm:state{oslc:verified_by{oslc:owner,qm:duration}}
//! oslc.orderBy=-qm:priority,+oslc:name
//! oslc.searchTerms="foobar","whatsis"
//! ```
//!
//! ## Core Concepts
//!
//! ### Qualified Names
//!
//! Every property is written `prefix:local`. The prefix must be bound by the
//! `oslc.prefix` clause; an unbound prefix fails the parse instead of being
//! resolved later.
//!
//! ### Implicit Conjunction
//!
//! Where-clause terms are joined with `and` only. A term followed by `{...}`
//! scopes its children to the resource reached through that property.
//!
//! ### Wildcards
//!
//! `*` means every property at its level, and only exists in select and
//! properties clauses. A quoted `"*"` in a where clause is a plain string.
//!
//! ## Examples
//!
//! ### Typed and Language-Tagged Literals
//!
//! ```text
//! qm:submitted<"2011-10-10T07:00:00Z"^^xs:dateTime
//! oslc:label>"The End"@en-US
//! ```
//!
//! ### Nested Selection
//!
//! ```text
//! *{dcterms:title},qm:state{*}
//! ```
//!
//! ### Sorting Through a Relation
//!
//! ```text
//! +qm:tested_by{-oslc:name}
//! ```
pub mod tokens;
pub mod pname;
pub mod operators;
pub mod terms;
pub mod properties;
pub mod sort;
pub mod search;

pub use tokens::Token;
pub use pname::QualifiedName;
pub use operators::Operator;
pub use terms::{CompoundTerm, SimpleTerm};
pub use properties::{Properties, Property};
pub use sort::{SortDirection, SortTerm, render_sort_terms};
pub use search::SearchTerms;
