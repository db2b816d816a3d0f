//! Parse one query clause and render the result as JSON

use clap::ValueEnum;
use tracing::debug;

use super::CliError;
use crate::{
    PrefixMap, ToJson, invert_selection, parse_order_by, parse_prefixes, parse_properties,
    parse_search_terms, parse_select, parse_where,
};

/// Query parameter whose grammar an expression is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Clause {
    Prefix,
    Where,
    Select,
    Properties,
    #[value(alias = "orderBy")]
    OrderBy,
    #[value(alias = "searchTerms")]
    SearchTerms,
}

impl Clause {
    /// Query parameter name, e.g. `oslc.orderBy`
    pub fn param_name(&self) -> &'static str {
        match self {
            Clause::Prefix => crate::params::PREFIX_PARAM,
            Clause::Where => crate::params::WHERE_PARAM,
            Clause::Select => crate::params::SELECT_PARAM,
            Clause::Properties => crate::params::PROPERTIES_PARAM,
            Clause::OrderBy => crate::params::ORDER_BY_PARAM,
            Clause::SearchTerms => crate::params::SEARCH_TERMS_PARAM,
        }
    }

    pub fn is_selection(&self) -> bool {
        matches!(self, Clause::Select | Clause::Properties)
    }
}

/// Options for the check command
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub clause: Clause,
    /// The clause expression, already URL-decoded
    pub expression: String,
    /// `oslc.prefix` expression used to resolve qualified names
    pub prefixes: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Print the inverted selection instead of the tree
    pub invert: bool,
    /// Only validate syntax, don't render
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Clause parsed successfully with JSON output
    Success(serde_json::Value),
}

/// Execute an oslcq check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    if options.invert && !options.clause.is_selection() {
        return Err(CliError::InvertUnsupported(options.clause));
    }

    let prefixes = match &options.prefixes {
        Some(expression) => parse_prefixes(expression)?,
        None => PrefixMap::new(),
    };
    debug!(
        clause = options.clause.param_name(),
        prefixes = prefixes.len(),
        "checking expression"
    );

    let expression = options.expression.as_str();
    let output = match options.clause {
        Clause::Prefix => parse_prefixes(expression)?.to_json(),
        Clause::Where => parse_where(expression, &prefixes)?.to_json(),
        Clause::Select | Clause::Properties => {
            let tree = if options.clause == Clause::Select {
                parse_select(expression, &prefixes)?
            } else {
                parse_properties(expression, &prefixes)?
            };
            if options.invert {
                invert_selection(&tree).to_json()
            } else {
                tree.to_json()
            }
        }
        Clause::OrderBy => parse_order_by(expression, &prefixes)?.to_json(),
        Clause::SearchTerms => parse_search_terms(expression)?.to_json(),
    };

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }
    Ok(CheckResult::Success(output))
}
