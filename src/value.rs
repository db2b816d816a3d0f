use std::fmt;

use rust_decimal::Decimal;

use crate::ast::QualifiedName;

/// Operand of a where-clause comparison or `in` term.
///
/// A quoted `"*"` is a plain [`Value::String`]; wildcards only exist in
/// property selections.
///
/// # Examples
///
/// ```
/// use oslc_query::Value;
/// use rust_decimal::Decimal;
///
/// let uri = Value::UriRef("http://example.org/tests/24".to_string());
/// assert_eq!(uri.to_string(), "<http://example.org/tests/24>");
///
/// let decimal = Value::Decimal(Decimal::new(-470, 1));
/// assert_eq!(decimal.to_string(), "-47.0");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `<http://...>`
    UriRef(String),

    /// `true` / `false`
    Boolean(bool),

    /// Signed decimal, scale preserved (`-47.0` keeps one fractional digit)
    Decimal(Decimal),

    /// `"text"`
    String(String),

    /// `"text"^^prefix:local`
    TypedString {
        value: String,
        datatype: QualifiedName,
    },

    /// `"text"@tag`
    LangString { value: String, language: String },
}

impl Value {
    /// Name of the value's type, as used in diagnostics and JSON output
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::UriRef(_) => "uri_ref",
            Value::Boolean(_) => "boolean",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::TypedString { .. } => "typed_string",
            Value::LangString { .. } => "lang_string",
        }
    }

    /// Literal text for the string variants
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::TypedString { value, .. } | Value::LangString { value, .. } => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::UriRef(uri) => write!(f, "<{}>", uri),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::TypedString { value, datatype } => write!(f, "\"{}\"^^{}", value, datatype),
            Value::LangString { value, language } => write!(f, "\"{}\"@{}", value, language),
        }
    }
}
