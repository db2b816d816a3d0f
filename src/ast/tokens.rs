use std::fmt;

/// Lexical token shared by every OSLC query clause grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Names
    /// Prefixed name, resolved against the prefix map by the parser
    ///
    /// # Examples
    /// ```text
    /// qm:testcase
    /// dcterms:title
    /// :local
    /// ```
    PrefixedName { prefix: String, local: String },

    /// Name without a colon
    ///
    /// Only meaningful on the left of a prefix declaration (`qm=<...>`).
    Name(String),

    // Literals
    /// URI reference, angle brackets stripped
    ///
    /// # Examples
    /// ```text
    /// <http://example.org/tests/24>
    /// ```
    UriRef(String),

    /// Double-quoted string literal, quotes stripped
    ///
    /// Backslash escapes keep the escaped character inside the literal but are
    /// not unescaped.
    String(String),

    /// Unsigned decimal number as written
    ///
    /// # Examples
    /// ```text
    /// 10
    /// 10.4
    /// ```
    Decimal(String),

    /// `true` or `false`
    Boolean(bool),

    /// Language tag following a string literal, `@` stripped
    ///
    /// # Examples
    /// ```text
    /// "The End"@en-US
    /// ```
    LangTag(String),

    /// Datatype marker between a string literal and its datatype (`^^`)
    DoubleCaret,

    // Keywords
    /// Conjunction between where-clause terms (`and`)
    And,

    /// Set membership (`in`)
    In,

    // Comparison
    /// `=`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,

    // Delimiters
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Plus,
    Minus,
    /// Wildcard in select clauses
    Star,

    /// End of input
    Eof,
}

impl Token {
    /// Text usable as a prefix declaration name.
    ///
    /// Keywords are accepted so that `in=<...>` declares a prefix named `in`.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Token::Name(name) => Some(name),
            Token::And => Some("and"),
            Token::In => Some("in"),
            Token::Boolean(true) => Some("true"),
            Token::Boolean(false) => Some("false"),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::PrefixedName { prefix, local } => write!(f, "{}:{}", prefix, local),
            Token::Name(name) => write!(f, "{}", name),
            Token::UriRef(uri) => write!(f, "<{}>", uri),
            Token::String(s) => write!(f, "\"{}\"", s),
            Token::Decimal(d) => write!(f, "{}", d),
            Token::Boolean(b) => write!(f, "{}", b),
            Token::LangTag(tag) => write!(f, "@{}", tag),
            Token::DoubleCaret => f.write_str("^^"),
            Token::And => f.write_str("and"),
            Token::In => f.write_str("in"),
            Token::Eq => f.write_str("="),
            Token::NotEq => f.write_str("!="),
            Token::Lt => f.write_str("<"),
            Token::Gt => f.write_str(">"),
            Token::LtEq => f.write_str("<="),
            Token::GtEq => f.write_str(">="),
            Token::LBrace => f.write_str("{"),
            Token::RBrace => f.write_str("}"),
            Token::LBracket => f.write_str("["),
            Token::RBracket => f.write_str("]"),
            Token::Comma => f.write_str(","),
            Token::Plus => f.write_str("+"),
            Token::Minus => f.write_str("-"),
            Token::Star => f.write_str("*"),
            Token::Eof => f.write_str("end of input"),
        }
    }
}
