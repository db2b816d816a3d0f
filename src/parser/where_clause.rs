use rust_decimal::Decimal;
use tracing::debug;

use super::Parser;
use crate::{
    ast::{CompoundTerm, Operator, SimpleTerm, Token},
    error::{Cause, ErrorKind, ParseError},
    lexer::Lexer,
    prefix_map::PrefixMap,
    value::Value,
};

/// Parses an `oslc.where` clause into its top-level conjunction.
///
/// # Examples
///
/// ```
/// use oslc_query::{parse_prefixes, parse_where, Operator, SimpleTerm, Value};
///
/// let prefixes = parse_prefixes("qm=<http://qm.example.com/ns/>").unwrap();
/// let clause = parse_where("qm:testCase=<http://example.org/tests/24>", &prefixes).unwrap();
///
/// match &clause.terms[0] {
///     SimpleTerm::Comparison { property, operator, operand } => {
///         assert_eq!(property.uri(), "http://qm.example.com/ns/testCase");
///         assert_eq!(*operator, Operator::Equals);
///         assert_eq!(*operand, Value::UriRef("http://example.org/tests/24".to_string()));
///     }
///     other => panic!("unexpected term {:?}", other),
/// }
/// ```
pub fn parse_where(expression: &str, prefixes: &PrefixMap) -> Result<CompoundTerm, ParseError> {
    let mut parser = Parser::with_prefixes(Lexer::new(expression), prefixes)?;
    let clause = parser.parse_where_clause()?;
    debug!(terms = clause.len(), "parsed oslc.where clause");
    Ok(clause)
}

impl Parser<'_> {
    pub fn parse_where_clause(&mut self) -> Result<CompoundTerm, ParseError> {
        let terms = self.parse_terms()?;
        self.expect_eof()?;
        Ok(CompoundTerm::new(terms))
    }

    /// term ('and' term)*
    fn parse_terms(&mut self) -> Result<Vec<SimpleTerm>, ParseError> {
        let mut terms = vec![self.parse_term()?];
        while self.check(&Token::And) {
            self.advance()?;
            terms.push(self.parse_term()?);
        }
        Ok(terms)
    }

    fn parse_term(&mut self) -> Result<SimpleTerm, ParseError> {
        let property = self.parse_qualified_name("a where-clause term")?;

        match &self.current_token {
            Token::In => {
                self.advance()?;
                let operands = self.parse_in_list()?;
                Ok(SimpleTerm::In { property, operands })
            }
            Token::LBrace => {
                self.advance()?;
                let terms = self.parse_terms()?;
                self.expect(Token::RBrace)?;
                Ok(SimpleTerm::Nested {
                    property,
                    children: CompoundTerm::new(terms),
                })
            }
            _ => {
                let operator = self.parse_operator()?;
                let operand = self.parse_value()?;
                Ok(SimpleTerm::Comparison {
                    property,
                    operator,
                    operand,
                })
            }
        }
    }

    fn parse_operator(&mut self) -> Result<Operator, ParseError> {
        let op = match &self.current_token {
            Token::Eq => Operator::Equals,
            Token::NotEq => Operator::NotEquals,
            Token::Lt => Operator::LessThan,
            Token::Gt => Operator::GreaterThan,
            Token::LtEq => Operator::LessEquals,
            Token::GtEq => Operator::GreaterEquals,
            _ => return Err(self.unexpected("a comparison operator, 'in' or '{'")),
        };
        self.advance()?;
        Ok(op)
    }

    /// '[' value (',' value)* ']'
    fn parse_in_list(&mut self) -> Result<Vec<Value>, ParseError> {
        self.expect(Token::LBracket)?;

        if self.check(&Token::RBracket) {
            return Err(self.error(ErrorKind::Semantic, "'in' list has no values"));
        }

        let mut values = vec![self.parse_value()?];
        while self.check(&Token::Comma) {
            self.advance()?;
            values.push(self.parse_value()?);
        }

        if self.check(&Token::Eof) {
            return Err(self.error(ErrorKind::Syntax, "'in' list is missing its closing ']'"));
        }
        self.expect(Token::RBracket)?;
        Ok(values)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match &self.current_token {
            Token::UriRef(uri) => {
                let value = Value::UriRef(uri.clone());
                self.advance()?;
                Ok(value)
            }
            Token::Boolean(b) => {
                let value = Value::Boolean(*b);
                self.advance()?;
                Ok(value)
            }
            Token::Plus | Token::Minus => {
                let negative = self.check(&Token::Minus);
                self.advance()?;
                self.parse_decimal(negative)
            }
            Token::Decimal(_) => self.parse_decimal(false),
            Token::String(s) => {
                let text = s.clone();
                self.advance()?;
                self.parse_string_suffix(text)
            }
            Token::Lt => Err(self.error(
                ErrorKind::Syntax,
                "URI reference is missing its closing '>'",
            )),
            _ => Err(self.unexpected("a literal value")),
        }
    }

    fn parse_decimal(&mut self, negative: bool) -> Result<Value, ParseError> {
        let Token::Decimal(digits) = &self.current_token else {
            return Err(self.unexpected("a number after the sign"));
        };

        // Sign applied after parsing so `-0` and `-0.0` stay negative.
        let mut decimal = Decimal::from_str_exact(digits).map_err(|e| {
            let sign = if negative { "-" } else { "" };
            self.error(
                ErrorKind::Lexical,
                format!("decimal literal '{}{}' cannot be represented", sign, digits),
            )
            .with_cause(Cause::InvalidDecimal(e.to_string()))
        })?;
        decimal.set_sign_negative(negative);

        self.advance()?;
        Ok(Value::Decimal(decimal))
    }

    /// Optional `^^datatype` or `@tag` after a string literal.
    fn parse_string_suffix(&mut self, text: String) -> Result<Value, ParseError> {
        match &self.current_token {
            Token::DoubleCaret => {
                self.advance()?;
                let datatype = self.parse_qualified_name("a datatype name after '^^'")?;
                Ok(Value::TypedString {
                    value: text,
                    datatype,
                })
            }
            Token::LangTag(tag) => {
                let language = tag.clone();
                self.advance()?;
                Ok(Value::LangString {
                    value: text,
                    language,
                })
            }
            _ => Ok(Value::String(text)),
        }
    }
}
