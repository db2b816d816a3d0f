use std::sync::LazyLock;

use regex::Regex;

use crate::{ast::Token, error::LexError};

static LANG_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]+(-[A-Za-z0-9]+)*$").expect("Invalid language tag regex")
});

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    token_start: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            token_start: 0,
        }
    }

    /// Character offset where the most recently returned token starts.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Character offset just past the most recently returned token.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Input text between two character offsets.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.input.len());
        let start = start.min(end);
        self.input[start..end].iter().collect()
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn error(&self, message: impl Into<String>, start: usize, end: usize) -> LexError {
        LexError {
            message: message.into(),
            fragment: self.slice(start, end),
            offset: start,
        }
    }

    fn is_name_char(ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '-' || ch == '.'
    }

    fn is_uri_char(ch: char) -> bool {
        ch > ' ' && !matches!(ch, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
    }

    /// Reads a run of name characters. A trailing `.` is never part of a name.
    fn read_name(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if Self::is_name_char(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        while result.ends_with('.') {
            result.pop();
            self.position -= 1;
        }
        result
    }

    fn read_prefixed_local(&mut self, prefix: String) -> Result<Token, LexError> {
        self.advance(); // Consume ':'
        let local = self.read_name();
        if local.is_empty() {
            return Err(self.error(
                format!("expected a local name after '{}:'", prefix),
                self.token_start,
                self.position,
            ));
        }
        Ok(Token::PrefixedName { prefix, local })
    }

    fn read_string(&mut self) -> Result<String, LexError> {
        let mut result = String::new();
        self.advance(); // Consume opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(result);
                }
                '\\' => {
                    // Escapes stay in the literal text
                    result.push(ch);
                    self.advance();
                    if let Some(escaped) = self.current_char() {
                        result.push(escaped);
                        self.advance();
                    }
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(self.error(
            "unterminated string literal",
            self.token_start,
            self.input.len(),
        ))
    }

    fn read_number(&mut self) -> Token {
        let mut number = String::new();
        let mut is_fraction = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.'
                && !is_fraction
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                is_fraction = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::Decimal(number)
    }

    /// Tries to read `<...>` as a URI reference. Leaves the position untouched
    /// and returns `None` when no closing `>` follows.
    fn try_read_uri_ref(&mut self) -> Option<String> {
        let mut offset = 1;
        while let Some(ch) = self.peek_char(offset) {
            if ch == '>' {
                let uri = self.slice(self.position + 1, self.position + offset);
                self.position += offset + 1;
                return Some(uri);
            }
            if !Self::is_uri_char(ch) {
                return None;
            }
            offset += 1;
        }
        None
    }

    fn read_lang_tag(&mut self) -> Result<Token, LexError> {
        self.advance(); // Consume '@'
        let mut tag = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_alphanumeric() || ch == '-' {
                tag.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if LANG_TAG.is_match(&tag) {
            Ok(Token::LangTag(tag))
        } else {
            Err(self.error(
                format!("invalid language tag '@{}'", tag),
                self.token_start,
                self.position,
            ))
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.token_start = self.position;

        let token = match self.current_char() {
            None => Token::Eof,
            Some(',') => {
                self.advance();
                Token::Comma
            }
            Some('+') => {
                self.advance();
                Token::Plus
            }
            Some('-') => {
                self.advance();
                Token::Minus
            }
            Some('*') => {
                self.advance();
                Token::Star
            }
            Some('{') => {
                self.advance();
                Token::LBrace
            }
            Some('}') => {
                self.advance();
                Token::RBrace
            }
            Some('[') => {
                self.advance();
                Token::LBracket
            }
            Some(']') => {
                self.advance();
                Token::RBracket
            }
            Some('=') => {
                self.advance();
                Token::Eq
            }
            Some('!') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::NotEq
                } else {
                    return Err(self.error(
                        "unexpected '!' (did you mean '!=')",
                        self.position,
                        self.position + 1,
                    ));
                }
            }
            Some('>') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::GtEq
                } else {
                    self.advance();
                    Token::Gt
                }
            }
            Some('<') => {
                if self.peek_char(1) == Some('=') {
                    self.advance();
                    self.advance();
                    Token::LtEq
                } else if self.peek_char(1) == Some('>') {
                    return Err(self.error(
                        "empty URI reference '<>'",
                        self.position,
                        self.position + 2,
                    ));
                } else if let Some(uri) = self.try_read_uri_ref() {
                    Token::UriRef(uri)
                } else {
                    self.advance();
                    Token::Lt
                }
            }
            Some('^') => {
                if self.peek_char(1) == Some('^') {
                    self.advance();
                    self.advance();
                    Token::DoubleCaret
                } else {
                    return Err(self.error(
                        "unexpected '^' (did you mean '^^')",
                        self.position,
                        self.position + 1,
                    ));
                }
            }
            Some('@') => self.read_lang_tag()?,
            Some('"') => Token::String(self.read_string()?),
            Some(':') => self.read_prefixed_local(String::new())?,
            Some(ch) if ch.is_ascii_digit() => self.read_number(),
            Some(ch) if ch.is_alphabetic() || ch == '_' => {
                let name = self.read_name();

                if self.current_char() == Some(':') {
                    self.read_prefixed_local(name)?
                } else {
                    match name.as_str() {
                        "and" => Token::And,
                        "in" => Token::In,
                        "true" => Token::Boolean(true),
                        "false" => Token::Boolean(false),
                        _ => Token::Name(name),
                    }
                }
            }
            Some(ch) => {
                return Err(self.error(
                    format!("unexpected character '{}'", ch),
                    self.position,
                    self.position + 1,
                ));
            }
        };

        Ok(token)
    }

    /// Tokenizes the whole input, stopping at the first lexical error.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token == Token::Eof;
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("and in true false");
    assert_eq!(lexer.next_token().unwrap(), Token::And);
    assert_eq!(lexer.next_token().unwrap(), Token::In);
    assert_eq!(lexer.next_token().unwrap(), Token::Boolean(true));
    assert_eq!(lexer.next_token().unwrap(), Token::Boolean(false));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_comparison_with_uri() {
    let mut lexer = Lexer::new("qm:testCase=<http://example.org/tests/24>");
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::PrefixedName {
            prefix: "qm".to_string(),
            local: "testCase".to_string()
        }
    );
    assert_eq!(lexer.next_token().unwrap(), Token::Eq);
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::UriRef("http://example.org/tests/24".to_string())
    );
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_token_offsets() {
    let mut lexer = Lexer::new("  qm:a and");
    lexer.next_token().unwrap();
    assert_eq!(lexer.token_start(), 2);
    assert_eq!(lexer.position(), 6);
    lexer.next_token().unwrap();
    assert_eq!(lexer.slice(lexer.token_start(), lexer.position()), "and");
}
