// tests/lexer_tests.rs

use oslc_query::ast::Token;
use oslc_query::lexer::Lexer;

fn tokens(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize().unwrap()
}

fn pname(prefix: &str, local: &str) -> Token {
    Token::PrefixedName {
        prefix: prefix.to_string(),
        local: local.to_string(),
    }
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        (",", Token::Comma),
        ("+", Token::Plus),
        ("-", Token::Minus),
        ("*", Token::Star),
        ("{", Token::LBrace),
        ("}", Token::RBrace),
        ("[", Token::LBracket),
        ("]", Token::RBracket),
        ("=", Token::Eq),
        ("<", Token::Lt),
        (">", Token::Gt),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

// ============================================================================
// Two Character Tokens
// ============================================================================

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("!=", Token::NotEq),
        ("<=", Token::LtEq),
        (">=", Token::GtEq),
        ("^^", Token::DoubleCaret),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.next_token().unwrap(), expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_lone_bang_and_caret_are_invalid() {
    for input in ["!", "^"] {
        let err = Lexer::new(input).next_token().unwrap_err();
        assert_eq!(err.offset, 0);
        assert_eq!(err.fragment, input);
    }
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_prefixed_names() {
    assert_eq!(tokens("qm:testcase"), vec![pname("qm", "testcase"), Token::Eof]);
    assert_eq!(
        tokens("oslc:verified_by"),
        vec![pname("oslc", "verified_by"), Token::Eof]
    );
    assert_eq!(tokens(":local"), vec![pname("", "local"), Token::Eof]);
}

#[test]
fn test_trailing_dot_is_not_part_of_name() {
    let mut lexer = Lexer::new("dc:title.");
    assert_eq!(lexer.next_token().unwrap(), pname("dc", "title"));
    assert!(lexer.next_token().is_err());
}

#[test]
fn test_missing_local_name() {
    let err = Lexer::new("qm: x").tokenize().unwrap_err();
    assert_eq!(err.offset, 0);
    assert_eq!(err.fragment, "qm:");
}

#[test]
fn test_keywords_and_plain_names() {
    assert_eq!(
        tokens("and in true false qm"),
        vec![
            Token::And,
            Token::In,
            Token::Boolean(true),
            Token::Boolean(false),
            Token::Name("qm".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_a_prefixed_name() {
    assert_eq!(tokens("in:x"), vec![pname("in", "x"), Token::Eof]);
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_numbers() {
    assert_eq!(
        tokens("10 10.4 -47.0"),
        vec![
            Token::Decimal("10".to_string()),
            Token::Decimal("10.4".to_string()),
            Token::Minus,
            Token::Decimal("47.0".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_strings_keep_escapes() {
    assert_eq!(
        tokens(r#""Done" "say \"hi\"""#),
        vec![
            Token::String("Done".to_string()),
            Token::String(r#"say \"hi\""#.to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_unterminated_string() {
    let err = Lexer::new(r#"qm:state="Open"#).tokenize().unwrap_err();
    assert_eq!(err.offset, 9);
    assert_eq!(err.fragment, "\"Open");
}

#[test]
fn test_typed_and_tagged_strings() {
    assert_eq!(
        tokens(r#""2011-10-10T07:00:00Z"^^xs:dateTime"#),
        vec![
            Token::String("2011-10-10T07:00:00Z".to_string()),
            Token::DoubleCaret,
            pname("xs", "dateTime"),
            Token::Eof,
        ]
    );
    assert_eq!(
        tokens(r#""The End"@en-US"#),
        vec![
            Token::String("The End".to_string()),
            Token::LangTag("en-US".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_invalid_language_tag() {
    assert!(Lexer::new("\"x\"@").tokenize().is_err());
    assert!(Lexer::new("\"x\"@-en").tokenize().is_err());
}

// ============================================================================
// URI References vs Less-Than
// ============================================================================

#[test]
fn test_uri_ref() {
    assert_eq!(
        tokens("<http://open-services.net/ns/core#>"),
        vec![
            Token::UriRef("http://open-services.net/ns/core#".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_less_than_before_number() {
    assert_eq!(
        tokens("qm:duration<10"),
        vec![
            pname("qm", "duration"),
            Token::Lt,
            Token::Decimal("10".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_less_than_before_string() {
    assert_eq!(
        tokens(r#"qm:title<"b>""#),
        vec![
            pname("qm", "title"),
            Token::Lt,
            Token::String("b>".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_unclosed_angle_bracket_is_less_than() {
    let mut lexer = Lexer::new("<http://qm.example.com/ns/");
    assert_eq!(lexer.next_token().unwrap(), Token::Lt);
    assert_eq!(lexer.position(), 1);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_uri_reference() {
    let err = Lexer::new("qm:a=<>").tokenize().unwrap_err();
    assert_eq!(err.offset, 5);
    assert_eq!(err.fragment, "<>");
    assert!(err.message.contains("empty URI reference"));
}

#[test]
fn test_unexpected_character() {
    let err = Lexer::new("qm:a ? qm:b").tokenize().unwrap_err();
    assert_eq!(err.offset, 5);
    assert_eq!(err.fragment, "?");
    assert_eq!(err.to_string(), "unexpected character '?' at offset 5");
}

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(
        tokens("  qm:a \t and\n qm:b "),
        vec![pname("qm", "a"), Token::And, pname("qm", "b"), Token::Eof]
    );
}
