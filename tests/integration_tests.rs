use oslc_query::cli::{self, CheckOptions, CheckResult, Clause, CliError};
use oslc_query::output::{to_json, to_json_pretty};
use oslc_query::{ErrorKind, QueryParameters, Selected, ToJson, parse_prefixes, parse_where};
use serde_json::json;

const PREFIXES: &str = "qm=<http://qm.example.com/ns/>,oslc=<http://open-services.net/ns/core#>";

fn check(clause: Clause, expression: &str) -> CheckOptions {
    CheckOptions {
        clause,
        expression: expression.to_string(),
        prefixes: Some(PREFIXES.to_string()),
        pretty: false,
        invert: false,
        syntax_only: false,
    }
}

fn run(options: &CheckOptions) -> serde_json::Value {
    match cli::execute_check(options).unwrap() {
        CheckResult::Success(value) => value,
        CheckResult::SyntaxValid => panic!("expected JSON output"),
    }
}

// ============================================================================
// Query parameters
// ============================================================================

#[test]
fn test_full_query() {
    let params = QueryParameters::from_pairs([
        ("oslc.prefix", PREFIXES),
        ("oslc.where", "qm:state in [\"Done\",\"Open\"] and oslc:verified_by{oslc:owner=\"Steve\"}"),
        ("oslc.select", "qm:state{oslc:verified_by{oslc:owner,qm:duration}}"),
        ("oslc.orderBy", "-qm:priority,+oslc:name"),
        ("oslc.searchTerms", "\"foobar\",\"whatsis\""),
        ("oslc.pageSize", "20"),
    ]);
    let query = params.parse().unwrap();

    assert_eq!(query.prefixes.len(), 2);
    assert_eq!(query.where_clause.as_ref().unwrap().len(), 2);
    assert_eq!(query.order_by.as_ref().unwrap().len(), 2);
    assert_eq!(query.search_terms.as_ref().unwrap().len(), 2);
    assert!(query.properties.is_none());

    let selection = query.selection();
    assert!(matches!(
        selection.select("http://qm.example.com/ns/state"),
        Some(Selected::Nested(_))
    ));
    assert_eq!(selection.select("http://qm.example.com/ns/priority"), None);
}

#[test]
fn test_properties_take_precedence_over_select() {
    let query = QueryParameters::from_pairs([
        ("oslc.prefix", PREFIXES),
        ("oslc.select", "qm:a"),
        ("oslc.properties", "qm:b"),
    ])
    .parse()
    .unwrap();

    let selection = query.selection();
    assert_eq!(selection.select("http://qm.example.com/ns/a"), None);
    assert_eq!(
        selection.select("http://qm.example.com/ns/b"),
        Some(Selected::Singleton)
    );
}

#[test]
fn test_first_bad_clause_fails_the_query() {
    let err = QueryParameters::from_pairs([
        ("oslc.prefix", PREFIXES),
        ("oslc.orderBy", "qm:priority"),
        ("oslc.searchTerms", ""),
    ])
    .parse()
    .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.fragment, "qm:priority");
}

#[test]
fn test_query_renders_to_json() {
    let query = QueryParameters::from_pairs([
        ("oslc.prefix", "qm=<http://qm.example.com/ns/>"),
        ("oslc.orderBy", "-qm:priority"),
    ])
    .parse()
    .unwrap();

    assert_eq!(
        query.to_json(),
        json!({
            "prefixes": { "qm": "http://qm.example.com/ns/" },
            "orderBy": [{
                "direction": "descending",
                "property": {
                    "name": "qm:priority",
                    "uri": "http://qm.example.com/ns/priority",
                },
            }],
        })
    );
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn test_where_json() {
    let prefixes = parse_prefixes(PREFIXES).unwrap();
    let clause = parse_where("qm:duration=-47.0 and qm:state in [\"Done\"]", &prefixes).unwrap();

    let value = clause.to_json();
    assert_eq!(value[0]["kind"], "comparison");
    assert_eq!(value[0]["operator"], "=");
    assert_eq!(value[0]["operand"], json!({ "type": "decimal", "value": "-47.0" }));
    assert_eq!(value[1]["kind"], "in");
    assert_eq!(value[1]["operands"][0]["value"], "Done");

    let compact = to_json(&clause);
    assert!(!compact.contains('\n'));
    assert_eq!(serde_json::from_str::<serde_json::Value>(&to_json_pretty(&clause)).unwrap(), value);
}

// ============================================================================
// CLI
// ============================================================================

#[test]
fn test_check_prefix() {
    let mut options = check(Clause::Prefix, PREFIXES);
    options.prefixes = None;
    assert_eq!(
        run(&options),
        json!({
            "qm": "http://qm.example.com/ns/",
            "oslc": "http://open-services.net/ns/core#",
        })
    );
}

#[test]
fn test_check_select_and_invert() {
    let tree = run(&check(Clause::Select, "*{*}"));
    assert_eq!(tree[0]["kind"], "nested_wildcard");
    assert_eq!(tree[0]["children"][0]["kind"], "wildcard");

    let mut options = check(Clause::Properties, "*{*}");
    options.invert = true;
    assert_eq!(
        run(&options),
        json!({
            "properties": {},
            "wildcard": { "properties": {}, "wildcard": true },
        })
    );
}

#[test]
fn test_check_search_terms_without_prefixes() {
    let mut options = check(Clause::SearchTerms, "\"foobar\",\"whatsis\"");
    options.prefixes = None;
    assert_eq!(run(&options), json!(["foobar", "whatsis"]));
}

#[test]
fn test_check_syntax_only() {
    let mut options = check(Clause::OrderBy, "+qm:tested_by{-oslc:name}");
    options.syntax_only = true;
    assert!(matches!(
        cli::execute_check(&options).unwrap(),
        CheckResult::SyntaxValid
    ));
}

#[test]
fn test_check_reports_parse_error() {
    let err = cli::execute_check(&check(Clause::Where, "XXX")).unwrap_err();
    let CliError::Parse(parse) = &err else {
        panic!("expected a parse error, got {:?}", err);
    };
    assert_eq!(parse.kind, ErrorKind::Syntax);
    assert!(err.to_string().starts_with("Parse error: syntax error at offset 0"));
}

#[test]
fn test_check_bad_prefixes_option() {
    let mut options = check(Clause::Where, "qm:a=1");
    options.prefixes = Some("qm=<http://qm".to_string());
    assert!(matches!(
        cli::execute_check(&options),
        Err(CliError::Parse(_))
    ));
}

#[test]
fn test_invert_requires_selection_clause() {
    let mut options = check(Clause::Where, "qm:a=1");
    options.invert = true;
    let err = cli::execute_check(&options).unwrap_err();
    assert!(matches!(err, CliError::InvertUnsupported(Clause::Where)));
    assert!(err.to_string().contains("oslc.where"));
}

#[test]
fn test_docs() {
    assert!(cli::get_docs_overview().contains("DOCUMENTATION TOPICS"));
    for topic in ["prefix", "where", "select", "properties", "order-by", "orderBy", "search-terms", "selection"] {
        assert!(cli::get_doc_topic(topic).is_ok(), "missing topic {}", topic);
    }
    assert!(matches!(
        cli::get_doc_topic("joins"),
        Err(CliError::UnknownTopic(_))
    ));
}
