//! Unit tests for the parser module.
//!
//! Token streams are built from space-separated sources: every word becomes
//! one token, classified by its first character.

use std::rc::Rc;

use pretty_assertions::assert_eq;

use crate::{
    ast::ast::{Node, OperatorExpr},
    config::ParserConfig,
    errors::errors::Error,
    operators::operators::OperatorTable,
    tokens::tokens::{Token, TokenKind, TokenStream},
    MK_TOKEN,
};

use super::{
    lookups::{UnitParser, UNIT_PARSERS},
    parser::{parse, parse_with},
    precedence::resolve_operators,
    structure::{find_group_close, BracketFamily},
};

fn classify(word: &str) -> TokenKind {
    match word {
        "(" => TokenKind::ParenthesisOpen,
        ")" => TokenKind::ParenthesisClose,
        "{" => TokenKind::BraceOpen,
        "}" => TokenKind::BraceClose,
        "[" => TokenKind::SquareBraceOpen,
        "]" => TokenKind::SquareBraceClose,
        "," => TokenKind::Delimiter,
        ";" => TokenKind::Semicolon,
        "." => TokenKind::Period,
        "?" => TokenKind::QuestionMark,
        _ if word.starts_with("/*") => TokenKind::Comment,
        _ if word.starts_with('"') => TokenKind::String,
        _ if word.starts_with(|c: char| c.is_ascii_digit()) => TokenKind::Number,
        _ if word.starts_with(|c: char| c.is_alphabetic() || c == '_') => TokenKind::Word,
        _ => TokenKind::Operator,
    }
}

fn tokens(source: &str) -> Vec<Token> {
    let shared = Rc::new(source.to_string());
    let mut offset = 0;

    source
        .split(' ')
        .filter_map(|word| {
            let start = offset;
            offset += word.len() + 1;
            (!word.is_empty()).then(|| MK_TOKEN!(classify(word), word, start, &shared))
        })
        .collect()
}

fn render(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_source(source: &str) -> String {
    render(&parse(tokens(source)).unwrap())
}

fn parse_error(source: &str) -> Error {
    parse(tokens(source)).unwrap_err()
}

#[test]
fn test_parse_empty_program() {
    assert_eq!(parse(vec![]).unwrap(), vec![]);
}

#[test]
fn test_parse_literals() {
    assert_eq!(parse_source("a"), "a");
    assert_eq!(parse_source("1.5"), "1.5");
    assert_eq!(parse_source("\"hi\""), "\"hi\"");
    assert_eq!(parse_source("/*note*/ a"), "(comment \"note\") a");
}

#[test]
fn test_parse_string_value_drops_quotes() {
    let ast = parse(tokens("\"hello\"")).unwrap();
    assert_eq!(
        ast,
        vec![Node::String {
            value: "hello".to_string()
        }]
    );
}

#[test]
fn test_parse_short_comment() {
    let ast = parse(tokens("/**/")).unwrap();
    assert_eq!(
        ast,
        vec![Node::Comment {
            text: String::new()
        }]
    );
}

#[test]
fn test_parse_invalid_number() {
    let error = parse_error("1.2.3");
    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_precedence_nesting() {
    assert_eq!(parse_source("a + b * c"), "(+ a (* b c))");
    assert_eq!(parse_source("a * b + c"), "(+ (* a b) c)");
    assert_eq!(parse_source("a == b + c * d"), "(== a (+ b (* c d)))");
}

#[test]
fn test_equal_precedence_is_left_associative() {
    assert_eq!(parse_source("a - b - c"), "(- (- a b) c)");
    assert_eq!(parse_source("a / b * c"), "(* (/ a b) c)");
}

#[test]
fn test_function_call_versus_group() {
    assert_eq!(parse_source("f ( x )"), "(call f x)");
    assert_eq!(parse_source("( x )"), "(group x)");
    assert_eq!(parse_source("g ( 1 ) ( 2 )"), "(call (call g 1) 2)");
}

#[test]
fn test_call_structure() {
    let ast = parse(tokens("f ( x )")).unwrap();
    assert_eq!(
        ast,
        vec![Node::FunctionCall {
            callee: Box::new(Node::identifier("f")),
            arguments: vec![Node::identifier("x")],
        }]
    );
}

#[test]
fn test_delimiter_marks_grouping() {
    assert_eq!(parse_source("f ( a , ( b ) )"), "(call f a (group b))");
    assert_eq!(parse_source("f ( a ( b ) )"), "(call f (call a b))");
}

#[test]
fn test_statement_is_never_a_callee() {
    assert_eq!(parse_source("a ; ( b )"), "(stmt a) (group b)");
}

#[test]
fn test_operator_marker_is_never_a_callee() {
    assert_eq!(parse_source("a + ( b )"), "(+ a (group b))");
    assert_eq!(parse_source("a + [ b ]"), "(+ a (set b))");
}

#[test]
fn test_function_expressions() {
    assert_eq!(parse_source("f ( ) { }"), "(fn f () ())");
    assert_eq!(parse_source("( x ) { }"), "(fn (x) ())");
    assert_eq!(parse_source("{ }"), "(block)");
    assert_eq!(parse_source("f ( a , b ) { a + b }"), "(fn f (a b) ((+ a b)))");
    assert_eq!(parse_source("x { y }"), "x (block y)");
}

#[test]
fn test_named_function_expression_structure() {
    let ast = parse(tokens("f ( ) { }")).unwrap();
    assert_eq!(
        ast,
        vec![Node::FunctionExpression {
            name: Some("f".to_string()),
            parameters: vec![],
            body: vec![],
        }]
    );
}

#[test]
fn test_named_function_expression_requires_identifier() {
    let error = parse_error("a . b ( ) { }");
    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_accessor_versus_set() {
    assert_eq!(parse_source("a [ 0 ]"), "(index a 0)");
    assert_eq!(parse_source("[ 0 ]"), "(set 0)");
    assert_eq!(parse_source("[ 1 , 2 ] [ 0 ]"), "(index (set 1 2) 0)");
}

#[test]
fn test_member_access_and_range() {
    assert_eq!(parse_source("a . b . c"), "(. (. a b) c)");
    assert_eq!(parse_source("a . b ( 1 )"), "(call (. a b) 1)");
    assert_eq!(parse_source("1 . . 5"), "(.. 1 5)");
    assert_eq!(parse_source("a . b + 1"), "(+ (. a b) 1)");
}

#[test]
fn test_member_access_needs_both_sides() {
    assert_eq!(parse_error(". b").get_error_name(), "UnexpectedToken");
    assert_eq!(parse_error("a .").get_error_name(), "UnexpectedToken");
    assert_eq!(parse_error("a . +").get_error_name(), "UnexpectedToken");
}

#[test]
fn test_ternary() {
    assert_eq!(parse_source("c ? a : b"), "(? c a b)");
    assert_eq!(parse_source("x = c ? a + 1 : b"), "(= x (? c (+ a 1) b))");
}

#[test]
fn test_ternary_requires_single_colon_result() {
    assert_eq!(parse_error("c ? a").get_error_name(), "UnexpectedToken");
    assert_eq!(parse_error("c ? a : b d").get_error_name(), "UnexpectedToken");
    assert_eq!(parse_error("? a : b").get_error_name(), "UnexpectedToken");
}

#[test]
fn test_statements() {
    assert_eq!(parse_source("a ; b ;"), "(stmt a) (stmt b)");
    assert_eq!(parse_source("x = 1 ;"), "(= x (stmt 1))");
    assert_eq!(parse_error(";").get_error_name(), "UnexpectedToken");
}

#[test]
fn test_unterminated_group() {
    let error = parse_error("( a");
    assert_eq!(error.get_error_name(), "UnterminatedGroup");
    assert_eq!(error.get_position().0, 2);

    let error = parse_error("(");
    assert_eq!(error.get_error_name(), "UnterminatedGroup");
    assert_eq!(error.get_position().0, 0);

    assert_eq!(parse_error("{ ( }").get_error_name(), "UnterminatedGroup");
}

#[test]
fn test_malformed_operator_expression() {
    let error = parse_error("a +");
    assert_eq!(error.get_error_name(), "MalformedOperatorExpression");
    assert_eq!(error.get_position().0, 2);

    assert_eq!(parse_error("+ a").get_error_name(), "MalformedOperatorExpression");

    let error = parse_error("a + * b");
    assert_eq!(error.get_error_name(), "MalformedOperatorExpression");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_unknown_token_and_operator() {
    let error = parse_error("a )");
    assert_eq!(error.get_error_name(), "UnknownToken");
    assert_eq!(error.get_position().0, 2);

    assert_eq!(parse_error("a ^ b").get_error_name(), "UnknownOperator");
}

#[test]
fn test_find_group_close_counts_only_its_family() {
    let mut stream = TokenStream::from(tokens("( a ( b ) [ ) ] ) c"));
    let open = stream.pop_front().unwrap();

    let close = find_group_close(&open, &stream, BracketFamily::Parenthesis).unwrap();
    assert_eq!(close, 5);

    let count = |kind: TokenKind| stream.range(..=close).filter(|t| t.kind == kind).count();
    assert_eq!(
        count(TokenKind::ParenthesisOpen) + 1,
        count(TokenKind::ParenthesisClose)
    );
}

#[test]
fn test_nesting_limit() {
    let config = ParserConfig {
        max_depth: 2,
        ..ParserConfig::default()
    };

    assert!(parse_with(tokens("( ( a ) )"), &config).is_ok());

    let error = parse_with(tokens("( ( ( a ) ) )"), &config).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_custom_operator_table() {
    let mut table = OperatorTable::new();
    table.insert("+", "add", 20);
    table.insert("*", "multiply", 10);
    let config = ParserConfig::with_operators(table);

    let ast = parse_with(tokens("a + b * c"), &config).unwrap();
    assert_eq!(render(&ast), "(* (+ a b) c)");

    let error = parse_with(tokens("a - b"), &config).unwrap_err();
    assert_eq!(error.get_error_name(), "UnknownOperator");
}

#[test]
fn test_resolve_is_idempotent_on_nested_tree() {
    let ast = parse(tokens("a + b * c")).unwrap();
    let resolved = resolve_operators(ast.clone()).unwrap();
    assert_eq!(resolved, ast);
}

fn marker(symbol: &str, precedence: i32) -> Node {
    Node::Operator(OperatorExpr {
        symbol: symbol.to_string(),
        name: "test",
        precedence,
        left: None,
        right: None,
        position: crate::Position::null(),
    })
}

#[test]
fn test_resolve_flat_list() {
    let flat = vec![
        Node::number(1.0),
        marker("+", 1),
        Node::number(2.0),
        marker("*", 2),
        Node::number(3.0),
        marker("+", 1),
        Node::number(4.0),
    ];

    let resolved = resolve_operators(flat).unwrap();
    assert_eq!(render(&resolved), "(+ (+ 1 (* 2 3)) 4)");
}

#[test]
fn test_unit_parser_priority() {
    assert_eq!(UNIT_PARSERS[0], UnitParser::Delimiter);
    assert_eq!(UNIT_PARSERS[UNIT_PARSERS.len() - 1], UnitParser::Semicolon);

    let stray = tokens("]");
    assert_eq!(UnitParser::lookup(&stray[0]), None);
    let word = tokens("x");
    assert_eq!(UnitParser::lookup(&word[0]), Some(UnitParser::Identifier));
}

fn chain(terms: usize, separator: &str) -> Vec<Token> {
    tokens(&vec!["a"; terms].join(separator))
}

#[test]
fn test_operator_chain_depth_limit() {
    let config = ParserConfig {
        max_depth: 4,
        ..ParserConfig::default()
    };

    let ast = parse_with(chain(5, " + "), &config).unwrap();
    assert_eq!(render(&ast), "(+ (+ (+ (+ a a) a) a) a)");

    let error = parse_with(chain(6, " + "), &config).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_position().0, 18);
}

#[test]
fn test_member_chain_depth_limit() {
    let config = ParserConfig {
        max_depth: 4,
        ..ParserConfig::default()
    };

    let ast = parse_with(chain(5, " . "), &config).unwrap();
    assert_eq!(render(&ast), "(. (. (. (. a a) a) a) a)");

    let error = parse_with(chain(6, " . "), &config).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_position().0, 18);
}

#[test]
fn test_group_depth_includes_operator_trees() {
    let config = ParserConfig {
        max_depth: 2,
        ..ParserConfig::default()
    };

    assert!(parse_with(tokens("( a + a )"), &config).is_ok());

    let error = parse_with(tokens("( ( a + a ) )"), &config).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_position().0, 0);
}

#[test]
fn test_long_chains_stop_at_default_depth() {
    // The 257th link is the first one past the default limit of 256.
    let error = parse(chain(30_000, " . ")).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_position().0, 1026);

    let error = parse(chain(100_000, " + ")).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_position().0, 1026);
}

#[test]
fn test_resolve_many_shallow_operators() {
    let source = vec!["a + a ;"; 10_000].join(" ");
    let ast = parse(tokens(&source)).unwrap();

    assert_eq!(ast.len(), 10_000);
    assert!(ast.iter().all(|node| node.to_string() == "(+ a (stmt a))"));
}

#[test]
fn test_resolve_operators_rejects_deep_fold() {
    let mut flat = vec![Node::number(0.0)];
    for _ in 0..crate::config::DEFAULT_MAX_DEPTH + 1 {
        flat.push(marker("+", 1));
        flat.push(Node::number(1.0));
    }

    let error = resolve_operators(flat).unwrap_err();
    assert_eq!(error.get_error_name(), "NestingTooDeep");
}
