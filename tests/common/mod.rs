//! Fixture tokenizer for integration tests.
//!
//! The parser takes already-classified tokens; this turns short sources into
//! such tokens with a fixed list of patterns, tried in order.

use std::rc::Rc;

use regex::Regex;
use syntax::{
    tokens::tokens::{Token, TokenKind},
    MK_TOKEN,
};

struct Pattern {
    regex: Regex,
    kind: Option<TokenKind>,
}

fn pattern(regex: &str, kind: Option<TokenKind>) -> Pattern {
    Pattern {
        regex: Regex::new(&format!("^(?:{})", regex)).unwrap(),
        kind,
    }
}

fn patterns() -> Vec<Pattern> {
    vec![
        pattern(r"\s+", None),
        pattern(r"/\*.*?\*/", Some(TokenKind::Comment)),
        pattern(r"[0-9]+(\.[0-9]+)?", Some(TokenKind::Number)),
        pattern(r"[a-zA-Z_][a-zA-Z0-9_]*", Some(TokenKind::Word)),
        pattern(r#""[^"]*""#, Some(TokenKind::String)),
        pattern(r"\(", Some(TokenKind::ParenthesisOpen)),
        pattern(r"\)", Some(TokenKind::ParenthesisClose)),
        pattern(r"\{", Some(TokenKind::BraceOpen)),
        pattern(r"\}", Some(TokenKind::BraceClose)),
        pattern(r"\[", Some(TokenKind::SquareBraceOpen)),
        pattern(r"\]", Some(TokenKind::SquareBraceClose)),
        pattern(",", Some(TokenKind::Delimiter)),
        pattern(";", Some(TokenKind::Semicolon)),
        pattern(r"\.", Some(TokenKind::Period)),
        pattern(r"\?", Some(TokenKind::QuestionMark)),
        pattern(
            r"==|!=|<=|>=|&&|\|\||[-+*/%<>=:^]",
            Some(TokenKind::Operator),
        ),
    ]
}

pub fn tokenize(source: &str) -> Vec<Token> {
    let shared = Rc::new(source.to_string());
    let patterns = patterns();
    let mut tokens = vec![];
    let mut pos = 0;

    while pos < source.len() {
        let rest = &source[pos..];
        let (length, kind) = patterns
            .iter()
            .find_map(|p| p.regex.find(rest).map(|m| (m.end(), p.kind)))
            .unwrap_or_else(|| panic!("fixture cannot tokenize {:?}", rest));

        if let Some(kind) = kind {
            tokens.push(MK_TOKEN!(kind, &rest[..length], pos, &shared));
        }
        pos += length;
    }

    tokens
}
