use crate::{
    errors::errors::Error,
    tokens::tokens::{Token, TokenKind, TokenStream},
};

use super::{expr::*, nodes::NodeList, parser::Parser, stmt::*, structure::*};

/// A unit parser receives the token that selected it (already taken off the
/// stream), the rest of the stream, and the nodes parsed so far at this level.
pub type UnitHandler = fn(&Parser, Token, &mut TokenStream, &mut NodeList) -> Result<(), Error>;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnitParser {
    Delimiter,
    Comment,
    Number,
    String,
    Identifier,
    Parenthesis,
    Set,
    Block,
    Period,
    Operator,
    Semicolon,
}

/// Unit parsers in priority order; the first one whose predicate accepts the
/// front token wins. `QuestionMark` is checked before this table.
pub const UNIT_PARSERS: [UnitParser; 11] = [
    UnitParser::Delimiter,
    UnitParser::Comment,
    UnitParser::Number,
    UnitParser::String,
    UnitParser::Identifier,
    UnitParser::Parenthesis,
    UnitParser::Set,
    UnitParser::Block,
    UnitParser::Period,
    UnitParser::Operator,
    UnitParser::Semicolon,
];

impl UnitParser {
    fn token_kind(self) -> TokenKind {
        match self {
            UnitParser::Delimiter => TokenKind::Delimiter,
            UnitParser::Comment => TokenKind::Comment,
            UnitParser::Number => TokenKind::Number,
            UnitParser::String => TokenKind::String,
            UnitParser::Identifier => TokenKind::Word,
            UnitParser::Parenthesis => TokenKind::ParenthesisOpen,
            UnitParser::Set => TokenKind::SquareBraceOpen,
            UnitParser::Block => TokenKind::BraceOpen,
            UnitParser::Period => TokenKind::Period,
            UnitParser::Operator => TokenKind::Operator,
            UnitParser::Semicolon => TokenKind::Semicolon,
        }
    }

    pub fn matches(self, token: &Token) -> bool {
        token.kind == self.token_kind()
    }

    pub fn handler(self) -> UnitHandler {
        match self {
            UnitParser::Delimiter => parse_delimiter,
            UnitParser::Comment => parse_comment,
            UnitParser::Number => parse_number,
            UnitParser::String => parse_string,
            UnitParser::Identifier => parse_identifier,
            UnitParser::Parenthesis => parse_parenthesis,
            UnitParser::Set => parse_set,
            UnitParser::Block => parse_block,
            UnitParser::Period => parse_period,
            UnitParser::Operator => parse_operator,
            UnitParser::Semicolon => parse_semicolon,
        }
    }

    /// The first unit parser accepting `token`, if any.
    pub fn lookup(token: &Token) -> Option<UnitParser> {
        UNIT_PARSERS.into_iter().find(|unit| unit.matches(token))
    }
}
