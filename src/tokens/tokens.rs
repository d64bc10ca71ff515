use std::{collections::VecDeque, fmt::Display};

use crate::Position;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Word,
    Number,
    String,
    Operator,
    Comment,

    Delimiter, // ,
    Semicolon,
    Period,
    QuestionMark,

    ParenthesisOpen,
    ParenthesisClose,
    BraceOpen,
    BraceClose,
    SquareBraceOpen,
    SquareBraceClose,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
    /// Set on an opening parenthesis that directly follows a delimiter, so the
    /// group is read as a grouping rather than a call.
    pub grouping_context: bool,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} `{}` at {}", self.kind, self.value, self.position.0)
    }
}

/// The live token sequence a parse level consumes from the front.
pub type TokenStream = VecDeque<Token>;
