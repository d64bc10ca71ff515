use crate::{
    ast::ast::Node,
    errors::errors::Error,
    tokens::tokens::{Token, TokenKind, TokenStream},
};

use super::{
    nodes::NodeList,
    parser::{pop_operand, Parser},
};

/// Width of the comment delimiters on each side, e.g. `/*` and `*/`.
const COMMENT_DELIMITER_WIDTH: usize = 2;

/// Drops a list separator. A parenthesis right after it is a grouping, not a call.
pub fn parse_delimiter(
    _parser: &Parser,
    _token: Token,
    stream: &mut TokenStream,
    _ast: &mut NodeList,
) -> Result<(), Error> {
    if let Some(next) = stream.front_mut() {
        if next.kind == TokenKind::ParenthesisOpen {
            next.grouping_context = true;
        }
    }

    Ok(())
}

pub fn parse_semicolon(
    parser: &Parser,
    token: Token,
    _stream: &mut TokenStream,
    ast: &mut NodeList,
) -> Result<(), Error> {
    let (content, depth) = pop_operand(ast, &token)?;

    let node = Node::Statement {
        content: vec![content],
    };
    parser.push_checked(ast, node, depth + 1, &token)
}

pub fn parse_comment(
    _parser: &Parser,
    token: Token,
    _stream: &mut TokenStream,
    ast: &mut NodeList,
) -> Result<(), Error> {
    let mut chars = token.value.chars();
    for _ in 0..COMMENT_DELIMITER_WIDTH {
        chars.next();
        chars.next_back();
    }

    ast.push(
        Node::Comment {
            text: chars.as_str().to_string(),
        },
        0,
    );
    Ok(())
}
