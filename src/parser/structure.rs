use tracing::trace;

use crate::{
    ast::ast::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    tokens::tokens::{Token, TokenKind, TokenStream},
};

use super::{
    nodes::NodeList,
    parser::{unexpected_token, Parser},
};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BracketFamily {
    Parenthesis,
    Brace,
    SquareBrace,
}

impl BracketFamily {
    pub fn open(self) -> TokenKind {
        match self {
            BracketFamily::Parenthesis => TokenKind::ParenthesisOpen,
            BracketFamily::Brace => TokenKind::BraceOpen,
            BracketFamily::SquareBrace => TokenKind::SquareBraceOpen,
        }
    }

    pub fn close(self) -> TokenKind {
        match self {
            BracketFamily::Parenthesis => TokenKind::ParenthesisClose,
            BracketFamily::Brace => TokenKind::BraceClose,
            BracketFamily::SquareBrace => TokenKind::SquareBraceClose,
        }
    }

    fn close_text(self) -> &'static str {
        match self {
            BracketFamily::Parenthesis => ")",
            BracketFamily::Brace => "}",
            BracketFamily::SquareBrace => "]",
        }
    }
}

/// Finds the token closing a group whose opening token has already been taken
/// off `stream`. Only brackets of `family` are counted.
///
/// # Returns
///
/// The index of the closing token within `stream`, or `UnterminatedGroup`
/// anchored at the last token seen.
pub fn find_group_close(
    open: &Token,
    stream: &TokenStream,
    family: BracketFamily,
) -> Result<usize, Error> {
    let mut opens = 1;

    for (position, token) in stream.iter().enumerate() {
        if token.kind == family.open() {
            opens += 1;
        } else if token.kind == family.close() {
            opens -= 1;
            if opens == 0 {
                return Ok(position);
            }
        }
    }

    let last_seen = stream.back().unwrap_or(open);
    Err(Error::new(
        ErrorImpl::UnterminatedGroup {
            close: String::from(family.close_text()),
        },
        last_seen.position.clone(),
    ))
}

/// Cuts a whole group out of `stream` and parses its interior one level deeper.
///
/// # Returns
///
/// The interior's nodes and the depth of the deepest of them.
pub fn parse_group(
    parser: &Parser,
    open: &Token,
    stream: &mut TokenStream,
    family: BracketFamily,
) -> Result<(Vec<Node>, usize), Error> {
    let close = find_group_close(open, stream, family)?;
    let interior: Vec<Token> = stream.drain(..close).collect();
    stream.pop_front();

    let content = parser.nested(open)?.parse_owned(interior)?;
    let depth = content.depth();
    Ok((content.into_nodes(), depth))
}

/// `f(x)` becomes a call on the preceding node; `(x)` after nothing, after a
/// statement or after a delimiter stays a parenthesis group.
pub fn parse_parenthesis(
    parser: &Parser,
    token: Token,
    stream: &mut TokenStream,
    ast: &mut NodeList,
) -> Result<(), Error> {
    let (content, content_depth) =
        parse_group(parser, &token, stream, BracketFamily::Parenthesis)?;

    let callee = if token.grouping_context {
        None
    } else {
        ast.pop_if(|node| node.is_operand() && node.kind() != NodeKind::Statement)
    };

    let (node, depth) = match callee {
        Some((callee, callee_depth)) => {
            trace!(callee = %callee, "function call");
            let call = Node::FunctionCall {
                callee: Box::new(callee),
                arguments: content,
            };
            (call, callee_depth.max(content_depth) + 1)
        }
        None => (Node::ParenthesisGroup { content }, content_depth + 1),
    };

    parser.push_checked(ast, node, depth, &token)
}

fn named_function_expression(
    callee: Node,
    parameters: Vec<Node>,
    body: Vec<Node>,
    token: &Token,
) -> Result<Node, Error> {
    match callee {
        Node::Identifier { name } => Ok(Node::FunctionExpression {
            name: Some(name),
            parameters,
            body,
        }),
        _ => Err(unexpected_token(token)),
    }
}

/// A brace group following a call is a named function expression, following
/// a parenthesis group an anonymous one, and otherwise a plain block.
pub fn parse_block(
    parser: &Parser,
    token: Token,
    stream: &mut TokenStream,
    ast: &mut NodeList,
) -> Result<(), Error> {
    let (body, body_depth) = parse_group(parser, &token, stream, BracketFamily::Brace)?;

    // A function expression takes over the parameters of the call or group
    // before it, so it is as deep as that node or one below the body.
    let (node, depth) = match ast.pop() {
        Some((Node::FunctionCall { callee, arguments }, depth)) => (
            named_function_expression(*callee, arguments, body, &token)?,
            depth.max(body_depth + 1),
        ),
        Some((Node::ParenthesisGroup { content }, depth)) => (
            Node::FunctionExpression {
                name: None,
                parameters: content,
                body,
            },
            depth.max(body_depth + 1),
        ),
        previous => {
            if let Some((node, depth)) = previous {
                ast.push(node, depth);
            }
            (Node::BraceGroup { content: body }, body_depth + 1)
        }
    };

    parser.push_checked(ast, node, depth, &token)
}

/// `a[0]` indexes the preceding node; `[0]` with nothing before it is a set.
pub fn parse_set(
    parser: &Parser,
    token: Token,
    stream: &mut TokenStream,
    ast: &mut NodeList,
) -> Result<(), Error> {
    let (content, content_depth) =
        parse_group(parser, &token, stream, BracketFamily::SquareBrace)?;

    let (node, depth) = match ast.pop_if(Node::is_operand) {
        Some((target, target_depth)) => (
            Node::Accessor {
                target: Box::new(target),
                content,
            },
            target_depth.max(content_depth) + 1,
        ),
        None => (Node::Set { content }, content_depth + 1),
    };

    parser.push_checked(ast, node, depth, &token)
}
