use crate::{
    ast::ast::{Node, OperatorExpr},
    errors::errors::{Error, ErrorImpl},
    tokens::tokens::{Token, TokenKind, TokenStream},
};

use super::{
    nodes::NodeList,
    parser::{pop_operand, unexpected_token, Parser},
};

pub fn parse_number(
    _parser: &Parser,
    token: Token,
    _stream: &mut TokenStream,
    ast: &mut NodeList,
) -> Result<(), Error> {
    let value = token.value.parse::<f64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.position.clone(),
        )
    })?;

    ast.push(Node::Number { value }, 0);
    Ok(())
}

/// String tokens keep their quotes; the node value drops them.
pub fn parse_string(
    _parser: &Parser,
    token: Token,
    _stream: &mut TokenStream,
    ast: &mut NodeList,
) -> Result<(), Error> {
    let mut chars = token.value.chars();
    chars.next();
    chars.next_back();

    ast.push(
        Node::String {
            value: chars.as_str().to_string(),
        },
        0,
    );
    Ok(())
}

pub fn parse_identifier(
    _parser: &Parser,
    token: Token,
    _stream: &mut TokenStream,
    ast: &mut NodeList,
) -> Result<(), Error> {
    ast.push(Node::Identifier { name: token.value }, 0);
    Ok(())
}

/// `a.b` is member access, `a..b` a range. The right-hand side is exactly one
/// unit parsed from the same stream.
pub fn parse_period(
    parser: &Parser,
    token: Token,
    stream: &mut TokenStream,
    ast: &mut NodeList,
) -> Result<(), Error> {
    let is_range = stream
        .front()
        .is_some_and(|next| next.kind == TokenKind::Period);
    if is_range {
        stream.pop_front();
    }

    let (left, left_depth) = pop_operand(ast, &token)?;

    let mut right = NodeList::new();
    parser.nested(&token)?.parse_unit(stream, &mut right)?;
    let (right, right_depth) = match right.pop() {
        Some((node, depth)) if node.is_operand() => (node, depth),
        _ => return Err(unexpected_token(&token)),
    };

    let node = if is_range {
        Node::Range {
            start: Box::new(left),
            end: Box::new(right),
        }
    } else {
        Node::Period {
            target: Box::new(left),
            member: Box::new(right),
        }
    };

    parser.push_checked(ast, node, left_depth.max(right_depth) + 1, &token)
}

/// Captures an operator as an unresolved marker at its scan position.
pub fn parse_operator(
    parser: &Parser,
    token: Token,
    _stream: &mut TokenStream,
    ast: &mut NodeList,
) -> Result<(), Error> {
    let Some(info) = parser.config().operators.get(&token.value) else {
        return Err(Error::new(
            ErrorImpl::UnknownOperator {
                symbol: token.value.clone(),
            },
            token.position.clone(),
        ));
    };

    ast.push(
        Node::Operator(OperatorExpr {
            name: info.name,
            precedence: info.precedence,
            symbol: token.value,
            left: None,
            right: None,
            position: token.position,
        }),
        0,
    );
    Ok(())
}

/// `cond ? a : b` consumes the whole rest of the current stream, which must
/// resolve to a single `:` operator holding the two branches.
pub fn parse_ternary(
    parser: &Parser,
    token: Token,
    stream: &mut TokenStream,
    ast: &mut NodeList,
) -> Result<(), Error> {
    let (condition, condition_depth) = pop_operand(ast, &token)?;

    let mut content = parser.nested(&token)?.parse_stream(stream)?;
    let (branches, branches_depth) = match (content.pop(), content.is_empty()) {
        (Some((Node::Operator(colon), depth)), true) if colon.symbol == ":" => (colon, depth),
        _ => return Err(unexpected_token(&token)),
    };

    let (Some(left), Some(right)) = (branches.left, branches.right) else {
        return Err(unexpected_token(&token));
    };

    // The branches hang one level below the `:` they were folded into.
    let node = Node::Ternary {
        condition: Box::new(condition),
        left,
        right,
    };
    parser.push_checked(ast, node, branches_depth.max(condition_depth + 1), &token)
}
