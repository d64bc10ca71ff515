//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the dispatch loop.
//! A `Parser` is a cheap handle over the shared configuration plus the
//! current nesting depth; every recursive level gets its own handle and its
//! own node list, so no two levels ever mutate the same list.
//!
//! The same depth limit also bounds the trees that are built: a node whose
//! subtree would be deeper than `max_depth` is rejected where it is built.
//!
//! Token ownership follows two modes:
//! - `parse_owned` takes an independent token list (bracket interiors)
//! - `parse_stream` consumes from a stream the caller keeps using afterwards
//!   (ternary branches, member right-hand sides)

use tracing::{debug, trace};

use crate::{
    ast::ast::Node,
    config::{ParserConfig, DEFAULT_CONFIG},
    errors::errors::{Error, ErrorImpl},
    tokens::tokens::{Token, TokenKind, TokenStream},
    Position,
};

use super::{expr::parse_ternary, lookups::UnitParser, nodes::NodeList, precedence::resolve};

/// The main parser structure.
pub struct Parser<'a> {
    /// Operator table and limits shared by all levels
    config: &'a ParserConfig,
    /// Number of enclosing groups, branches or member lookups
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(config: &'a ParserConfig) -> Self {
        Parser { config, depth: 0 }
    }

    pub fn config(&self) -> &ParserConfig {
        self.config
    }

    /// Returns a handle one level deeper, failing at `token` once the
    /// configured depth is exceeded.
    pub fn nested(&self, token: &Token) -> Result<Parser<'a>, Error> {
        if self.depth >= self.config.max_depth {
            return Err(too_deep(self.config.max_depth, &token.position));
        }

        Ok(Parser {
            config: self.config,
            depth: self.depth + 1,
        })
    }

    /// Appends `node`, whose tree is `depth` levels deep, failing at `token`
    /// once that exceeds the configured depth.
    pub fn push_checked(
        &self,
        ast: &mut NodeList,
        node: Node,
        depth: usize,
        token: &Token,
    ) -> Result<(), Error> {
        if depth > self.config.max_depth {
            return Err(too_deep(self.config.max_depth, &token.position));
        }

        ast.push(node, depth);
        Ok(())
    }

    /// Parses an independently owned token list.
    pub fn parse_owned(&self, tokens: Vec<Token>) -> Result<NodeList, Error> {
        let mut stream = TokenStream::from(tokens);
        self.parse_stream(&mut stream)
    }

    /// Drains `stream`, then resolves operator precedence over the result.
    pub fn parse_stream(&self, stream: &mut TokenStream) -> Result<NodeList, Error> {
        let mut ast = NodeList::new();

        while !stream.is_empty() {
            self.parse_unit(stream, &mut ast)?;
        }

        resolve(ast, self.config.max_depth)
    }

    /// Runs a single dispatch step against the front of `stream`.
    pub fn parse_unit(&self, stream: &mut TokenStream, ast: &mut NodeList) -> Result<(), Error> {
        let Some(token) = stream.pop_front() else {
            return Ok(());
        };

        trace!(token = %token, depth = self.depth, "parse_unit");

        if token.kind == TokenKind::QuestionMark {
            return parse_ternary(self, token, stream, ast);
        }

        match UnitParser::lookup(&token) {
            Some(unit) => unit.handler()(self, token, stream, ast),
            None => Err(Error::new(
                ErrorImpl::UnknownToken {
                    token: token.value.clone(),
                },
                token.position.clone(),
            )),
        }
    }
}

/// Parses a token list with the default configuration.
///
/// # Returns
///
/// The top-level nodes, with operators folded by precedence, or the first
/// structural error encountered.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Node>, Error> {
    parse_with(tokens, &DEFAULT_CONFIG)
}

/// Parses a token list with a caller-supplied configuration.
pub fn parse_with(tokens: Vec<Token>, config: &ParserConfig) -> Result<Vec<Node>, Error> {
    debug!(tokens = tokens.len(), max_depth = config.max_depth, "parse");
    Parser::new(config)
        .parse_owned(tokens)
        .map(NodeList::into_nodes)
}

/// Removes the completed node preceding `token`, which needs it as an
/// operand, together with its depth.
pub fn pop_operand(ast: &mut NodeList, token: &Token) -> Result<(Node, usize), Error> {
    ast.pop_if(Node::is_operand)
        .ok_or_else(|| unexpected_token(token))
}

pub fn too_deep(limit: usize, position: &Position) -> Error {
    Error::new(ErrorImpl::NestingTooDeep { limit }, position.clone())
}

pub fn unexpected_token(token: &Token) -> Error {
    Error::new(
        ErrorImpl::UnexpectedToken {
            token: token.value.clone(),
        },
        token.position.clone(),
    )
}
