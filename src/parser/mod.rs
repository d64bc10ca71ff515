//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module turns a stream of classified tokens into a list of AST nodes.
//! Parsing happens in two phases:
//!
//! - A dispatch loop offers the front of the stream to an ordered table of
//!   unit parsers, appending each parsed unit to a flat list. Bracket groups
//!   recurse into their interior, and a group's meaning (call, function
//!   expression, accessor, ...) is decided from the node parsed just before it.
//! - Once the stream is drained, the precedence resolver folds the operator
//!   markers in the flat list into nested operator nodes.

pub mod expr;
pub mod lookups;
pub mod nodes;
pub mod parser;
pub mod precedence;
pub mod stmt;
pub mod structure;

#[cfg(test)]
mod tests;
