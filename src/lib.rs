#![allow(clippy::module_inception)]

use std::rc::Rc;

pub mod ast;
pub mod config;
pub mod errors;
pub mod macros;
pub mod operators;
pub mod parser;
pub mod tokens;

pub use config::ParserConfig;
pub use parser::parser::{parse, parse_with};
pub use parser::precedence::resolve_operators;

/// A byte offset into a shared source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::new()))
    }

    pub fn offset(&self) -> usize {
        self.0 as usize
    }

    pub fn source(&self) -> &str {
        &self.1
    }
}
