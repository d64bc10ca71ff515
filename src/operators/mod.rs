//! Operator table consulted by the precedence resolver.
//!
//! Maps an operator symbol to a display name and an integer precedence.
//! Higher precedence binds tighter. A default table is provided; callers can
//! supply their own through `ParserConfig`.

pub mod operators;
