//! Token types consumed by the parser.
//!
//! Tokens arrive already classified by an external lexer. Each one carries:
//!
//! - Its kind tag
//! - The raw source slice it was cut from
//! - A position (byte offset plus a shared handle to the full source)
//! - A transient grouping-context flag set while parsing

pub mod tokens;
