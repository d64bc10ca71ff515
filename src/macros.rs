//! Utility macros for the parser.
//!
//! - `MK_TOKEN!` - Creates a Token instance pointing into a shared source

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's raw source text
/// * `$offset` - Byte offset of the token in the source
/// * `$source` - `&Rc<String>` holding the full source text
///
/// # Example
///
/// ```ignore
/// let source = Rc::new(String::from("a + 1"));
/// let token = MK_TOKEN!(TokenKind::Operator, "+", 2, &source);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $offset:expr, $source:expr) => {
        $crate::tokens::tokens::Token {
            kind: $kind,
            value: String::from($value),
            position: $crate::Position($offset as u32, std::rc::Rc::clone($source)),
            grouping_context: false,
        }
    };
}
