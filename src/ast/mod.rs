/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed set of node kinds and the operator node payload
/// - display: Compact s-expression rendering of nodes
pub mod ast;
pub mod display;
