use lazy_static::lazy_static;

use crate::{
    errors::{errors::Error, report::MarkerStyle},
    operators::operators::{OperatorTable, DEFAULT_OPERATORS},
};

/// Default bound on bracket, member and ternary recursion.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings shared by every level of a parse.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Symbol to name/precedence mapping used when capturing and resolving operators.
    pub operators: OperatorTable,
    /// Limit on both parse recursion and the depth of any built tree.
    /// Exceeding it fails with `NestingTooDeep` instead of exhausting the
    /// call stack while parsing, or later while dropping or printing.
    pub max_depth: usize,
    /// Marker style callers should use when rendering errors from this parse.
    pub marker_style: MarkerStyle,
}

impl ParserConfig {
    pub fn render(&self, error: &Error) -> String {
        error.render(self.marker_style)
    }

    pub fn with_operators(operators: OperatorTable) -> Self {
        ParserConfig {
            operators,
            ..ParserConfig::default()
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            operators: DEFAULT_OPERATORS.clone(),
            max_depth: DEFAULT_MAX_DEPTH,
            marker_style: MarkerStyle::detect(),
        }
    }
}

lazy_static! {
    /// Configuration used by `parse`.
    pub static ref DEFAULT_CONFIG: ParserConfig = ParserConfig::default();
}
