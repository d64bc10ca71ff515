use std::fmt::Display;

use thiserror::Error;

use crate::Position;

use super::report::{render_excerpt, MarkerStyle};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedGroup { .. } => "UnterminatedGroup",
            ErrorImpl::UnknownToken { .. } => "UnknownToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MalformedOperatorExpression { .. } => "MalformedOperatorExpression",
            ErrorImpl::UnknownOperator { .. } => "UnknownOperator",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedGroup { close } => {
                ErrorTip::Suggestion(format!("Add the missing `{}`", close))
            }
            ErrorImpl::UnknownToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::MalformedOperatorExpression { operator } => ErrorTip::Suggestion(format!(
                "Operator `{}` needs an operand on both sides",
                operator
            )),
            ErrorImpl::UnknownOperator { symbol } => ErrorTip::Suggestion(format!(
                "Operator `{}` is missing from the operator table",
                symbol
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Split long operator or member chains; trees may be at most {} levels deep",
                limit
            )),
        }
    }

    /// Renders the full diagnostic: message, offset and a source excerpt with
    /// the offending character marked.
    pub fn render(&self, style: MarkerStyle) -> String {
        format!(
            "Parse error, {}\nAt {}\n{}",
            self.internal_error,
            self.position.0,
            render_excerpt(&self.position, style)
        )
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(MarkerStyle::Plain))
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid nesting. No closing `{close}` was found")]
    UnterminatedGroup { close: String },
    #[error("unknown token: {token:?}")]
    UnknownToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("operator {operator:?} is missing an operand")]
    MalformedOperatorExpression { operator: String },
    #[error("unknown operator: {symbol:?}")]
    UnknownOperator { symbol: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}
