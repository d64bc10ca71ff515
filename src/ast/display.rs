use std::fmt::{Display, Formatter, Result};

use super::ast::Node;

fn write_all(f: &mut Formatter<'_>, nodes: &[Node]) -> Result {
    for node in nodes {
        write!(f, " {}", node)?;
    }
    Ok(())
}

fn write_list(f: &mut Formatter<'_>, nodes: &[Node]) -> Result {
    write!(f, "(")?;
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", node)?;
    }
    write!(f, ")")
}

/// Renders a node as a compact s-expression, e.g. `a + b * c` as
/// `(+ a (* b c))`.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Node::Identifier { name } => write!(f, "{}", name),
            Node::Number { value } => write!(f, "{}", value),
            Node::String { value } => write!(f, "{:?}", value),
            Node::Comment { text } => write!(f, "(comment {:?})", text),
            Node::FunctionCall { callee, arguments } => {
                write!(f, "(call {}", callee)?;
                write_all(f, arguments)?;
                write!(f, ")")
            }
            Node::ParenthesisGroup { content } => {
                write!(f, "(group")?;
                write_all(f, content)?;
                write!(f, ")")
            }
            Node::BraceGroup { content } => {
                write!(f, "(block")?;
                write_all(f, content)?;
                write!(f, ")")
            }
            Node::FunctionExpression {
                name,
                parameters,
                body,
            } => {
                write!(f, "(fn ")?;
                if let Some(name) = name {
                    write!(f, "{} ", name)?;
                }
                write_list(f, parameters)?;
                write!(f, " ")?;
                write_list(f, body)?;
                write!(f, ")")
            }
            Node::Set { content } => {
                write!(f, "(set")?;
                write_all(f, content)?;
                write!(f, ")")
            }
            Node::Accessor { target, content } => {
                write!(f, "(index {}", target)?;
                write_all(f, content)?;
                write!(f, ")")
            }
            Node::Period { target, member } => write!(f, "(. {} {})", target, member),
            Node::Range { start, end } => write!(f, "(.. {} {})", start, end),
            Node::Statement { content } => {
                write!(f, "(stmt")?;
                write_all(f, content)?;
                write!(f, ")")
            }
            Node::Ternary {
                condition,
                left,
                right,
            } => write!(f, "(? {} {} {})", condition, left, right),
            Node::Operator(operator) => match (&operator.left, &operator.right) {
                (Some(left), Some(right)) => {
                    write!(f, "({} {} {})", operator.symbol, left, right)
                }
                _ => write!(f, "{}", operator.symbol),
            },
        }
    }
}
