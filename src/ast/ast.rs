use crate::Position;

/// Node Kinds
///
/// One tag per syntactic form, used when a later token's meaning depends on
/// what was parsed just before it.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeKind {
    Identifier,
    Number,
    String,
    Comment,
    FunctionCall,
    ParenthesisGroup,
    BraceGroup,
    FunctionExpression,
    Set,
    Accessor,
    Period,
    Range,
    Statement,
    Ternary,
    Operator,
}

/// A binary operator.
///
/// Captured as a bare marker (no operands) at its scan position, then filled
/// in exactly once by the precedence resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorExpr {
    pub symbol: String,
    pub name: &'static str,
    pub precedence: i32,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
    /// Where the operator token sat, for error reporting.
    pub position: Position,
}

impl OperatorExpr {
    pub fn is_marker(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Identifier {
        name: String,
    },
    Number {
        value: f64,
    },
    String {
        value: String,
    },
    Comment {
        text: String,
    },
    FunctionCall {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    ParenthesisGroup {
        content: Vec<Node>,
    },
    BraceGroup {
        content: Vec<Node>,
    },
    /// `name` is set only for named function expressions (`f(a){...}`).
    FunctionExpression {
        name: Option<String>,
        parameters: Vec<Node>,
        body: Vec<Node>,
    },
    Set {
        content: Vec<Node>,
    },
    Accessor {
        target: Box<Node>,
        content: Vec<Node>,
    },
    Period {
        target: Box<Node>,
        member: Box<Node>,
    },
    Range {
        start: Box<Node>,
        end: Box<Node>,
    },
    Statement {
        content: Vec<Node>,
    },
    Ternary {
        condition: Box<Node>,
        left: Box<Node>,
        right: Box<Node>,
    },
    Operator(OperatorExpr),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Identifier { .. } => NodeKind::Identifier,
            Node::Number { .. } => NodeKind::Number,
            Node::String { .. } => NodeKind::String,
            Node::Comment { .. } => NodeKind::Comment,
            Node::FunctionCall { .. } => NodeKind::FunctionCall,
            Node::ParenthesisGroup { .. } => NodeKind::ParenthesisGroup,
            Node::BraceGroup { .. } => NodeKind::BraceGroup,
            Node::FunctionExpression { .. } => NodeKind::FunctionExpression,
            Node::Set { .. } => NodeKind::Set,
            Node::Accessor { .. } => NodeKind::Accessor,
            Node::Period { .. } => NodeKind::Period,
            Node::Range { .. } => NodeKind::Range,
            Node::Statement { .. } => NodeKind::Statement,
            Node::Ternary { .. } => NodeKind::Ternary,
            Node::Operator(_) => NodeKind::Operator,
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier { name: name.into() }
    }

    pub fn number(value: f64) -> Self {
        Node::Number { value }
    }

    /// True for an operator that has not been resolved yet.
    pub fn is_operator_marker(&self) -> bool {
        matches!(self, Node::Operator(operator) if operator.is_marker())
    }

    /// A completed unit that may be absorbed by a following construct.
    pub fn is_operand(&self) -> bool {
        !self.is_operator_marker()
    }

    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Identifier { .. }
            | Node::Number { .. }
            | Node::String { .. }
            | Node::Comment { .. } => vec![],
            Node::FunctionCall { callee, arguments } => {
                std::iter::once(callee.as_ref()).chain(arguments).collect()
            }
            Node::ParenthesisGroup { content }
            | Node::BraceGroup { content }
            | Node::Set { content }
            | Node::Statement { content } => content.iter().collect(),
            Node::FunctionExpression {
                parameters, body, ..
            } => parameters.iter().chain(body).collect(),
            Node::Accessor { target, content } => {
                std::iter::once(target.as_ref()).chain(content).collect()
            }
            Node::Period { target, member } => vec![target.as_ref(), member.as_ref()],
            Node::Range { start, end } => vec![start.as_ref(), end.as_ref()],
            Node::Ternary {
                condition,
                left,
                right,
            } => vec![condition.as_ref(), left.as_ref(), right.as_ref()],
            Node::Operator(operator) => operator
                .left
                .iter()
                .chain(&operator.right)
                .map(|node| node.as_ref())
                .collect(),
        }
    }

    /// Edges on the longest path down to a leaf. Literals, comments and
    /// unresolved markers are 0; every other node is one more than its
    /// deepest child, even when it has none.
    pub fn depth(&self) -> usize {
        match self.kind() {
            NodeKind::Identifier | NodeKind::Number | NodeKind::String | NodeKind::Comment => 0,
            _ if self.is_operator_marker() => 0,
            _ => {
                self.children()
                    .into_iter()
                    .map(Node::depth)
                    .max()
                    .unwrap_or(0)
                    + 1
            }
        }
    }
}
