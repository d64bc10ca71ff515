use tracing::debug;

use crate::{
    ast::ast::Node,
    config::DEFAULT_MAX_DEPTH,
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{nodes::NodeList, parser::too_deep};

/// An operator marker awaiting its operands.
struct PendingOperator {
    /// Slot of the marker in the flat list before any folding
    id: usize,
    precedence: i32,
    symbol: String,
    position: Position,
}

impl PendingOperator {
    fn malformed(&self) -> Error {
        Error::new(
            ErrorImpl::MalformedOperatorExpression {
                operator: self.symbol.clone(),
            },
            self.position.clone(),
        )
    }
}

/// Folds the operator markers of a flat node list into nested operator nodes.
///
/// Markers are folded from highest to lowest precedence; ties keep their scan
/// order, so equal-precedence operators associate to the left. Each fold takes
/// the marker's immediate neighbours as its operands, so later folds see
/// already-built subtrees as single operands. A fold whose tree would be
/// deeper than the default depth limit fails with `NestingTooDeep`.
///
/// A list without markers is returned unchanged.
pub fn resolve_operators(ast: Vec<Node>) -> Result<Vec<Node>, Error> {
    let entries = ast
        .into_iter()
        .map(|node| {
            let depth = node.depth();
            (node, depth)
        })
        .collect();

    resolve(entries, DEFAULT_MAX_DEPTH).map(NodeList::into_nodes)
}

/// Resolves `ast` in place of its markers, failing once a folded tree would
/// be deeper than `max_depth`.
pub fn resolve(ast: NodeList, max_depth: usize) -> Result<NodeList, Error> {
    let entries = ast.into_entries();

    let mut pending: Vec<PendingOperator> = entries
        .iter()
        .enumerate()
        .filter_map(|(id, (node, _))| match node {
            Node::Operator(operator) if operator.is_marker() => Some(PendingOperator {
                id,
                precedence: operator.precedence,
                symbol: operator.symbol.clone(),
                position: operator.position.clone(),
            }),
            _ => None,
        })
        .collect();

    if pending.is_empty() {
        return Ok(entries.into_iter().collect());
    }

    // Stable, so equal precedences stay in scan order.
    pending.sort_by(|a, b| b.precedence.cmp(&a.precedence));
    debug!(operators = pending.len(), nodes = entries.len(), "resolve_operators");

    let count = entries.len();
    let (mut slots, mut depths): (Vec<Option<Node>>, Vec<usize>) = entries
        .into_iter()
        .map(|(node, depth)| (Some(node), depth))
        .unzip();

    // Nearest slots on either side that still hold a node.
    let mut prev: Vec<Option<usize>> = (0..count).map(|id| id.checked_sub(1)).collect();
    let mut next: Vec<Option<usize>> = (1..=count).map(|id| (id < count).then_some(id)).collect();

    for operator in &pending {
        let id = operator.id;
        let operand = |slot: Option<usize>| {
            slot.filter(|&slot| slots[slot].as_ref().is_some_and(Node::is_operand))
        };

        let (Some(left), Some(right)) = (operand(prev[id]), operand(next[id])) else {
            return Err(operator.malformed());
        };

        let depth = depths[left].max(depths[right]) + 1;
        if depth > max_depth {
            return Err(too_deep(max_depth, &operator.position));
        }

        let left_node = slots[left].take().map(Box::new);
        let right_node = slots[right].take().map(Box::new);
        if let Some(Node::Operator(node)) = &mut slots[id] {
            node.left = left_node;
            node.right = right_node;
        }
        depths[id] = depth;

        prev[id] = prev[left];
        if let Some(before) = prev[id] {
            next[before] = Some(id);
        }
        next[id] = next[right];
        if let Some(after) = next[id] {
            prev[after] = Some(id);
        }
    }

    Ok(slots
        .into_iter()
        .zip(depths)
        .filter_map(|(slot, depth)| slot.map(|node| (node, depth)))
        .collect())
}
