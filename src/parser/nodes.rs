use crate::ast::ast::Node;

/// The nodes parsed so far at one level, each paired with the depth of the
/// tree below it. Depths are tracked alongside the nodes so that building a
/// parent never has to walk its children again.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NodeList {
    entries: Vec<(Node, usize)>,
}

impl NodeList {
    pub fn new() -> Self {
        NodeList::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Node> {
        self.entries.last().map(|(node, _)| node)
    }

    pub fn push(&mut self, node: Node, depth: usize) {
        self.entries.push((node, depth));
    }

    pub fn pop(&mut self) -> Option<(Node, usize)> {
        self.entries.pop()
    }

    /// Removes and returns the last entry if its node satisfies `predicate`.
    pub fn pop_if(&mut self, predicate: impl FnOnce(&Node) -> bool) -> Option<(Node, usize)> {
        if self.last().is_some_and(predicate) {
            self.entries.pop()
        } else {
            None
        }
    }

    /// Depth of the deepest entry, 0 when empty.
    pub fn depth(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, depth)| *depth)
            .max()
            .unwrap_or(0)
    }

    pub fn into_entries(self) -> Vec<(Node, usize)> {
        self.entries
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.entries.into_iter().map(|(node, _)| node).collect()
    }
}

impl FromIterator<(Node, usize)> for NodeList {
    fn from_iter<I: IntoIterator<Item = (Node, usize)>>(iter: I) -> Self {
        NodeList {
            entries: iter.into_iter().collect(),
        }
    }
}
