use core::cmp::Ordering;

/// A node of the huffman tree.
///
/// A leaf carries a symbol and no children. An internal node carries no symbol and the summed count
/// of its children. The synthetic root created for a single symbol input is the only node with just
/// a `left` child.
#[derive(Clone, PartialEq, Eq)]
pub struct Node<S> {
    /// the symbol, only set on leafs
    pub(crate) symbol: Option<S>,
    /// the number of occurences, for parents the sum of both children
    pub(crate) count: u64,
    pub(crate) left: Option<Box<Node<S>>>,
    pub(crate) right: Option<Box<Node<S>>>,
}

impl<S> Node<S> {
    pub fn leaf(symbol: S, count: u64) -> Self {
        Node {
            symbol: Some(symbol),
            count,
            left: None,
            right: None,
        }
    }

    /// creates a parent with the aggregated count of both children
    pub fn merge(left: Node<S>, right: Node<S>) -> Self {
        Node {
            symbol: None,
            count: left.count + right.count,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// wraps a single leaf, so that it still gets a one bit path
    pub(crate) fn wrap(leaf: Node<S>) -> Self {
        Node {
            symbol: None,
            count: leaf.count,
            left: Some(Box::new(leaf)),
            right: None,
        }
    }

    pub fn symbol(&self) -> Option<&S> {
        self.symbol.as_ref()
    }
    pub fn count(&self) -> u64 {
        self.count
    }
    pub fn left(&self) -> Option<&Node<S>> {
        self.left.as_deref()
    }
    pub fn right(&self) -> Option<&Node<S>> {
        self.right.as_deref()
    }
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for Node<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_leaf() {
            f.write_fmt(format_args!(
                "Node{{ symbol:{:?} count:{} }}",
                self.symbol, self.count
            ))
        } else {
            f.write_fmt(format_args!(
                "Node{{ count:{} left:{:?} right:{:?} }}",
                self.count, self.left, self.right
            ))
        }
    }
}

/// Entry of the priority queue used while building the tree.
///
/// `seq` is assigned on creation: leafs are numbered in input order, parents continue the numbering in
/// creation order. Ordering by `(count, seq)` makes the queue order total, so the same input always
/// yields the same tree.
pub(crate) struct PriorityNode<S> {
    pub(crate) node: Node<S>,
    pub(crate) seq: u64,
}

impl<S> PriorityNode<S> {
    fn key(&self) -> (u64, u64) {
        (self.node.count, self.seq)
    }
}

impl<S> PartialEq for PriorityNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S> Eq for PriorityNode<S> {}

impl<S> PartialOrd for PriorityNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl<S> Ord for PriorityNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // flipped, lowest count first. On a tie the lower sequence number wins
        other.key().cmp(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(symbol: &'static str, count: u64, seq: u64) -> PriorityNode<&'static str> {
        PriorityNode {
            node: Node::leaf(symbol, count),
            seq,
        }
    }

    #[test]
    fn heap_pops_lowest_count_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry("a", 5, 0));
        heap.push(entry("b", 1, 1));
        heap.push(entry("c", 3, 2));
        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|el| el.node.count)
            .collect();
        assert_eq!(order, vec![1, 3, 5]);
    }

    #[test]
    fn heap_breaks_ties_by_sequence() {
        let mut heap = BinaryHeap::new();
        heap.push(entry("late", 2, 7));
        heap.push(entry("early", 2, 3));
        heap.push(entry("middle", 2, 5));
        assert_eq!(heap.pop().unwrap().node.symbol, Some("early"));
        assert_eq!(heap.pop().unwrap().node.symbol, Some("middle"));
        assert_eq!(heap.pop().unwrap().node.symbol, Some("late"));
    }

    #[test]
    fn merge_sums_counts() {
        let parent = Node::merge(Node::leaf('x', 4), Node::leaf('y', 6));
        assert_eq!(parent.count(), 10);
        assert_eq!(parent.symbol(), None);
        assert!(!parent.is_leaf());
        assert_eq!(parent.left().unwrap().symbol(), Some(&'x'));
        assert_eq!(parent.right().unwrap().symbol(), Some(&'y'));
    }

    #[test]
    fn wrap_has_only_left_child() {
        let root = Node::wrap(Node::leaf('x', 4));
        assert_eq!(root.count(), 4);
        assert!(!root.is_leaf());
        assert!(root.left().unwrap().is_leaf());
        assert!(root.right().is_none());
    }
}
