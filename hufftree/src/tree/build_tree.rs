use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::tree::tree_node::PriorityNode;
use crate::Node;

/// creates a huffman tree from the symbol counts
///
/// Returns `None` for empty input. A single symbol is wrapped in a parent without a symbol, so it
/// still gets a code of one bit. The iteration order of `frequencies` decides ties between equal
/// counts, so passing the same ordered input always yields the same tree.
pub fn build_tree<S, I>(frequencies: I) -> Option<Node<S>>
where
    I: IntoIterator<Item = (S, u64)>,
{
    let mut heap = BinaryHeap::new();
    let mut seq: u64 = 0;
    for (symbol, count) in frequencies {
        heap.push(PriorityNode {
            node: Node::leaf(symbol, count),
            seq: increment_return_old(&mut seq),
        });
    }
    debug!("building tree for {} symbols", heap.len());

    if heap.len() == 1 {
        return heap.pop().map(|el| Node::wrap(el.node));
    }

    while let (Some(el1), el2) = (heap.pop(), heap.pop()) {
        let el2 = match el2 {
            Some(el2) => el2,
            // last node, which will be the root node
            None => return Some(el1.node),
        };
        trace!(
            "merge count:{} seq:{} with count:{} seq:{}",
            el1.node.count,
            el1.seq,
            el2.node.count,
            el2.seq
        );
        // add internal node with aggregated count
        heap.push(PriorityNode {
            node: Node::merge(el1.node, el2.node),
            seq: increment_return_old(&mut seq),
        });
    }
    None
}

#[inline]
fn increment_return_old(val: &mut u64) -> u64 {
    *val += 1;
    *val - 1
}
