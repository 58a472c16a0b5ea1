use super::tree_node::Node;

impl<S> Node<S> {
    /// Visits every node below `self` (and `self`), left subtree before right subtree.
    ///
    /// The callback gets the node, the path from `self` to it (`'0'` for left, `'1'` for right) and its
    /// depth. Uses a work-list instead of recursion, degenerated inputs can produce chains as deep as
    /// the number of symbols.
    pub fn walk_tree<F>(&self, fun: &mut F)
    where
        F: FnMut(&Node<S>, &str, usize),
    {
        let mut stack: Vec<(&Node<S>, String)> = vec![(self, String::new())];
        while let Some((node, path)) = stack.pop() {
            fun(node, &path, path.len());
            // right is pushed first, so the left subtree is visited first
            if let Some(right) = node.right() {
                stack.push((right, extend_path(&path, '1')));
            }
            if let Some(left) = node.left() {
                stack.push((left, extend_path(&path, '0')));
            }
        }
    }

    /// number of nodes carrying a symbol
    pub fn num_leaves(&self) -> usize {
        let mut num = 0;
        self.walk_tree(&mut |node, _path, _depth| {
            if node.is_leaf() {
                num += 1;
            }
        });
        num
    }

    /// length of the longest path to a leaf, which is the number of bits of the longest code
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        self.walk_tree(&mut |node, _path, depth| {
            if node.is_leaf() {
                max_depth = max_depth.max(depth);
            }
        });
        max_depth
    }

    /// returns the number of bits needed to encode all counted symbols
    pub fn estimate_encoded_bits(&self) -> u64 {
        let mut size_in_bits = 0;
        self.walk_tree(&mut |node, _path, depth| {
            if node.is_leaf() {
                size_in_bits += node.count * depth as u64;
            }
        });
        size_in_bits
    }
}

pub(crate) fn extend_path(path: &str, transition: char) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    out.push_str(path);
    out.push(transition);
    out
}
