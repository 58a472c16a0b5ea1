use std::borrow::Cow;
use std::fmt::{self, Display, Write};

use super::tree::extend_path;
use crate::Node;

const BRANCH_LEFT: &str = "└── ";
const BRANCH_RIGHT: &str = "├── ";
const INDENT_LEFT: &str = "    ";
const INDENT_RIGHT: &str = "│   ";

/// Renders the tree as indented text, one line per node.
///
/// Right children are listed before left children. Leafs show their symbol, count and code, parents
/// their aggregated count.
pub fn render_tree<S: Display>(root: Option<&Node<S>>) -> String {
    let mut out = String::new();
    if let Some(root) = root {
        // writing into a String can not fail
        let _ = write_tree(root, &mut out);
    }
    out
}

fn write_tree<S: Display, W: Write>(root: &Node<S>, output: &mut W) -> fmt::Result {
    // (node, code, prefix, is_left)
    let mut stack: Vec<(&Node<S>, String, String, bool)> =
        vec![(root, String::new(), String::new(), true)];
    while let Some((node, code, prefix, is_left)) = stack.pop() {
        let branch = if is_left { BRANCH_LEFT } else { BRANCH_RIGHT };
        match node.symbol() {
            Some(symbol) if node.is_leaf() => writeln!(
                output,
                "{}{}'{}' (freq: {}, code: '{}')",
                prefix, branch, symbol, node.count(), code
            )?,
            _ => writeln!(output, "{}{}Internal (freq: {})", prefix, branch, node.count())?,
        }

        let child_prefix = prefix + if is_left { INDENT_LEFT } else { INDENT_RIGHT };
        // left is pushed first, so the right subtree is written first
        if let Some(left) = node.left() {
            stack.push((left, extend_path(&code, '0'), child_prefix.clone(), true));
        }
        if let Some(right) = node.right() {
            stack.push((right, extend_path(&code, '1'), child_prefix, false));
        }
    }
    Ok(())
}

impl<S: Display> Display for Node<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(self, f)
    }
}

/// Renders the tree in the graphviz dot format.
pub fn render_dot_to<S: Display, W: Write>(
    root: Option<&Node<S>>,
    output: &mut W,
) -> std::result::Result<(), fmt::Error> {
    match root {
        Some(root) => dot::render(&DotGraph::new(root), output),
        None => Ok(()),
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    from: usize,
    to: usize,
    transition: u8, // 0 or 1
}

/// The tree flattened into positions, so nodes and edges can be referenced by index.
pub struct DotGraph<'t, S> {
    nodes: Vec<&'t Node<S>>,
    edges: Vec<Edge>,
}

impl<'t, S> DotGraph<'t, S> {
    pub fn new(root: &'t Node<S>) -> Self {
        let mut nodes = vec![root];
        let mut edges = vec![];
        let mut pos = 0;
        while pos < nodes.len() {
            let node = nodes[pos];
            for (child, transition) in [(node.left(), 0), (node.right(), 1)] {
                if let Some(child) = child {
                    edges.push(Edge {
                        from: pos,
                        to: nodes.len(),
                        transition,
                    });
                    nodes.push(child);
                }
            }
            pos += 1;
        }
        DotGraph { nodes, edges }
    }
}

impl<'a, 't, S: Display> dot::Labeller<'a> for DotGraph<'t, S> {
    type Node = usize;
    type Edge = Edge;
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("huffman").unwrap()
    }

    fn node_id(&'a self, n: &usize) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label<'b>(&'b self, n: &usize) -> dot::LabelText<'b> {
        let node = self.nodes[*n];
        let out = match node.symbol() {
            Some(symbol) => format!("{} (freq: {})", symbol, node.count()),
            None => format!("freq: {}", node.count()),
        };
        dot::LabelText::LabelStr(out.into())
    }

    /// Adds attr to `n` that will be used in the rendered output.
    fn node_attr(&'a self, n: &Self::Node) -> Option<String> {
        let out = if self.nodes[*n].symbol().is_some() {
            "color=dodgerblue4 fontcolor=dodgerblue4 ".to_string()
        } else {
            "color=azure4 fontcolor=azure4 ".to_string()
        };
        Some(out)
    }

    fn edge_label<'b>(&'b self, ed: &Edge) -> dot::LabelText<'b> {
        dot::LabelText::LabelStr(ed.transition.to_string().into())
    }
}

impl<'a, 't, S> dot::GraphWalk<'a> for DotGraph<'t, S> {
    type Node = usize;
    type Edge = Edge;
    fn nodes(&self) -> dot::Nodes<usize> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&self) -> dot::Edges<Edge> {
        Cow::Owned(self.edges.clone())
    }

    fn source(&self, e: &Edge) -> usize {
        e.from
    }

    fn target(&self, e: &Edge) -> usize {
        e.to
    }
}
