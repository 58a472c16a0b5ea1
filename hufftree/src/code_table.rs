use std::fmt::Debug;
use std::hash::Hash;

use log::debug;
use rustc_hash::FxHashMap;

use crate::Node;

/// Symbol to code mapping.
///
/// Keeps the codes in the order they were generated (left subtree first), lookups go through an
/// index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Eq + Hash> {
    entries: Vec<(S, String)>,
    index: FxHashMap<S, usize>,
}

impl<S: Eq + Hash> Default for CodeTable<S> {
    fn default() -> Self {
        CodeTable {
            entries: vec![],
            index: FxHashMap::default(),
        }
    }
}

impl<S: Eq + Hash + Clone> CodeTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// adds the code for `symbol`, replacing an existing one
    pub fn insert(&mut self, symbol: S, code: String) {
        if let Some(&pos) = self.index.get(&symbol) {
            self.entries[pos].1 = code;
            return;
        }
        self.index.insert(symbol.clone(), self.entries.len());
        self.entries.push((symbol, code));
    }
}

impl<S: Eq + Hash> CodeTable<S> {
    pub fn get(&self, symbol: &S) -> Option<&str> {
        self.index
            .get(symbol)
            .map(|pos| self.entries[*pos].1.as_str())
    }
    pub fn contains(&self, symbol: &S) -> bool {
        self.index.contains_key(symbol)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// codes in generation order
    pub fn iter(&self) -> impl Iterator<Item = (&S, &str)> {
        self.entries
            .iter()
            .map(|(symbol, code)| (symbol, code.as_str()))
    }

    /// codes ordered by their length, shortest first. Codes of equal length stay in generation order.
    pub fn sorted_by_len(&self) -> Vec<(&S, &str)> {
        let mut out: Vec<_> = self.iter().collect();
        out.sort_by_key(|(_, code)| code.len());
        out
    }

    pub fn max_code_len(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, code)| code.len())
            .max()
            .unwrap_or(0)
    }
}

/// creates the code table by walking the tree, '0' for a left and '1' for a right transition
///
/// A leaf at the root would get an empty path, it gets the code "0" instead. `build_tree` never
/// creates such a tree, but a hand built one may.
pub fn generate_codes<S: Eq + Hash + Clone>(root: Option<&Node<S>>) -> CodeTable<S> {
    let mut table = CodeTable::new();
    if let Some(root) = root {
        root.walk_tree(&mut |node, path, _depth| {
            if !node.is_leaf() {
                return;
            }
            if let Some(symbol) = node.symbol() {
                let code = if path.is_empty() { "0" } else { path };
                table.insert(symbol.clone(), code.to_string());
            }
        });
    }
    debug!(
        "generated {} codes, longest has {} bits",
        table.len(),
        table.max_code_len()
    );
    table
}

/// will validate the table to have generated correct prefix properties for all symbols.
/// This validation is rather slow and should not be used in a regular encoding run.
///
/// Sorted lexicographically, a code which is the prefix of another one is directly followed by a code
/// it prefixes.
pub fn test_prefix_property<S: Eq + Hash + Debug>(table: &CodeTable<S>) {
    let mut codes: Vec<(&S, &str)> = table.iter().collect();
    codes.sort_by(|a, b| a.1.cmp(b.1));
    for pair in codes.windows(2) {
        let (symbol_a, code_a) = pair[0];
        let (symbol_b, code_b) = pair[1];
        if code_b.starts_with(code_a) {
            panic!(
                "invalid prefix detected between {:?} ({}) and {:?} ({})",
                symbol_a, code_a, symbol_b, code_b
            );
        }
    }
}
