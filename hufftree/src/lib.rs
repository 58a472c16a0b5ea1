/*!
hufftree builds huffman prefix codes for arbitrary symbols, e.g. the words of a text.

The pipeline is
- [`build_tree`] merges the two lowest counts until a single root remains,
- [`generate_codes`] walks the tree and assigns every symbol its path (`0` left, `1` right),
- [`encode`] concatenates the codes of a symbol sequence into a bit string,
- [`render_tree`] draws the tree for humans.

Counts tie quite often for word frequencies. Ties are broken by the order in which the
counts are passed in (parents are ordered after all leafs, in creation order), so the same input
always yields the same codes.

```
use hufftree::{build_tree, encode, generate_codes};

let root = build_tree(vec![("a", 5), ("b", 2), ("c", 1), ("d", 1)]);
let table = generate_codes(root.as_ref());
assert_eq!(table.get(&"a"), Some("1"));
assert_eq!(encode(&["a", "b"], &table), "100");
```
*/

pub mod code_table;
pub mod encode;
pub mod error;
pub mod tree;

pub use crate::code_table::{generate_codes, test_prefix_property, CodeTable};
pub use crate::encode::{encode, encode_strict};
pub use crate::error::HuffError;
pub use crate::tree::{build_tree, minimum_tree_depth, render_dot_to, render_tree, Node};

/// creates a table with the counts of each byte, in order of the byte value
///
/// Bytes which don't occur are left out.
#[inline]
pub fn count_simple(input: &[u8]) -> Vec<(u8, u64)> {
    let mut counts = [0_u64; 256];

    for byte in input {
        counts[*byte as usize] += 1
    }
    counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count != 0)
        .map(|(byte, count)| (byte as u8, *count))
        .collect()
}
