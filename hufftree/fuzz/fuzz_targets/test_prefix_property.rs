#![no_main]

use hufftree::build_tree;
use hufftree::count_simple;
use hufftree::generate_codes;
use hufftree::test_prefix_property;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let counts = count_simple(data);
    let num_symbols = counts.len();
    let root = build_tree(counts);
    let table = generate_codes(root.as_ref());
    assert_eq!(table.len(), num_symbols);
    test_prefix_property(&table);
});
