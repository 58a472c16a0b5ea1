#![no_main]

use hufftree::build_tree;
use hufftree::count_simple;
use hufftree::encode;
use hufftree::generate_codes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let counts = count_simple(data);
    let root = build_tree(counts).unwrap();
    let table = generate_codes(Some(&root));
    let encoded = encode(data, &table);
    assert_eq!(encoded.len() as u64, root.estimate_encoded_bits());
});
