use std::fmt::{self, Write};

use hufftree::{render_dot_to, render_tree, CodeTable, Node};

/// Result of encoding one text.
#[derive(Debug, Clone)]
pub struct TextReport {
    /// number of words in the text
    pub num_tokens: usize,
    pub tree: Option<Node<String>>,
    pub codes: CodeTable<String>,
    pub encoded: String,
}

/// writes the section header, which precedes every text, even those without words
pub fn write_header<W: Write>(out: &mut W, index: usize) -> fmt::Result {
    write!(out, "========= TEXT {} =========\n\n", index)
}

impl TextReport {
    /// writes the tree, the code table (shortest codes first) and the encoded text
    pub fn write_to<W: Write>(&self, out: &mut W, with_dot: bool) -> fmt::Result {
        writeln!(out, "1 - Tree Structure")?;
        write!(out, "{}\n\n", render_tree(self.tree.as_ref()))?;

        writeln!(out, "2 - Code Table:")?;
        for (symbol, code) in self.codes.sorted_by_len() {
            writeln!(out, "'{}': {}", symbol, code)?;
        }
        writeln!(out)?;

        writeln!(out, "3 - Encoded Text:")?;
        write!(out, "{}\n\n", self.encoded)?;

        if with_dot {
            writeln!(out, "4 - Graphviz:")?;
            render_dot_to(self.tree.as_ref(), out)?;
            write!(out, "\n\n")?;
        }
        Ok(())
    }

    /// average number of bits per word
    pub fn bits_per_token(&self) -> f64 {
        if self.num_tokens == 0 {
            return 0.0;
        }
        self.encoded.len() as f64 / self.num_tokens as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hufftree::{build_tree, encode, generate_codes};

    fn report_for(words: &[&str], frequencies: Vec<(&str, u64)>) -> TextReport {
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        let tree = build_tree(
            frequencies
                .into_iter()
                .map(|(symbol, count)| (symbol.to_string(), count)),
        );
        let codes = generate_codes(tree.as_ref());
        let encoded = encode(&words, &codes);
        TextReport {
            num_tokens: words.len(),
            tree,
            codes,
            encoded,
        }
    }

    #[test]
    fn header() {
        let mut out = String::new();
        write_header(&mut out, 3).unwrap();
        assert_eq!(out, "========= TEXT 3 =========\n\n");
    }

    #[test]
    fn section_layout() {
        let report = report_for(&["the", "cat", "the"], vec![("the", 2), ("cat", 1)]);
        let mut out = String::new();
        report.write_to(&mut out, false).unwrap();
        let expected = "\
1 - Tree Structure
└── Internal (freq: 3)
    ├── 'the' (freq: 2, code: '1')
    └── 'cat' (freq: 1, code: '0')


2 - Code Table:
'cat': 0
'the': 1

3 - Encoded Text:
101

";
        assert_eq!(out, expected);
        assert!((report.bits_per_token() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn code_table_shortest_first() {
        let report = report_for(
            &["a", "b", "c", "d"],
            vec![("a", 5), ("b", 2), ("c", 1), ("d", 1)],
        );
        let mut out = String::new();
        report.write_to(&mut out, false).unwrap();
        assert!(out.contains("2 - Code Table:\n'a': 1\n'b': 00\n'c': 010\n'd': 011\n\n"));
        assert!(out.contains("3 - Encoded Text:\n100010011\n\n"));
    }

    #[test]
    fn section_with_dot() {
        let report = report_for(&["x", "y"], vec![("x", 1), ("y", 1)]);
        let mut out = String::new();
        report.write_to(&mut out, true).unwrap();
        let dot_start = out.find("4 - Graphviz:\n").unwrap();
        assert!(out[dot_start..].contains("digraph huffman"));
        assert!(out.ends_with("\n\n"));
    }
}
