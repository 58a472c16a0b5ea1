//! Symbol histograms for the huffman coder: splitting text into words and counting them.

use std::hash::Hash;

use log::debug;
use rustc_hash::FxHashMap;

/// Splits text into lowercase words.
///
/// Every character which is neither alphanumeric, `_` nor whitespace is treated like a space, so
/// punctuation separates words and never ends up inside one.
pub fn tokenize(text: &str) -> Vec<String> {
    let clean_text: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if is_word_char(c) || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    let words: Vec<String> = clean_text.split_whitespace().map(str::to_string).collect();
    debug!("tokenized {} bytes into {} words", text.len(), words.len());
    words
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Counts of distinct symbols, in order of their first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequencies<S: Eq + Hash> {
    counts: Vec<(S, u64)>,
    index: FxHashMap<S, usize>,
}

impl<S: Eq + Hash> Default for Frequencies<S> {
    fn default() -> Self {
        Frequencies {
            counts: vec![],
            index: FxHashMap::default(),
        }
    }
}

impl<S: Eq + Hash + Clone> Frequencies<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, symbol: &S) {
        match self.index.get(symbol) {
            Some(&pos) => self.counts[pos].1 += 1,
            None => {
                self.index.insert(symbol.clone(), self.counts.len());
                self.counts.push((symbol.clone(), 1));
            }
        }
    }
}

impl<S: Eq + Hash> Frequencies<S> {
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).map(|pos| self.counts[*pos].1)
    }

    /// number of distinct symbols
    pub fn len(&self) -> usize {
        self.counts.len()
    }
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// number of counted symbols
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> {
        self.counts.iter().map(|(symbol, count)| (symbol, *count))
    }
}

impl<S: Eq + Hash> IntoIterator for Frequencies<S> {
    type Item = (S, u64);
    type IntoIter = std::vec::IntoIter<(S, u64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a, S: Eq + Hash + Clone + 'a> FromIterator<&'a S> for Frequencies<S> {
    fn from_iter<I: IntoIterator<Item = &'a S>>(iter: I) -> Self {
        let mut frequencies = Frequencies::new();
        for symbol in iter {
            frequencies.add(symbol);
        }
        frequencies
    }
}

/// creates a table with the counts of each symbol
#[inline]
pub fn count_frequencies<S: Eq + Hash + Clone>(symbols: &[S]) -> Frequencies<S> {
    let frequencies: Frequencies<S> = symbols.iter().collect();
    debug!(
        "counted {} symbols, {} distinct",
        frequencies.total(),
        frequencies.len()
    );
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Setup function that is only run once, even if called multiple times.
    fn setup() {
        INIT.call_once(|| {
            env_logger::init();
        });
    }

    #[test]
    fn tokenize_strips_punctuation() {
        setup();
        assert_eq!(
            tokenize("Hello, World! It's a test."),
            vec!["hello", "world", "it", "s", "a", "test"]
        );
    }

    #[test]
    fn tokenize_splits_on_any_whitespace() {
        setup();
        assert_eq!(
            tokenize("one  two\nthree\tfour "),
            vec!["one", "two", "three", "four"]
        );
    }

    #[test]
    fn tokenize_keeps_unicode_words() {
        setup();
        assert_eq!(
            tokenize("Árvore de Huffman: código_final 42"),
            vec!["árvore", "de", "huffman", "código_final", "42"]
        );
    }

    #[test]
    fn tokenize_without_words() {
        setup();
        assert!(tokenize("").is_empty());
        assert!(tokenize("?! ... --").is_empty());
    }

    #[test]
    fn count_in_first_occurrence_order() {
        setup();
        let words = tokenize("b a b c a b");
        let frequencies = count_frequencies(&words);
        assert_eq!(frequencies.len(), 3);
        assert_eq!(frequencies.total(), 6);
        assert_eq!(frequencies.get(&"b".to_string()), Some(3));
        assert_eq!(frequencies.get(&"z".to_string()), None);
        let order: Vec<(&str, u64)> = frequencies
            .iter()
            .map(|(symbol, count)| (symbol.as_str(), count))
            .collect();
        assert_eq!(order, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn count_empty() {
        let frequencies = count_frequencies::<char>(&[]);
        assert!(frequencies.is_empty());
        assert_eq!(frequencies.total(), 0);
        assert_eq!(frequencies.into_iter().count(), 0);
    }

    #[test]
    fn into_iter_yields_owned_pairs() {
        let frequencies = count_frequencies(&['x', 'y', 'x']);
        let pairs: Vec<(char, u64)> = frequencies.into_iter().collect();
        assert_eq!(pairs, vec![('x', 2), ('y', 1)]);
    }
}
