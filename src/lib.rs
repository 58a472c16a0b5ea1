/*!
wordhuff encodes texts word by word with huffman codes.

Each text of the input file (texts are separated by blank lines) is split into lowercase words, the
words are counted and a huffman tree is built from the counts. The report lists, per text, the tree,
the code of every word and the encoded text as a string of `0` and `1`.

The tree and code generation live in the `hufftree` crate, splitting and counting in `hist`.
*/

use std::fs;

use hist::{count_frequencies, tokenize};
use hufftree::{build_tree, encode, encode_strict, generate_codes};
use log::{debug, info, warn};

pub mod config;
pub mod error;
pub mod report;

pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::report::TextReport;
use crate::report::write_header;

/// splits the content at blank lines, surrounding whitespace is trimmed and empty texts are dropped
pub fn split_texts(content: &str) -> Vec<&str> {
    content
        .split("\n\n")
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect()
}

/// builds the codes for the words of `text` and encodes it
///
/// Returns `None` if the text has no words.
pub fn process_text(text: &str, config: &Config) -> Result<Option<TextReport>, Error> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Ok(None);
    }

    let frequencies = count_frequencies(&tokens);
    let tree = build_tree(frequencies);
    let codes = generate_codes(tree.as_ref());
    let encoded = if config.strict {
        encode_strict(&tokens, &codes)?
    } else {
        encode(&tokens, &codes)
    };

    if let Some(root) = &tree {
        debug!(
            "{} words, {} distinct, longest code {} bits, {} bits encoded",
            tokens.len(),
            root.num_leaves(),
            root.depth(),
            encoded.len()
        );
    }

    Ok(Some(TextReport {
        num_tokens: tokens.len(),
        tree,
        codes,
        encoded,
    }))
}

/// reads the texts from `config.input` and writes the report of each text to `config.output`
pub fn run(config: &Config) -> Result<(), Error> {
    if let Some(dir) = config.output.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|source| Error::Output {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    let content = fs::read_to_string(&config.input).map_err(|source| Error::InputUnavailable {
        path: config.input.clone(),
        source,
    })?;

    let texts = split_texts(&content);
    if texts.is_empty() {
        warn!("no texts found in {:?}", config.input);
        return Ok(());
    }

    let mut out = String::new();
    for (pos, text) in texts.iter().enumerate() {
        let index = pos + 1;
        write_header(&mut out, index)?;
        match process_text(text, config)? {
            Some(report) => {
                info!(
                    "text {}: {} words, {:.2} bits per word",
                    index,
                    report.num_tokens,
                    report.bits_per_token()
                );
                report.write_to(&mut out, config.dot)?;
            }
            None => warn!("text {} has no words", index),
        }
    }

    fs::write(&config.output, out).map_err(|source| Error::Output {
        path: config.output.clone(),
        source,
    })?;
    info!("wrote {} texts to {:?}", texts.len(), config.output);
    Ok(())
}
