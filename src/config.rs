use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_INPUT: &str = "data/input.dat";
pub const DEFAULT_OUTPUT: &str = "data/output.dat";

/// Builds huffman codes for the words of every text in a file.
///
/// Texts in the input file are separated by blank lines. Log output is controlled by `RUST_LOG`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[clap(name = "wordhuff", version)]
pub struct Config {
    /// File with the texts to encode
    #[clap(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// File the report is written to, its directory is created if missing
    #[clap(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Fail on words without a code instead of skipping them
    #[clap(long)]
    pub strict: bool,

    /// Append a graphviz dot rendering of each tree to the report
    #[clap(long)]
    pub dot: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            strict: false,
            dot: false,
        }
    }
}
