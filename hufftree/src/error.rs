use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum HuffError {
    /// A symbol in the sequence has no entry in the code table.
    #[error("unknown symbol {symbol} at position {position}")]
    UnknownSymbol { position: usize, symbol: String },
}
