use std::fmt;
use std::io;
use std::path::PathBuf;

use hufftree::HuffError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The input file is missing or can't be read.
    #[error("could not read input file {path:?}: {source}")]
    InputUnavailable { path: PathBuf, source: io::Error },

    #[error("could not write output file {path:?}: {source}")]
    Output { path: PathBuf, source: io::Error },

    #[error("could not format report")]
    Format(#[from] fmt::Error),

    #[error(transparent)]
    Encode(#[from] HuffError),
}
