use derive_more::{Display, Error};

/// Errors raised while reading a persisted code table.
///
/// Only the textual syntax is checked here. Structural problems (overlapping
/// paths, a missing sibling) are not detected by the loader, see
/// [`crate::node::Tree::is_full`].
#[derive(Debug, Display, Error)]
pub enum TableError {
    #[display(fmt = "failed to read code table: {}", _0)]
    Io(#[error(source)] std::io::Error),

    #[display(fmt = "line {}: expected a symbol in 0..=255, got {:?}", line, value)]
    InvalidSymbol { line: usize, value: String },

    #[display(fmt = "line {}: path {:?} may only contain '0' and '1'", line, value)]
    InvalidPath { line: usize, value: String },

    #[display(fmt = "line {}: symbol {} has no path line", line, symbol)]
    MissingPath { line: usize, symbol: u8 },
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::Io(err)
    }
}

/// Errors raised by the stream encoder and decoder.
///
/// All of them are fatal: prefix codes cannot resynchronise, so the rest of the
/// stream is unusable once one is returned.
#[derive(Debug, Display, Error)]
pub enum CodecError {
    #[display(fmt = "symbol {} is not in the code table", _0)]
    UnknownSymbol(#[error(not(source))] u8),

    #[display(fmt = "bit stream ended in the middle of a code after {} bits", _0)]
    Truncated(#[error(not(source))] u64),

    #[display(fmt = "bit stream leads outside the code tree at bit {}", _0)]
    Corrupt(#[error(not(source))] u64),

    #[display(fmt = "a single-symbol code consumes no bits; decode it with a symbol count")]
    SingleLeafTree,

    #[display(fmt = "io error: {}", _0)]
    Io(#[error(source)] std::io::Error),
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io(err)
    }
}

/// Errors raised while reading or writing a compressed container.
#[derive(Debug, Display, Error)]
pub enum ContainerError {
    #[display(fmt = "io error: {}", _0)]
    Io(#[error(source)] std::io::Error),

    #[display(fmt = "container header is truncated")]
    TruncatedHeader,

    #[display(fmt = "container declares {} bits but only carries {}", declared, available)]
    PayloadTooShort { declared: u64, available: u64 },
}

impl From<std::io::Error> for ContainerError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::UnexpectedEof => ContainerError::TruncatedHeader,
            _ => ContainerError::Io(err),
        }
    }
}
