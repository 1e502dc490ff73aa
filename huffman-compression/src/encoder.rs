use crate::{
    bits::BitSink,
    code::CodeBook,
    error::CodecError,
    node::{Symbol, Tree},
};

/// Turns symbols into the bits of their paths in a [`Tree`].
#[derive(Debug, Clone)]
pub struct Encoder {
    code_book: CodeBook,
}

impl From<&Tree> for Encoder {
    fn from(tree: &Tree) -> Self {
        Encoder {
            code_book: tree.code_book(),
        }
    }
}

impl Encoder {
    pub fn code_book(&self) -> &CodeBook {
        &self.code_book
    }

    /// Writes the code of every symbol to `sink` and returns the number of
    /// bits written. Stops at the first symbol the tree has no leaf for.
    pub fn encode<I, S>(&self, symbols: I, sink: &mut S) -> Result<u64, CodecError>
    where
        I: IntoIterator<Item = Symbol>,
        S: BitSink + ?Sized,
    {
        let mut written = 0;
        for symbol in symbols {
            let code = self
                .code_book
                .get(symbol)
                .ok_or(CodecError::UnknownSymbol(symbol))?;
            for bit in code.iter() {
                sink.write_bit(bit)?;
            }
            written += code.len() as u64;
        }
        Ok(written)
    }
}
