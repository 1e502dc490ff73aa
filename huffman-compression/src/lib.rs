//! Huffman coding over the byte alphabet.
//!
//! A [`Tree`] is built from a [`FrequencyTable`] (or reloaded from a saved
//! code table) and then drives both the [`Encoder`] and the [`Decoder`].
//! [`HuffmanCode`] bundles the three for the common case of compressing a
//! buffer into a [`Container`].
//!
//! ```
//! use huffman_compression::{FrequencyTable, HuffmanCode};
//!
//! let content = b"abracadabra";
//! let code = HuffmanCode::from_frequencies(&FrequencyTable::from_bytes(content)).unwrap();
//!
//! let container = code.compress(content)?;
//! let mut output = Vec::new();
//! code.decompress(&container, &mut output)?;
//! assert_eq!(output, content);
//! # Ok::<(), huffman_compression::CodecError>(())
//! ```

pub mod bits;
mod builder;
pub mod code;
pub mod container;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod node;
mod queue;
mod table;

use std::io::{BufRead, Write};

use bit_vec::BitVec;
use log::warn;

pub use bits::{BitCursor, BitSink, BitSource};
pub use code::{Bit, Code, CodeBook};
pub use container::Container;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{CodecError, ContainerError, TableError};
pub use frequency::FrequencyTable;
pub use node::{Symbol, Tree};

/// One Huffman tree together with the encoder derived from it.
#[derive(Debug, Clone)]
pub struct HuffmanCode {
    tree: Tree,
    encoder: Encoder,
}

impl From<Tree> for HuffmanCode {
    fn from(tree: Tree) -> Self {
        let encoder = Encoder::from(&tree);
        HuffmanCode { tree, encoder }
    }
}

impl HuffmanCode {
    /// `None` when the table is empty: there is nothing to encode.
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Option<Self> {
        Tree::from_frequencies(frequencies).map(Self::from)
    }

    /// Reloads a code table. `None` when the table has no entries.
    pub fn load<R: BufRead>(reader: R) -> Result<Option<Self>, TableError> {
        let Some(tree) = Tree::load(reader)? else {
            return Ok(None);
        };
        if !tree.is_full() {
            warn!("code table does not describe a full tree, some bit streams will not decode");
        }
        Ok(Some(Self::from(tree)))
    }

    pub fn save<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.tree.save(writer)
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn code_book(&self) -> &CodeBook {
        self.encoder.code_book()
    }

    pub fn encode<I, S>(&self, symbols: I, sink: &mut S) -> Result<u64, CodecError>
    where
        I: IntoIterator<Item = Symbol>,
        S: BitSink + ?Sized,
    {
        self.encoder.encode(symbols, sink)
    }

    pub fn decode<B, W>(&self, source: &mut B, sink: &mut W) -> Result<usize, CodecError>
    where
        B: BitSource + ?Sized,
        W: Write + ?Sized,
    {
        Decoder::from(&self.tree).decode(source, sink)
    }

    pub fn decode_counted<B, W>(
        &self,
        source: &mut B,
        sink: &mut W,
        count: u64,
    ) -> Result<u64, CodecError>
    where
        B: BitSource + ?Sized,
        W: Write + ?Sized,
    {
        Decoder::from(&self.tree).decode_counted(source, sink, count)
    }

    pub fn compress(&self, content: &[u8]) -> Result<Container, CodecError> {
        let mut bits = BitVec::new();
        self.encode(content.iter().copied(), &mut bits)?;
        Ok(Container {
            symbol_count: content.len() as u64,
            bits,
        })
    }

    /// Writes the `symbol_count` symbols held in `container` to `sink`.
    pub fn decompress<W: Write + ?Sized>(
        &self,
        container: &Container,
        sink: &mut W,
    ) -> Result<u64, CodecError> {
        self.decode_counted(&mut container.cursor(), sink, container.symbol_count)
    }
}
