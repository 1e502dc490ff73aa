use std::io::{self, Read, Write};

use crate::{
    bits::BitSource,
    error::CodecError,
    node::{NodeId, Symbol, Tree},
};

/// Turns bits back into symbols by walking a [`Tree`] from the root.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'t> {
    tree: &'t Tree,
}

impl<'t> From<&'t Tree> for Decoder<'t> {
    fn from(tree: &'t Tree) -> Self {
        Decoder { tree }
    }
}

impl Decoder<'_> {
    /// Decodes until `source` runs dry, returning the number of symbols
    /// written to `sink`.
    ///
    /// The loop keeps going while bits remain or while the walk is sitting on
    /// a leaf that has not been emitted yet, so the last symbol is written even
    /// though its final bit drained the source. Running dry anywhere but back
    /// at the root is a truncated stream.
    ///
    /// A single-leaf tree codes its symbol with no bits at all, so the bits
    /// cannot say how many there were; use [`Decoder::decode_counted`].
    pub fn decode<B, W>(&self, source: &mut B, sink: &mut W) -> Result<usize, CodecError>
    where
        B: BitSource + ?Sized,
        W: Write + ?Sized,
    {
        if self.tree.is_single_leaf() {
            return Err(CodecError::SingleLeafTree);
        }

        let root = self.tree.root();
        let mut position = root;
        let mut consumed = 0;
        let mut decoded = 0;

        while source.has_next_bit() || self.tree.node(position).is_leaf() {
            match self.tree.node(position).symbol() {
                Some(symbol) => {
                    sink.write_all(&[symbol])?;
                    decoded += 1;
                    position = root;
                }
                None => position = self.step(position, source, &mut consumed)?,
            }
        }

        if position != root {
            return Err(CodecError::Truncated(consumed));
        }
        Ok(decoded)
    }

    /// Decodes exactly `count` symbols and leaves whatever bits follow them
    /// unread.
    ///
    /// For a single-leaf tree the symbol is repeated `count` times without
    /// reading anything.
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
        if let Some(symbol) = self.tree.node(self.tree.root()).symbol() {
            io::copy(&mut io::repeat(symbol).take(count), sink)?;
            return Ok(count);
        }

        let mut consumed = 0;
        for _ in 0..count {
            let symbol = self.next_symbol(source, &mut consumed)?;
            sink.write_all(&[symbol])?;
        }
        Ok(count)
    }

    fn next_symbol<B>(&self, source: &mut B, consumed: &mut u64) -> Result<Symbol, CodecError>
    where
        B: BitSource + ?Sized,
    {
        let mut position = self.tree.root();
        loop {
            if let Some(symbol) = self.tree.node(position).symbol() {
                return Ok(symbol);
            }
            if !source.has_next_bit() {
                return Err(CodecError::Truncated(*consumed));
            }
            position = self.step(position, source, consumed)?;
        }
    }

    fn step<B>(
        &self,
        from: NodeId,
        source: &mut B,
        consumed: &mut u64,
    ) -> Result<NodeId, CodecError>
    where
        B: BitSource + ?Sized,
    {
        let bit = source.next_bit()?;
        *consumed += 1;
        self.tree
            .node(from)
            .child(bit)
            .ok_or(CodecError::Corrupt(*consumed))
    }
}
