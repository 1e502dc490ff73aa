use std::io::{BufRead, Write};

use log::debug;

use crate::{
    code::Code,
    error::TableError,
    node::{Arena, Symbol, Tree},
};

impl Tree {
    /// Writes the code table: for every leaf in pre-order, one line with the
    /// symbol in decimal and one line with its path. A single-leaf tree has an
    /// empty path line.
    pub fn save<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let leaves = self.leaves();
        for (symbol, code) in &leaves {
            writeln!(writer, "{}", symbol)?;
            writeln!(writer, "{}", code)?;
        }
        debug!("saved code table with {} entries", leaves.len());
        Ok(())
    }

    /// Rebuilds a tree from a code table written by [`Tree::save`].
    ///
    /// Each pair walks down from the root, creating internal nodes as needed,
    /// and puts its leaf at the end of the path. Returns `None` for an empty
    /// table. Only the line syntax is checked: a table whose paths overlap or
    /// leave a node with one child still loads, into a tree that is not
    /// [`full`](Tree::is_full).
    pub fn load<R: BufRead>(reader: R) -> Result<Option<Self>, TableError> {
        let mut arena = Arena::default();
        let mut root = None;
        let mut entries = 0;
        let mut lines = reader.lines().enumerate();

        while let Some((index, line)) = lines.next() {
            let line = line?;
            let symbol = parse_symbol(index + 1, &line)?;

            let path = match lines.next() {
                Some((index, line)) => parse_path(index + 1, &line?)?,
                None => {
                    return Err(TableError::MissingPath {
                        line: index + 1,
                        symbol,
                    })
                }
            };

            root = Some(arena.place(root, symbol, &path));
            entries += 1;
        }

        debug!("loaded code table with {} entries", entries);
        Ok(root.map(|root| Tree::new(arena, root)))
    }
}

fn parse_symbol(line: usize, content: &str) -> Result<Symbol, TableError> {
    let content = content.trim();
    content
        .parse::<Symbol>()
        .map_err(|_| TableError::InvalidSymbol {
            line,
            value: content.to_owned(),
        })
}

fn parse_path(line: usize, content: &str) -> Result<Code, TableError> {
    let content = content.trim();
    content.parse::<Code>().map_err(|_| TableError::InvalidPath {
        line,
        value: content.to_owned(),
    })
}
