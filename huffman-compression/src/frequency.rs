use std::io::{self, BufReader, Read};

use crate::node::Symbol;

pub const ALPHABET_SIZE: usize = 256;

/// Occurrence counts for every symbol of the byte alphabet, index = symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable([u64; ALPHABET_SIZE]);

impl Default for FrequencyTable {
    fn default() -> Self {
        Self([0; ALPHABET_SIZE])
    }
}

impl From<[u64; ALPHABET_SIZE]> for FrequencyTable {
    fn from(counts: [u64; ALPHABET_SIZE]) -> Self {
        Self(counts)
    }
}

impl FromIterator<(Symbol, u64)> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = (Symbol, u64)>>(iter: T) -> Self {
        let mut table = Self::default();
        for (symbol, count) in iter {
            table.0[symbol as usize] += count;
        }
        table
    }
}

impl FrequencyTable {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = Self::default();
        table.add(bytes);
        table
    }

    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        let mut reader = BufReader::new(reader);
        let mut table = Self::default();
        let mut buffer = [0; 8 * 1024];

        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            table.add(&buffer[..read]);
        }

        Ok(table)
    }

    fn add(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0[byte as usize] += 1;
        }
    }

    pub fn get(&self, symbol: Symbol) -> u64 {
        self.0[symbol as usize]
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Number of symbols that occur at least once.
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&count| count != 0).count()
    }

    /// Symbols with a nonzero count, in ascending symbol order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        (0..=Symbol::MAX)
            .map(|symbol| (symbol, self.get(symbol)))
            .filter(|&(_, count)| count != 0)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::FrequencyTable;

    #[test]
    fn test_counts_bytes() {
        let table = FrequencyTable::from_bytes(b"abracadabra");

        assert_eq!(table.get(b'a'), 5);
        assert_eq!(table.get(b'b'), 2);
        assert_eq!(table.get(b'z'), 0);
        assert_eq!(table.total(), 11);
        assert_eq!(table.distinct(), 5);
    }

    #[test]
    fn test_nonzero_entries_are_ascending() {
        let table = FrequencyTable::from_bytes(b"zyxzyz");
        let entries = table.iter_nonzero().collect_vec();

        assert_eq!(entries, vec![(b'x', 1), (b'y', 2), (b'z', 3)]);
    }

    #[test]
    fn test_reader_matches_bytes() {
        let content = include_bytes!("../tests/lorem.txt");
        let from_reader = FrequencyTable::from_reader(&content[..]).unwrap();

        assert_eq!(from_reader, FrequencyTable::from_bytes(content));
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::from_bytes(b"");

        assert_eq!(table.total(), 0);
        assert_eq!(table.iter_nonzero().count(), 0);
    }
}
