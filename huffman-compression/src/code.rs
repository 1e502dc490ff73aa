use std::{fmt, str::FromStr};

use bit_vec::BitVec;
use itertools::Itertools;

use crate::{
    frequency::{FrequencyTable, ALPHABET_SIZE},
    node::{Symbol, Tree},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bit {
    Zero,
    One,
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit == Bit::One
    }
}

impl TryFrom<char> for Bit {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            other => Err(other),
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bit::Zero => write!(f, "0"),
            Bit::One => write!(f, "1"),
        }
    }
}

/// A root-to-leaf path: 0 for every left step, 1 for every right step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code(BitVec);

impl Code {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.0.iter().map(Bit::from)
    }

    pub fn push(&mut self, bit: Bit) {
        self.0.push(bit.into());
    }

    /// A copy of this path extended by one step.
    pub fn with(&self, bit: Bit) -> Self {
        let mut code = self.clone();
        code.push(bit);
        code
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len() <= other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl FromIterator<Bit> for Code {
    fn from_iter<T: IntoIterator<Item = Bit>>(iter: T) -> Self {
        Code(iter.into_iter().map(bool::from).collect())
    }
}

impl FromStr for Code {
    type Err = char;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Bit::try_from).collect()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(""))
    }
}

/// Symbol to path lookup precomputed from a [`Tree`].
#[derive(Debug, Clone)]
pub struct CodeBook(Vec<Option<Code>>);

impl CodeBook {
    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.0[symbol as usize].as_ref()
    }

    /// Entries with a code, in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> + '_ {
        (0..=Symbol::MAX).filter_map(|symbol| self.get(symbol).map(|code| (symbol, code)))
    }
}

impl Tree {
    pub fn code_book(&self) -> CodeBook {
        let mut codes = vec![None; ALPHABET_SIZE];
        for (symbol, code) in self.leaves() {
            codes[symbol as usize] = Some(code);
        }
        CodeBook(codes)
    }

    /// Σ count × code length, i.e. the number of bits the encoder emits for
    /// input with these counts. Symbols missing from the tree are ignored.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> u64 {
        self.leaves()
            .iter()
            .map(|(symbol, code)| frequencies.get(*symbol) * code.len() as u64)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Bit, Code};

    #[rstest]
    #[case("", 0)]
    #[case("0", 1)]
    #[case("1101", 4)]
    fn test_parse_and_display(#[case] path: &str, #[case] len: usize) {
        let code: Code = path.parse().unwrap();

        assert_eq!(code.len(), len);
        assert_eq!(code.to_string(), path);
    }

    #[test]
    fn test_rejects_other_characters() {
        assert_eq!("01x1".parse::<Code>(), Err('x'));
    }

    #[rstest]
    #[case("", "101", true)]
    #[case("10", "101", true)]
    #[case("101", "101", true)]
    #[case("11", "101", false)]
    #[case("1011", "101", false)]
    fn test_prefix(#[case] a: &str, #[case] b: &str, #[case] expected: bool) {
        let a: Code = a.parse().unwrap();
        let b: Code = b.parse().unwrap();

        assert_eq!(a.is_prefix_of(&b), expected);
    }

    #[test]
    fn test_with_extends_a_copy() {
        let base: Code = "10".parse().unwrap();
        let extended = base.with(Bit::One);

        assert_eq!(base.to_string(), "10");
        assert_eq!(extended.to_string(), "101");
    }
}
