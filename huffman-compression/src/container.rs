use std::io::{Read, Write};

use bit_vec::BitVec;
use log::debug;

use crate::{bits::BitCursor, error::ContainerError};

/// A compressed stream as stored on disk:
///
/// ```text
/// symbol count  u64 little endian
/// bit count     u64 little endian
/// payload       bits packed most significant first, last byte zero padded
/// ```
///
/// The symbol count is what lets a single-symbol input, which encodes to no
/// bits, be decoded again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    pub symbol_count: u64,
    pub bits: BitVec,
}

impl Container {
    pub fn bit_count(&self) -> u64 {
        self.bits.len() as u64
    }

    pub fn cursor(&self) -> BitCursor<'_> {
        BitCursor::new(&self.bits)
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), ContainerError> {
        let payload = self.bits.to_bytes();

        writer.write_all(&self.symbol_count.to_le_bytes())?;
        writer.write_all(&self.bit_count().to_le_bytes())?;
        writer.write_all(&payload)?;

        debug!(
            "wrote container: {} symbols, {} bits, {} payload bytes",
            self.symbol_count,
            self.bit_count(),
            payload.len()
        );
        Ok(())
    }

    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, ContainerError> {
        let symbol_count = read_u64(reader)?;
        let bit_count = read_u64(reader)?;

        let mut payload = Vec::new();
        reader
            .read_to_end(&mut payload)
            .map_err(ContainerError::Io)?;

        let available = payload.len() as u64 * 8;
        if available < bit_count {
            return Err(ContainerError::PayloadTooShort {
                declared: bit_count,
                available,
            });
        }

        let mut bits = BitVec::from_bytes(&payload);
        bits.truncate(bit_count as usize);

        debug!(
            "read container: {} symbols, {} bits",
            symbol_count, bit_count
        );
        Ok(Container { symbol_count, bits })
    }
}

fn read_u64<R: Read>(reader: &mut R) -> Result<u64, ContainerError> {
    let mut bytes = [0u8; 8];
    reader.read_exact(&mut bytes)?;
    Ok(u64::from_le_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bit_vec::BitVec;

    use super::Container;
    use crate::error::ContainerError;

    fn container(bits: &[bool], symbol_count: u64) -> Container {
        Container {
            symbol_count,
            bits: bits.iter().copied().collect::<BitVec>(),
        }
    }

    #[test]
    fn test_layout() {
        let container = container(&[true, false, true], 2);
        let mut bytes = Vec::new();
        container.write_to(&mut bytes).unwrap();

        let mut expected = Vec::new();
        expected.extend(2u64.to_le_bytes());
        expected.extend(3u64.to_le_bytes());
        expected.push(0b1010_0000);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_write_and_read() {
        let original = container(&[true, true, false, true, false, false, true, true, true], 5);
        let mut bytes = Vec::new();
        original.write_to(&mut bytes).unwrap();

        let read = Container::read_from(&mut Cursor::new(bytes)).unwrap();

        assert_eq!(read, original);
        assert_eq!(read.bit_count(), 9);
    }

    #[test]
    fn test_empty_container() {
        let mut bytes = Vec::new();
        Container::default().write_to(&mut bytes).unwrap();
        assert_eq!(bytes.len(), 16);

        let read = Container::read_from(&mut Cursor::new(bytes)).unwrap();
        assert_eq!(read, Container::default());
    }

    #[test]
    fn test_truncated_header() {
        let err = Container::read_from(&mut Cursor::new(vec![1, 0, 0, 0])).unwrap_err();

        assert!(matches!(err, ContainerError::TruncatedHeader), "{err}");
    }

    #[test]
    fn test_payload_too_short() {
        let mut bytes = Vec::new();
        bytes.extend(1u64.to_le_bytes());
        bytes.extend(9u64.to_le_bytes());
        bytes.push(0xff);

        let err = Container::read_from(&mut Cursor::new(bytes)).unwrap_err();

        assert!(
            matches!(
                err,
                ContainerError::PayloadTooShort {
                    declared: 9,
                    available: 8
                }
            ),
            "{err}"
        );
    }
}
