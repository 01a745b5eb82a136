use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::err::{EepromError, Result};
use crate::utils::bytes;

/// Size of the TAP EEPROM image in bytes.
pub const EEPROM_SIZE: usize = 0x100;

/// An in-memory copy of the EEPROM image.
///
/// The size is checked once on construction, every accessor is bounds checked against it.
#[derive(Clone, PartialEq, Eq)]
pub struct EepromBuffer {
    data: [u8; EEPROM_SIZE],
}

impl EepromBuffer {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let data: [u8; EEPROM_SIZE] = bytes.try_into().map_err(|_| EepromError::Size {
            expected: EEPROM_SIZE,
            found: bytes.len(),
        })?;

        Ok(EepromBuffer { data })
    }

    /// Reads the whole image from `reader`.
    ///
    /// Short reads are rejected instead of leaving the tail of the buffer zeroed, and so are
    /// inputs with trailing data. At most one byte past the image is consumed.
    pub fn from_reader<T: Read>(reader: T) -> Result<Self> {
        let mut data = Vec::with_capacity(EEPROM_SIZE + 1);
        reader
            .take(EEPROM_SIZE as u64 + 1)
            .read_to_end(&mut data)?;

        debug!("Read {} bytes of EEPROM data", data.len());
        Self::from_bytes(&data)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| EepromError::FailedToOpenFile {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(file)
    }

    pub fn as_bytes(&self) -> &[u8; EEPROM_SIZE] {
        &self.data
    }

    pub fn read_u16_be(&self, offset: usize) -> Result<u16> {
        bytes::read_u16_be_r(&self.data, offset)
    }

    pub fn read_u32_be(&self, offset: usize) -> Result<u32> {
        bytes::read_u32_be_r(&self.data, offset)
    }

    pub fn read_bytes(&self, offset: usize, len: usize) -> Result<&[u8]> {
        bytes::slice_r(&self.data, offset, len)
    }

    pub fn read_array<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
        bytes::read_array_r::<N>(&self.data, offset)
    }
}

impl std::fmt::Debug for EepromBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EepromBuffer")
            .field("len", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn counting_image() -> Vec<u8> {
        (0..EEPROM_SIZE).map(|i| i as u8).collect()
    }

    #[test]
    fn test_loads_exactly_sized_image() {
        let image = counting_image();
        let buffer = EepromBuffer::from_bytes(&image).unwrap();

        assert_eq!(&buffer.as_bytes()[..], &image[..]);
        assert_eq!(buffer.read_u16_be(0x10).unwrap(), 0x1011);
        assert_eq!(buffer.read_u32_be(0xFC).unwrap(), 0xFCFD_FEFF);
        assert_eq!(buffer.read_bytes(0x40, 3).unwrap(), &[0x40, 0x41, 0x42]);
        assert_eq!(buffer.read_array::<4>(0xAC).unwrap(), [0xAC, 0xAD, 0xAE, 0xAF]);
    }

    #[test]
    fn test_rejects_wrong_sizes() {
        for len in [0, EEPROM_SIZE - 1, EEPROM_SIZE + 1] {
            match EepromBuffer::from_bytes(&vec![0; len]) {
                Err(EepromError::Size { expected, found }) => {
                    assert_eq!(expected, EEPROM_SIZE);
                    assert_eq!(found, len);
                }
                other => panic!("expected a size error for {len} bytes, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_reader_rejects_short_and_long_input() {
        let short = Cursor::new(vec![0_u8; 200]);
        assert!(matches!(
            EepromBuffer::from_reader(short),
            Err(EepromError::Size { found: 200, .. })
        ));

        let long = Cursor::new(vec![0_u8; 1024]);
        assert!(matches!(
            EepromBuffer::from_reader(long),
            Err(EepromError::Size { found: 257, .. })
        ));

        let exact = Cursor::new(counting_image());
        assert!(EepromBuffer::from_reader(exact).is_ok());
    }

    #[test]
    fn test_out_of_range_reads_fail() {
        let buffer = EepromBuffer::from_bytes(&counting_image()).unwrap();

        assert!(matches!(
            buffer.read_u32_be(253),
            Err(EepromError::Range {
                offset: 253,
                len: 4,
                size: EEPROM_SIZE
            })
        ));
        assert!(buffer.read_u16_be(255).is_err());
        assert!(buffer.read_u16_be(254).is_ok());
        assert!(buffer.read_bytes(0x100, 1).is_err());
        assert!(buffer.read_bytes(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = EepromBuffer::from_path("/definitely/not/here/eeprom").unwrap_err();
        assert!(matches!(err, EepromError::FailedToOpenFile { .. }));
        assert!(err.to_string().contains("/definitely/not/here/eeprom"));
    }
}
