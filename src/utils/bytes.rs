//! Byte-slice utilities for bounds-oriented parsing.
//!
//! Everything in the EEPROM image is stored **big-endian**, so unlike most binary formats we only
//! ever need the `BigEndian` flavour of `byteorder`.
//!
//! There are two layers:
//! - **Option layer** (`read_*`): helpers that return `Option<T>`.
//! - **Result layer** (`*_r`): wrappers that map `None` to `EepromError::Range`.
//!
//! Offsets are `usize` and are interpreted relative to the slice you pass in.

use byteorder::{BigEndian, ByteOrder};

use crate::err::{EepromError, Result};

/// Borrow `len` bytes at `offset`.
///
/// Returns `None` if the range is out of bounds (or `offset + len` overflows).
pub(crate) fn slice(buf: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
    let end = offset.checked_add(len)?;
    buf.get(offset..end)
}

/// Read `N` raw bytes at `offset`.
pub(crate) fn read_array<const N: usize>(buf: &[u8], offset: usize) -> Option<[u8; N]> {
    slice(buf, offset, N)?.try_into().ok()
}

/// Read a `u16` (big-endian) at `offset`.
pub(crate) fn read_u16_be(buf: &[u8], offset: usize) -> Option<u16> {
    slice(buf, offset, 2).map(BigEndian::read_u16)
}

/// Read a `u32` (big-endian) at `offset`.
pub(crate) fn read_u32_be(buf: &[u8], offset: usize) -> Option<u32> {
    slice(buf, offset, 4).map(BigEndian::read_u32)
}

#[inline]
fn out_of_range(offset: usize, len: usize, size: usize) -> EepromError {
    EepromError::Range { offset, len, size }
}

pub(crate) fn slice_r(buf: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    slice(buf, offset, len).ok_or_else(|| out_of_range(offset, len, buf.len()))
}

/// Read `N` raw bytes at `offset`, or return `EepromError::Range`.
pub(crate) fn read_array_r<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N]> {
    read_array::<N>(buf, offset).ok_or_else(|| out_of_range(offset, N, buf.len()))
}

/// Read a `u16` (big-endian) at `offset`, or return `EepromError::Range`.
pub(crate) fn read_u16_be_r(buf: &[u8], offset: usize) -> Result<u16> {
    read_u16_be(buf, offset).ok_or_else(|| out_of_range(offset, 2, buf.len()))
}

/// Read a `u32` (big-endian) at `offset`, or return `EepromError::Range`.
pub(crate) fn read_u32_be_r(buf: &[u8], offset: usize) -> Result<u32> {
    read_u32_be(buf, offset).ok_or_else(|| out_of_range(offset, 4, buf.len()))
}
