//! Low-level byte order and safe reading/writing utilities for chunk parsing.
//!
//! This module provides endian-aware, bounds-checked reading of primitive integers from byte
//! buffers, plus the variable-width unsigned integer helpers used for the `size_t` length
//! prefixes of compiled Lua chunks. A chunk declares both the width of its native length
//! integer (commonly 4 or 8 bytes) and its byte order in the header, so neither can be a
//! compile-time property of the reader.
//!
//! # Key Components
//!
//! - [`crate::file::io::ChunkIO`] - Trait defining endian-aware conversions for primitive types
//! - [`crate::file::io::Endianness`] - Byte order declared by a chunk
//! - [`crate::file::io::read_le_at`] / [`crate::file::io::read_be_at`] - Fixed-size reads with auto-advance
//! - [`crate::file::io::read_uint_at`] - Variable-width (`1..=8` bytes) unsigned reads
//! - [`crate::file::io::write_uint`] - Variable-width unsigned writes into any [`std::io::Write`]
//!
//! # Usage Examples
//!
//! ```rust
//! use luascope::file::io::{read_uint_at, Endianness};
//!
//! let data = [0x05, 0x00, 0x00, 0x00];
//! let mut offset = 0;
//! let value = read_uint_at(&data, &mut offset, 4, Endianness::Little)?;
//! assert_eq!(value, 5);
//! assert_eq!(offset, 4);
//! # Ok::<(), luascope::Error>(())
//! ```
//!
//! # Error Handling
//!
//! Reads return [`crate::Error::TruncatedInput`] if there are insufficient bytes in the
//! buffer. The offset is only advanced on success. Writes return
//! [`crate::Error::ValueTooLarge`] if the value does not fit the requested width.
//!
//! # Thread Safety
//!
//! All functions in this module are pure and operate on caller-provided buffers only.

use std::io::Write;

use strum::{Display, EnumIter};

use crate::Result;

/// Byte order of multi-byte integers inside a chunk.
///
/// Lua chunks record this in their header as a single flag byte, `1` for little-endian and
/// `0` for big-endian. Virtually all chunks found in the wild are little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Endianness {
    /// Least significant byte first
    #[default]
    #[strum(serialize = "little")]
    Little,
    /// Most significant byte first
    #[strum(serialize = "big")]
    Big,
}

impl Endianness {
    /// Decode the endianness flag byte of a chunk header.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for any flag other than `0` or `1`.
    pub fn from_flag(flag: u8) -> Result<Self> {
        match flag {
            1 => Ok(Endianness::Little),
            0 => Ok(Endianness::Big),
            _ => Err(malformed_error!("Invalid endianness flag - {}", flag)),
        }
    }

    /// The header flag byte for this byte order.
    #[must_use]
    pub fn flag(self) -> u8 {
        match self {
            Endianness::Little => 1,
            Endianness::Big => 0,
        }
    }
}

/// Trait for implementing type-specific safe binary data reading operations.
///
/// Each implementation defines a `Bytes` associated type that represents the fixed-size
/// byte array required for that particular type (e.g., `[u8; 4]` for `u32`).
pub trait ChunkIO: Sized {
    /// Associated type representing the byte array type for this numeric type.
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte buffer in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
    /// Read T from a byte buffer in big-endian
    fn from_be_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_chunk_io {
    ($($ty:ty),*) => {
        $(
            impl ChunkIO for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }

                fn from_be_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }
            }
        )*
    };
}

impl_chunk_io!(u8, u16, u32, u64);

fn take<'a>(data: &'a [u8], offset: usize, len: usize) -> Result<&'a [u8]> {
    let available = data.len().saturating_sub(offset);
    if len > available {
        return Err(truncated_error!(len, available));
    }

    Ok(&data[offset..offset + len])
}

/// Read a `T` at `offset` in little-endian and advance `offset` past it.
///
/// # Errors
/// Returns [`crate::Error::TruncatedInput`] if fewer than `size_of::<T>()` bytes remain.
pub fn read_le_at<T: ChunkIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let slice = take(data, *offset, type_len)?;

    let Ok(read) = slice.try_into() else {
        return Err(truncated_error!(type_len, slice.len()));
    };

    *offset += type_len;

    Ok(T::from_le_bytes(read))
}

/// Read a `T` at `offset` in big-endian and advance `offset` past it.
///
/// # Errors
/// Returns [`crate::Error::TruncatedInput`] if fewer than `size_of::<T>()` bytes remain.
pub fn read_be_at<T: ChunkIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let slice = take(data, *offset, type_len)?;

    let Ok(read) = slice.try_into() else {
        return Err(truncated_error!(type_len, slice.len()));
    };

    *offset += type_len;

    Ok(T::from_be_bytes(read))
}

/// Read an unsigned integer of `width` bytes (`1..=8`) at `offset` and advance past it.
///
/// # Errors
/// Returns [`crate::Error::TruncatedInput`] if fewer than `width` bytes remain, or
/// [`crate::Error::UnsupportedWidth`] if `width` is not in `1..=8`.
pub fn read_uint_at(
    data: &[u8],
    offset: &mut usize,
    width: u8,
    endianness: Endianness,
) -> Result<u64> {
    if !(1..=8).contains(&width) {
        return Err(crate::Error::UnsupportedWidth(width));
    }

    let bytes = take(data, *offset, usize::from(width))?;
    let value = match endianness {
        Endianness::Little => bytes
            .iter()
            .rev()
            .fold(0_u64, |acc, byte| (acc << 8) | u64::from(*byte)),
        Endianness::Big => bytes
            .iter()
            .fold(0_u64, |acc, byte| (acc << 8) | u64::from(*byte)),
    };

    *offset += usize::from(width);
    Ok(value)
}

/// Returns `true` if `value` can be represented in `width` bytes.
#[must_use]
pub fn fits_width(value: u64, width: u8) -> bool {
    width >= 8 || value >> (u32::from(width) * 8) == 0
}

/// Write `value` as an unsigned integer of `width` bytes (`1..=8`).
///
/// # Errors
/// Returns [`crate::Error::ValueTooLarge`] if `value` does not fit, [`crate::Error::UnsupportedWidth`]
/// for widths outside `1..=8`, or [`crate::Error::FileError`] if the sink fails.
pub fn write_uint<W: Write + ?Sized>(
    out: &mut W,
    value: u64,
    width: u8,
    endianness: Endianness,
) -> Result<()> {
    if !(1..=8).contains(&width) {
        return Err(crate::Error::UnsupportedWidth(width));
    }
    if !fits_width(value, width) {
        return Err(crate::Error::ValueTooLarge { value, width });
    }

    let width = usize::from(width);
    match endianness {
        Endianness::Little => out.write_all(&value.to_le_bytes()[..width])?,
        Endianness::Big => out.write_all(&value.to_be_bytes()[8 - width..])?,
    }

    Ok(())
}
