//! The chunk-native `size_t` length integer.
//!
//! Compiled chunks frame variable-length records with an unsigned integer whose width is
//! declared once in the chunk header (commonly 4 or 8 bytes) and whose byte order follows the
//! header's endianness flag. [`SizeT`] reads and writes such integers and provides the
//! "repeat N times" loop the record parsers are built on.

use std::io::Write;

use crate::{
    chunk::config::ChunkConfig,
    file::{
        io::{fits_width, write_uint},
        parser::Parser,
    },
    Error::{UnsupportedWidth, ValueTooLarge},
    Result,
};

/// An unsigned length integer of a fixed byte width.
///
/// # Examples
///
/// ```rust
/// use luascope::{ChunkConfig, Parser, SizeT};
///
/// let config = ChunkConfig::new(0x54, 4)?;
/// let mut parser = Parser::new(&[0x03, 0x00, 0x00, 0x00]);
///
/// let size = SizeT::parse(&mut parser, &config)?;
/// assert_eq!(size.value(), 3);
///
/// let mut visited = Vec::new();
/// size.iterate(|index| {
///     visited.push(index);
///     Ok(())
/// })?;
/// assert_eq!(visited, [0, 1, 2]);
/// # Ok::<(), luascope::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeT {
    value: u64,
    width: u8,
}

impl SizeT {
    /// Create a length integer of `width` bytes.
    ///
    /// # Errors
    /// Returns [`crate::Error::ValueTooLarge`] if `value` does not fit into `width` bytes, or
    /// [`crate::Error::UnsupportedWidth`] if `width` is not in `1..=8`.
    pub fn new(value: u64, width: u8) -> Result<Self> {
        if !(1..=8).contains(&width) {
            return Err(UnsupportedWidth(width));
        }
        if !fits_width(value, width) {
            return Err(ValueTooLarge { value, width });
        }

        Ok(SizeT { value, width })
    }

    /// Create a length integer of the chunk's native width from a host length.
    ///
    /// # Errors
    /// Returns [`crate::Error::ValueTooLarge`] if `len` does not fit the chunk's `size_t`.
    pub fn from_len(len: usize, config: &ChunkConfig) -> Result<Self> {
        Self::new(len as u64, config.size_t())
    }

    /// Read a length integer of the chunk's native width and byte order.
    ///
    /// # Errors
    /// Returns [`crate::Error::TruncatedInput`] if fewer than `size_t` bytes remain; the
    /// parser position is left untouched in that case.
    pub fn parse(parser: &mut Parser, config: &ChunkConfig) -> Result<Self> {
        let value = parser.read_uint(config.size_t(), config.endianness())?;

        Ok(SizeT {
            value,
            width: config.size_t(),
        })
    }

    /// Write this integer in its width using the chunk's byte order.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the output sink fails.
    pub fn write<W: Write + ?Sized>(&self, out: &mut W, config: &ChunkConfig) -> Result<()> {
        write_uint(out, self.value, self.width, config.endianness())
    }

    /// The numeric value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The width in bytes.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// The value as a host length.
    ///
    /// # Errors
    /// Returns [`crate::Error::ValueTooLarge`] if the value exceeds `usize` on this host.
    pub fn to_usize(&self) -> Result<usize> {
        usize::try_from(self.value).map_err(|_| ValueTooLarge {
            value: self.value,
            width: std::mem::size_of::<usize>() as u8,
        })
    }

    /// Invoke `action` exactly [`SizeT::value`] times, passing the zero-based call index.
    ///
    /// The first error returned by `action` stops the loop and is propagated.
    ///
    /// # Errors
    /// Returns whatever `action` fails with.
    pub fn iterate<F>(&self, mut action: F) -> Result<()>
    where
        F: FnMut(u64) -> Result<()>,
    {
        for index in 0..self.value {
            action(index)?;
        }
        Ok(())
    }
}
