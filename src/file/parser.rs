//! Low-level byte stream parser for chunk record decoding.
//!
//! This module provides the [`crate::file::parser::Parser`] type, a cursor-based binary data parser
//! used to read the records of a compiled Lua chunk. It offers bounds-checked access to binary data
//! with support for both little-endian and big-endian formats and the variable-width `size_t`
//! integers chunks use for length framing.
//!
//! # Key Components
//!
//! ## Navigation Methods
//! - [`crate::file::parser::Parser::seek`] - Move to specific position
//! - [`crate::file::parser::Parser::pos`] - Get current position
//! - [`crate::file::parser::Parser::transactional`] - Roll back the position on failure
//!
//! ## Data Access Methods
//! - [`crate::file::parser::Parser::read_le`] - Read primitive types (little-endian)
//! - [`crate::file::parser::Parser::read_be`] - Read primitive types (big-endian)
//! - [`crate::file::parser::Parser::read_uint`] - Read a variable-width unsigned integer
//! - [`crate::file::parser::Parser::read_bytes`] - Borrow a run of raw bytes
//!
//! # Usage Examples
//!
//! ```rust
//! use luascope::Parser;
//!
//! let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
//! let mut parser = Parser::new(&data);
//!
//! let first = parser.read_le::<u32>()?;
//! assert_eq!(first, 0x04030201);
//!
//! parser.seek(6)?;
//! let last_bytes = parser.read_le::<u16>()?;
//! assert_eq!(last_bytes, 0x0807);
//! # Ok::<(), luascope::Error>(())
//! ```

use crate::{
    file::io::{read_be_at, read_le_at, read_uint_at, ChunkIO, Endianness},
    Result,
};

/// A generic binary data parser for reading chunk records.
///
/// `Parser` provides a cursor-based interface for reading binary data in both
/// little-endian and big-endian formats. The parser maintains an internal position
/// cursor and provides bounds checking to prevent buffer overruns when reading
/// malformed or truncated data.
///
/// Reads that run past the end fail with [`crate::Error::TruncatedInput`] and leave the
/// position untouched; navigation past the end fails with [`crate::Error::OutOfBounds`].
///
/// # Examples
///
/// ```rust
/// use luascope::Parser;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut parser = Parser::new(&data);
///
/// let value: u16 = parser.read_be()?;
/// assert_eq!(value, 0x0102);
/// assert_eq!(parser.remaining(), 2);
/// # Ok::<(), luascope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::file::parser::Parser`] from a byte slice.
    ///
    /// # Arguments
    /// * `data` - The byte slice to read from
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the parser has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if there is more data available to parse.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Move the current position to the specified index.
    ///
    /// Seeking to exactly the end of the data is allowed, the next read will then fail.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if position is beyond the data length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luascope::Parser;
    /// let data = [0x01, 0x02, 0x03, 0x04];
    /// let mut parser = Parser::new(&data);
    ///
    /// parser.seek(2)?;
    /// assert_eq!(parser.pos(), 2);
    /// assert_eq!(parser.read_le::<u8>()?, 0x03);
    /// assert!(parser.seek(5).is_err());
    /// # Ok::<(), luascope::Error>(())
    /// ```
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        self.position = pos;
        Ok(())
    }

    /// Get the current position of the parser within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Get access to the underlying data buffer.
    #[must_use]
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Execute a closure transactionally, rolling back on failure.
    ///
    /// This method saves the current parser position, executes the provided closure,
    /// and only commits the position change if the closure succeeds. If the closure
    /// returns `Err`, the parser position is restored to its original value.
    ///
    /// # Errors
    /// Returns any error produced by the closure `f`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luascope::Parser;
    /// let data = [0x01, 0x02, 0x03, 0x04];
    /// let mut parser = Parser::new(&data);
    ///
    /// let result: Result<u16, _> = parser.transactional(|p| p.read_le());
    /// assert!(result.is_ok());
    /// assert_eq!(parser.pos(), 2);
    ///
    /// let mut parser2 = Parser::new(&[0x01]);
    /// let result: Result<u32, _> = parser2.transactional(|p| p.read_le());
    /// assert!(result.is_err());
    /// assert_eq!(parser2.pos(), 0);
    /// ```
    pub fn transactional<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let saved_position = self.position;
        let result = f(self);
        if result.is_err() {
            self.position = saved_position;
        }
        result
    }

    /// Read a type `T` from the current position in little-endian format and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::TruncatedInput`] if reading would exceed the data length.
    pub fn read_le<T: ChunkIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, &mut self.position)
    }

    /// Read a type `T` from the current position in big-endian format and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::TruncatedInput`] if reading would exceed the data length.
    pub fn read_be<T: ChunkIO>(&mut self) -> Result<T> {
        read_be_at::<T>(self.data, &mut self.position)
    }

    /// Read an unsigned integer of `width` bytes in the given byte order.
    ///
    /// # Errors
    /// Returns [`crate::Error::TruncatedInput`] if fewer than `width` bytes remain, or
    /// [`crate::Error::UnsupportedWidth`] if `width` is not in `1..=8`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luascope::{Endianness, Parser};
    /// let data = [0x00, 0x00, 0x01, 0x00];
    /// let mut parser = Parser::new(&data);
    ///
    /// assert_eq!(parser.read_uint(4, Endianness::Big)?, 0x0100);
    /// # Ok::<(), luascope::Error>(())
    /// ```
    pub fn read_uint(&mut self, width: u8, endianness: Endianness) -> Result<u64> {
        read_uint_at(self.data, &mut self.position, width, endianness)
    }

    /// Returns the number of bytes remaining from the current position.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Ensures that at least `needed` bytes are available from the current position.
    ///
    /// # Errors
    /// Returns [`crate::Error::TruncatedInput`] if fewer than `needed` bytes remain.
    pub fn ensure_remaining(&self, needed: usize) -> Result<()> {
        let available = self.remaining();
        if available < needed {
            return Err(truncated_error!(needed, available));
        }
        Ok(())
    }

    /// Reads a slice of bytes of the specified length from the current position.
    ///
    /// # Errors
    /// Returns [`crate::Error::TruncatedInput`] if reading `length` bytes would exceed the data.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luascope::Parser;
    /// let data = [0x01, 0x02, 0x03, 0x04, 0x05];
    /// let mut parser = Parser::new(&data);
    ///
    /// let chunk = parser.read_bytes(3)?;
    /// assert_eq!(chunk, &[0x01, 0x02, 0x03]);
    /// assert_eq!(parser.pos(), 3);
    /// # Ok::<(), luascope::Error>(())
    /// ```
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        self.ensure_remaining(length)?;
        let end = self.position + length;
        let bytes = &self.data[self.position..end];
        self.position = end;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_navigation() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05];
        let mut parser = Parser::new(&data);

        assert_eq!(parser.len(), 5);
        assert!(!parser.is_empty());
        assert!(parser.has_more_data());

        parser.seek(4).unwrap();
        assert_eq!(parser.pos(), 4);
        assert_eq!(parser.remaining(), 1);
        assert_eq!(parser.data(), &data);

        parser.seek(5).unwrap();
        assert!(!parser.has_more_data());
        assert!(matches!(
            parser.read_le::<u8>(),
            Err(Error::TruncatedInput {
                needed: 1,
                available: 0
            })
        ));
        assert!(matches!(parser.seek(6), Err(Error::OutOfBounds)));
        assert_eq!(parser.pos(), 5);
    }

    #[test]
    fn test_read_bytes() {
        let data = [0x0A, 0x0B, 0x0C];
        let mut parser = Parser::new(&data);

        assert_eq!(parser.read_bytes(0).unwrap(), &[] as &[u8]);
        assert_eq!(parser.read_bytes(2).unwrap(), &[0x0A, 0x0B]);
        assert!(matches!(
            parser.read_bytes(2),
            Err(Error::TruncatedInput {
                needed: 2,
                available: 1
            })
        ));
        assert_eq!(parser.pos(), 2);
        assert_eq!(parser.remaining(), 1);
    }

    #[test]
    fn test_read_uint() {
        let data = [0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07];
        let mut parser = Parser::new(&data);

        assert_eq!(parser.read_uint(4, Endianness::Little).unwrap(), 5);
        assert_eq!(parser.read_uint(4, Endianness::Big).unwrap(), 7);
        assert!(parser.read_uint(1, Endianness::Little).is_err());
    }

    #[test]
    fn test_transactional() {
        let data = [0x01, 0x02, 0x03, 0x04];

        let mut parser = Parser::new(&data);
        let sum: u16 = parser
            .transactional(|p| {
                let a: u8 = p.read_le()?;
                let b: u8 = p.read_le()?;
                Ok(u16::from(a) + u16::from(b))
            })
            .unwrap();
        assert_eq!(sum, 3);
        assert_eq!(parser.pos(), 2);

        let mut parser = Parser::new(&data);
        let result: Result<u32> = parser.transactional(|p| {
            p.read_le::<u16>()?;
            p.read_le::<u32>()
        });
        assert!(result.is_err());
        assert_eq!(parser.pos(), 0);

        let mut parser = Parser::new(&data);
        let result = parser
            .transactional(|p| {
                let outer: u8 = p.read_le()?;
                let inner_result: Result<u32> = p.transactional(|p2| p2.read_le());
                assert!(inner_result.is_err());
                assert_eq!(p.pos(), 1);
                Ok(outer)
            })
            .unwrap();
        assert_eq!(result, 0x01);
        assert_eq!(parser.pos(), 1);
    }
}
