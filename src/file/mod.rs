//! Input handling for compiled chunks.
//!
//! This module provides the [`crate::file::File`] type that gives the string codec access to the
//! raw bytes of a chunk, either from an owned buffer or from a memory-mapped file on disk, plus
//! the [`crate::file::parser::Parser`] cursor and the endian-aware primitives in
//! [`crate::file::io`] that record decoding is built on.
//!
//! # Key Components
//!
//! - [`crate::file::File`] - Chunk input with pluggable backend
//! - [`crate::file::Backend`] - Trait for data sources (memory or mmap)
//! - [`crate::file::parser::Parser`] - Bounds-checked cursor
//! - [`crate::file::io`] - Byte order helpers and the variable-width integer codec
//!
//! # Usage Examples
//!
//! ```rust
//! use luascope::File;
//!
//! let file = File::from_mem(vec![0x00, 0x05, b'h', b'e', b'l', b'l'])?;
//! let mut parser = file.parser_at(1)?;
//! assert_eq!(parser.read_le::<u8>()?, 0x05);
//! # Ok::<(), luascope::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! [`File`] is [`Send`] and [`Sync`]; any number of parsers may borrow from it concurrently.

pub mod io;
pub mod parser;

mod memory;
mod physical;

use std::path::Path;

use crate::{file::parser::Parser, Error::Empty, Result};
use memory::Memory;
use physical::Physical;

/// Backing storage of a [`File`].
///
/// Implementations must hand out bounds-checked views into an immutable byte buffer.
pub trait Backend: Send + Sync {
    /// Returns a slice of `len` bytes starting at `offset`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the range exceeds the data.
    fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]>;

    /// Returns the complete data.
    fn data(&self) -> &[u8];

    /// Returns the total size of the data.
    fn len(&self) -> usize;
}

/// A compiled chunk loaded from disk or memory.
///
/// `File` does not interpret the chunk header; it only owns the bytes and produces
/// [`Parser`] instances positioned wherever the caller's container reader says string
/// records live.
pub struct File {
    data: Box<dyn Backend>,
}

impl File {
    /// Memory-map a chunk from disk.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file can not be opened, or
    /// [`crate::Error::Empty`] if it is empty.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use luascope::File;
    /// use std::path::Path;
    ///
    /// let file = File::from_file(Path::new("luac.out"))?;
    /// println!("Loaded {} bytes", file.len());
    /// # Ok::<(), luascope::Error>(())
    /// ```
    pub fn from_file(file: &Path) -> Result<File> {
        let input = Physical::new(file)?;

        Self::load(input)
    }

    /// Wrap a chunk already held in memory.
    ///
    /// # Errors
    /// Returns [`crate::Error::Empty`] if `data` is empty.
    pub fn from_mem(data: Vec<u8>) -> Result<File> {
        let input = Memory::new(data);

        Self::load(input)
    }

    fn load<T: Backend + 'static>(data: T) -> Result<File> {
        if data.len() == 0 {
            return Err(Empty);
        }

        Ok(File {
            data: Box::new(data),
        })
    }

    /// Returns the size of the chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the chunk holds no data (never the case for a loaded `File`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the complete chunk data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.data()
    }

    /// Returns a bounds-checked slice of the chunk data.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the range exceeds the data.
    pub fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        self.data.data_slice(offset, len)
    }

    /// Create a [`Parser`] over the whole chunk, positioned at `offset`.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if `offset` lies past the end of the data.
    pub fn parser_at(&self, offset: usize) -> Result<Parser<'_>> {
        let mut parser = Parser::new(self.data());
        parser.seek(offset)?;
        Ok(parser)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::Error;

    #[test]
    fn load_buffer() {
        let file = File::from_mem(vec![0x00, 0x01, 0x02, 0x03]).unwrap();

        assert_eq!(file.len(), 4);
        assert!(!file.is_empty());
        assert_eq!(file.data_slice(1, 2).unwrap(), &[0x01, 0x02]);
        assert!(matches!(file.data_slice(3, 2), Err(Error::OutOfBounds)));

        let mut parser = file.parser_at(2).unwrap();
        assert_eq!(parser.read_le::<u16>().unwrap(), 0x0302);
        assert!(file.parser_at(4).is_ok());
        assert!(matches!(file.parser_at(5), Err(Error::OutOfBounds)));
    }

    #[test]
    fn load_file() {
        let mut temp = tempfile::NamedTempFile::new().unwrap();
        temp.write_all(&[0x05, 0x00, 0x00, 0x00, b't', b'e', b's', b't'])
            .unwrap();
        temp.flush().unwrap();

        let file = File::from_file(temp.path()).unwrap();
        assert_eq!(file.len(), 8);
        assert_eq!(file.data_slice(4, 4).unwrap(), b"test");
    }

    #[test]
    fn load_invalid() {
        assert!(matches!(File::from_mem(Vec::new()), Err(Error::Empty)));
        assert!(matches!(
            File::from_file(Path::new("/nonexistent/luac.out")),
            Err(Error::FileError(_))
        ));
    }
}
