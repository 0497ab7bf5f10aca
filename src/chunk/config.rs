//! Per-chunk configuration for string record decoding.
//!
//! Everything the string codec needs to know about the surrounding chunk is captured by
//! [`ChunkConfig`]: the generation tag declared by the header, the width and byte order of
//! the native `size_t` length integer, and whether decoded strings should be traced.
//! The container reader builds one `ChunkConfig` per chunk after it has read the header;
//! this crate never parses the header itself.

use crate::{
    chunk::strings::StringCodec,
    file::io::Endianness,
    Error::UnsupportedWidth,
    Result,
};

/// Configuration of a single chunk, fixed for the lifetime of that chunk.
///
/// # Examples
///
/// ```rust
/// use luascope::{ChunkConfig, Endianness, StringCodec};
///
/// let config = ChunkConfig::new(0x53, 8)?
///     .with_endianness(Endianness::Big)
///     .with_debug(true);
///
/// assert_eq!(config.size_t(), 8);
/// assert_eq!(config.codec()?, StringCodec::Compact);
/// # Ok::<(), luascope::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkConfig {
    version: u8,
    size_t: u8,
    endianness: Endianness,
    debug: bool,
}

impl ChunkConfig {
    /// Create a new configuration for a little-endian chunk without tracing.
    ///
    /// The generation tag is not validated here, so a configuration can be built for any
    /// chunk header; [`ChunkConfig::codec`] reports unsupported generations.
    ///
    /// # Arguments
    /// * `version` - The generation tag declared by the chunk header
    /// * `size_t` - Width of the chunk's native length integer in bytes
    ///
    /// # Errors
    /// Returns [`crate::Error::UnsupportedWidth`] if `size_t` is not in `1..=8`.
    pub fn new(version: u8, size_t: u8) -> Result<Self> {
        if !(1..=8).contains(&size_t) {
            return Err(UnsupportedWidth(size_t));
        }

        Ok(ChunkConfig {
            version,
            size_t,
            endianness: Endianness::Little,
            debug: false,
        })
    }

    /// Set the byte order of multi-byte integers.
    #[must_use]
    pub fn with_endianness(mut self, endianness: Endianness) -> Self {
        self.endianness = endianness;
        self
    }

    /// Enable or disable the trace of every decoded string.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// The generation tag declared by the chunk header.
    #[must_use]
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Width of the native length integer in bytes.
    #[must_use]
    pub fn size_t(&self) -> u8 {
        self.size_t
    }

    /// Byte order of multi-byte integers.
    #[must_use]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Whether decoded strings are traced through the `log` facade.
    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Select the string codec matching the declared generation.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnsupportedGeneration`] for unknown generation tags.
    pub fn codec(&self) -> Result<StringCodec> {
        StringCodec::select(self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn defaults() {
        let config = ChunkConfig::new(0x54, 4).unwrap();

        assert_eq!(config.version(), 0x54);
        assert_eq!(config.size_t(), 4);
        assert_eq!(config.endianness(), Endianness::Little);
        assert!(!config.debug());
        assert_eq!(config.codec().unwrap(), StringCodec::Modern);
    }

    #[test]
    fn invalid_width() {
        assert!(matches!(
            ChunkConfig::new(0x54, 0),
            Err(Error::UnsupportedWidth(0))
        ));
        assert!(matches!(
            ChunkConfig::new(0x54, 9),
            Err(Error::UnsupportedWidth(9))
        ));
        for width in 1..=8 {
            assert!(ChunkConfig::new(0x54, width).is_ok());
        }
    }

    #[test]
    fn unsupported_generation() {
        let config = ChunkConfig::new(0x40, 4).unwrap();
        assert!(matches!(
            config.codec(),
            Err(Error::UnsupportedGeneration(0x40))
        ));
    }
}
