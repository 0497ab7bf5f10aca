//! String constant records of compiled chunks.
//!
//! Three mutually incompatible layouts have been used for string constants over the
//! lifetime of the bytecode format. [`StringCodec`] is the closed set of these layouts;
//! the container reader selects one per chunk from the generation tag in the chunk header
//! and then decodes every string record with it.
//!
//! | Codec                    | Tags                 | Length framing                         | Content         |
//! |--------------------------|----------------------|----------------------------------------|-----------------|
//! | [`StringCodec::Legacy`]  | `0x50`, `0x51`, `0x52` | `size_t` = len + 1, terminator stored  | verbatim        |
//! | [`StringCodec::Compact`] | `0x53`               | `u8`, or `0xFF` + `size_t`             | keystream (read)|
//! | [`StringCodec::Modern`]  | `0x54`               | `size_t` = len + 1, no terminator      | verbatim        |
//!
//! # Scratch buffers
//!
//! Decoding goes through a scratch buffer. [`StringCodec::parse`] allocates a fresh one per
//! call, [`StringCodec::parse_with`] and [`StringReader`] reuse a caller-owned one. Scratch
//! buffers are never shared, so codecs can be used from any number of threads at once.
//!
//! # Examples
//!
//! ```rust
//! use luascope::{ChunkConfig, LString, Parser, StringCodec};
//!
//! let config = ChunkConfig::new(0x54, 4)?;
//! let codec = StringCodec::select(config.version())?;
//!
//! let data = [0x05, 0x00, 0x00, 0x00, b't', b'e', b's', b't'];
//! let value = codec.parse(&mut Parser::new(&data), &config)?;
//! assert_eq!(value, LString::from("test"));
//!
//! assert_eq!(codec.encode(&config, &value)?, data);
//! # Ok::<(), luascope::Error>(())
//! ```

mod compact;
mod legacy;
mod modern;
mod reader;

pub use compact::{descramble, EXTENDED_SIZE};
pub use reader::StringReader;

use std::io::Write;

use rayon::prelude::*;
use strum::{Display, EnumCount, EnumIter};

use crate::{
    chunk::{config::ChunkConfig, lstring::LString},
    file::parser::Parser,
    Error::UnsupportedGeneration,
    Result,
};

/// The string record layout of a chunk generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum StringCodec {
    /// `size_t` length including a stored terminator byte
    #[strum(serialize = "legacy")]
    Legacy,
    /// One byte length with `size_t` escape, scrambled content
    #[strum(serialize = "compact")]
    Compact,
    /// `size_t` length including an implicit terminator
    #[strum(serialize = "modern")]
    Modern,
}

impl StringCodec {
    /// Select the codec for a generation tag as declared by a chunk header.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnsupportedGeneration`] for unknown tags.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luascope::{Error, StringCodec};
    ///
    /// assert_eq!(StringCodec::select(0x51)?, StringCodec::Legacy);
    /// assert_eq!(StringCodec::select(0x53)?, StringCodec::Compact);
    /// assert!(matches!(StringCodec::select(0x60), Err(Error::UnsupportedGeneration(0x60))));
    /// # Ok::<(), luascope::Error>(())
    /// ```
    pub fn select(tag: u8) -> Result<Self> {
        match tag {
            0x50..=0x52 => Ok(StringCodec::Legacy),
            0x53 => Ok(StringCodec::Compact),
            0x54 => Ok(StringCodec::Modern),
            _ => Err(UnsupportedGeneration(tag)),
        }
    }

    /// The canonical generation tag of this codec.
    #[must_use]
    pub fn tag(&self) -> u8 {
        match self {
            StringCodec::Legacy => 0x50,
            StringCodec::Compact => 0x53,
            StringCodec::Modern => 0x54,
        }
    }

    /// Decode one string record at the current parser position.
    ///
    /// # Errors
    /// Returns [`crate::Error::TruncatedInput`] if the record runs past the end of the data.
    /// On error the parser is left at the start of the record.
    pub fn parse(&self, parser: &mut Parser, config: &ChunkConfig) -> Result<LString> {
        self.parse_with(parser, config, &mut Vec::new())
    }

    /// Decode one string record, using `scratch` as working memory.
    ///
    /// The contents of `scratch` on entry are ignored and unspecified on return.
    ///
    /// # Errors
    /// Returns [`crate::Error::TruncatedInput`] if the record runs past the end of the data.
    /// On error the parser is left at the start of the record.
    pub fn parse_with(
        &self,
        parser: &mut Parser,
        config: &ChunkConfig,
        scratch: &mut Vec<u8>,
    ) -> Result<LString> {
        let value = parser.transactional(|parser| match self {
            StringCodec::Legacy => legacy::parse(parser, config, scratch),
            StringCodec::Compact => compact::parse(parser, config, scratch),
            StringCodec::Modern => modern::parse(parser, config, scratch),
        })?;

        if config.debug() {
            if let LString::Present { content, .. } = &value {
                log::debug!("-- parsed <string> \"{}\"", content.escape_ascii());
            }
        }

        Ok(value)
    }

    /// Decode one string record at each of `offsets` into `data`, in parallel.
    ///
    /// Results are returned in the order of `offsets`. Each worker uses its own scratch buffer.
    ///
    /// # Errors
    /// Returns the error of the first offset (in input order) that failed to decode,
    /// [`crate::Error::OutOfBounds`] for offsets past the end of `data`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use luascope::{ChunkConfig, LString, StringCodec};
    ///
    /// let config = ChunkConfig::new(0x53, 4)?;
    /// let data = [0x00, 0x02, b'a', 0x00];
    ///
    /// let values = StringCodec::Compact.parse_at(&data, &[0, 1, 3], &config)?;
    /// assert_eq!(values, [LString::Null, LString::from("a\x01"), LString::Null]);
    /// # Ok::<(), luascope::Error>(())
    /// ```
    pub fn parse_at(
        &self,
        data: &[u8],
        offsets: &[usize],
        config: &ChunkConfig,
    ) -> Result<Vec<LString>> {
        let results: Vec<Result<LString>> = offsets
            .par_iter()
            .map_init(Vec::new, |scratch, &offset| {
                let mut parser = Parser::new(data);
                parser.seek(offset)?;
                self.parse_with(&mut parser, config, scratch)
            })
            .collect();

        results.into_iter().collect()
    }

    /// Encode a string record into `out`.
    ///
    /// Nothing is written if the length does not fit the chunk's `size_t`.
    ///
    /// # Errors
    /// Returns [`crate::Error::ValueTooLarge`] if the length does not fit, or
    /// [`crate::Error::FileError`] if the sink fails.
    pub fn write<W: Write + ?Sized>(
        &self,
        out: &mut W,
        config: &ChunkConfig,
        value: &LString,
    ) -> Result<()> {
        match self {
            StringCodec::Legacy => legacy::write(out, config, value),
            StringCodec::Compact => compact::write(out, config, value),
            StringCodec::Modern => modern::write(out, config, value),
        }
    }

    /// Encode a string record into a new buffer.
    ///
    /// # Errors
    /// Returns [`crate::Error::ValueTooLarge`] if the length does not fit the chunk's `size_t`.
    pub fn encode(&self, config: &ChunkConfig, value: &LString) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len(config, value));
        self.write(&mut out, config, value)?;
        Ok(out)
    }

    /// The exact number of bytes [`StringCodec::write`] produces for `value`.
    #[must_use]
    pub fn encoded_len(&self, config: &ChunkConfig, value: &LString) -> usize {
        match self {
            StringCodec::Legacy => legacy::encoded_len(config, value),
            StringCodec::Compact => compact::encoded_len(config, value),
            StringCodec::Modern => modern::encoded_len(config, value),
        }
    }
}
