//! Sequential decoding of the string records of a chunk.

use crate::{
    chunk::{config::ChunkConfig, lstring::LString, strings::StringCodec},
    file::parser::Parser,
    Result,
};

/// Sequential decoder for the string records of one chunk.
///
/// A `StringReader` fixes the codec and configuration of a chunk and owns the scratch buffer
/// used while decoding, so consecutive records do not reallocate it. Readers are cheap; use
/// one per thread rather than sharing one.
///
/// # Examples
///
/// ```rust
/// use luascope::{ChunkConfig, LString, Parser, StringReader};
///
/// let config = ChunkConfig::new(0x51, 4)?;
/// let mut reader = StringReader::new(config)?;
///
/// let data = [
///     0x00, 0x00, 0x00, 0x00,
///     0x03, 0x00, 0x00, 0x00, b'o', b'k', 0x00,
/// ];
/// let mut parser = Parser::new(&data);
///
/// let values = reader.read_n(&mut parser, 2)?;
/// assert_eq!(values, [LString::Null, LString::with_trailing("ok", 0x00)]);
/// # Ok::<(), luascope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct StringReader {
    codec: StringCodec,
    config: ChunkConfig,
    scratch: Vec<u8>,
}

impl StringReader {
    /// Create a reader for the chunk described by `config`.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnsupportedGeneration`] if the chunk's generation is unknown.
    pub fn new(config: ChunkConfig) -> Result<Self> {
        Ok(StringReader {
            codec: config.codec()?,
            config,
            scratch: Vec::new(),
        })
    }

    /// The codec selected for this chunk.
    #[must_use]
    pub fn codec(&self) -> StringCodec {
        self.codec
    }

    /// The configuration of this chunk.
    #[must_use]
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Decode the string record at the current parser position.
    ///
    /// # Errors
    /// Returns [`crate::Error::TruncatedInput`] if the record runs past the end of the data.
    /// On error the parser is left at the start of the record.
    pub fn read(&mut self, parser: &mut Parser) -> Result<LString> {
        self.codec.parse_with(parser, &self.config, &mut self.scratch)
    }

    /// Decode `count` consecutive string records.
    ///
    /// Either all records are decoded, or the parser is left where it started.
    ///
    /// # Errors
    /// Returns the error of the first record that failed to decode.
    pub fn read_n(&mut self, parser: &mut Parser, count: usize) -> Result<Vec<LString>> {
        parser.transactional(|parser| {
            let mut values = Vec::with_capacity(count.min(parser.remaining()));
            for _ in 0..count {
                values.push(self.read(parser)?);
            }
            Ok(values)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn reads_sequentially() {
        let config = ChunkConfig::new(0x54, 4).unwrap();
        let mut reader = StringReader::new(config).unwrap();
        assert_eq!(reader.codec(), StringCodec::Modern);
        assert_eq!(reader.config(), &config);

        let data = [
            0x03, 0x00, 0x00, 0x00, b'a', b'b', //
            0x00, 0x00, 0x00, 0x00, //
            0x02, 0x00, 0x00, 0x00, b'c',
        ];
        let mut parser = Parser::new(&data);

        assert_eq!(reader.read(&mut parser).unwrap(), LString::from("ab"));
        assert_eq!(reader.read(&mut parser).unwrap(), LString::Null);
        assert_eq!(reader.read(&mut parser).unwrap(), LString::from("c"));
        assert!(!parser.has_more_data());
    }

    #[test]
    fn read_n_is_all_or_nothing() {
        let config = ChunkConfig::new(0x53, 4).unwrap();
        let mut reader = StringReader::new(config).unwrap();

        let data = [0x00, 0x02, b'x', b'y', 0x04, b'z'];
        let mut parser = Parser::new(&data);

        assert!(matches!(
            reader.read_n(&mut parser, 3),
            Err(Error::TruncatedInput { .. })
        ));
        assert_eq!(parser.pos(), 0);

        let values = reader.read_n(&mut parser, 2).unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(parser.pos(), 4);
    }

    #[test]
    fn unsupported_generation() {
        let config = ChunkConfig::new(0x41, 4).unwrap();
        assert!(matches!(
            StringReader::new(config),
            Err(Error::UnsupportedGeneration(0x41))
        ));
    }
}
