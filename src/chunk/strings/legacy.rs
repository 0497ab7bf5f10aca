//! The oldest string record layout.
//!
//! ```text
//! size_t  n            0 for a null string
//! u8[n-1] content
//! u8      terminator   counted in n, 0x00 as written by the reference compiler
//! ```

use std::io::Write;

use crate::{
    chunk::{config::ChunkConfig, lstring::LString, sizet::SizeT},
    file::parser::Parser,
    Result,
};

pub(super) fn parse(
    parser: &mut Parser,
    config: &ChunkConfig,
    scratch: &mut Vec<u8>,
) -> Result<LString> {
    let size = SizeT::parse(parser, config)?;
    parser.ensure_remaining(size.to_usize()?)?;

    scratch.clear();
    size.iterate(|_| {
        scratch.push(parser.read_le::<u8>()?);
        Ok(())
    })?;

    match scratch.split_last() {
        Some((trailing, content)) => Ok(LString::with_trailing(content, *trailing)),
        None => Ok(LString::Null),
    }
}

pub(super) fn write<W: Write + ?Sized>(
    out: &mut W,
    config: &ChunkConfig,
    value: &LString,
) -> Result<()> {
    let Some(content) = value.content() else {
        return SizeT::from_len(0, config)?.write(out, config);
    };

    // The stored terminator is never reproduced, the writer always emits 0x00
    let size = SizeT::from_len(content.len() + 1, config)?;
    size.write(out, config)?;
    out.write_all(content)?;
    out.write_all(&[0x00])?;
    Ok(())
}

pub(super) fn encoded_len(config: &ChunkConfig, value: &LString) -> usize {
    let width = usize::from(config.size_t());
    match value.content() {
        None => width,
        Some(content) => width + content.len() + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn config() -> ChunkConfig {
        ChunkConfig::new(0x51, 4).unwrap()
    }

    #[test]
    fn crafted() {
        let data = [0x06, 0x00, 0x00, 0x00, b'h', b'e', b'l', b'l', b'o', 0x00];
        let mut parser = Parser::new(&data);

        let value = parse(&mut parser, &config(), &mut Vec::new()).unwrap();
        assert_eq!(value, LString::with_trailing("hello", 0x00));
        assert_eq!(parser.pos(), 10);
    }

    #[test]
    fn trailing_byte_is_peeled_off() {
        let data = [0x03, 0x00, 0x00, 0x00, b'o', b'k', 0x7F];
        let value = parse(&mut Parser::new(&data), &config(), &mut Vec::new()).unwrap();

        assert_eq!(value.content(), Some(&b"ok"[..]));
        assert_eq!(value.trailing(), Some(0x7F));
    }

    #[test]
    fn terminator_only() {
        let data = [0x01, 0x00, 0x00, 0x00, 0x00];
        let value = parse(&mut Parser::new(&data), &config(), &mut Vec::new()).unwrap();

        assert_eq!(value, LString::with_trailing("", 0x00));
        assert!(!value.is_null());
    }

    #[test]
    fn null() {
        let data = [0x00, 0x00, 0x00, 0x00];
        let mut parser = Parser::new(&data);
        assert_eq!(
            parse(&mut parser, &config(), &mut Vec::new()).unwrap(),
            LString::Null
        );
        assert_eq!(parser.pos(), 4);

        let mut out = Vec::new();
        write(&mut out, &config(), &LString::Null).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn write_normalizes_terminator() {
        let mut out = Vec::new();
        write(&mut out, &config(), &LString::with_trailing("ab", 0x41)).unwrap();

        assert_eq!(out, [0x03, 0x00, 0x00, 0x00, b'a', b'b', 0x00]);
        assert_eq!(
            encoded_len(&config(), &LString::with_trailing("ab", 0x41)),
            out.len()
        );
    }

    #[test]
    fn truncated() {
        let data = [0x08, 0x00, 0x00, 0x00, b'a', b'b'];
        let mut scratch = Vec::new();

        assert!(matches!(
            parse(&mut Parser::new(&data), &config(), &mut scratch),
            Err(Error::TruncatedInput {
                needed: 8,
                available: 2
            })
        ));
        assert!(scratch.is_empty());
    }
}
