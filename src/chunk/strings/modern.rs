//! The current string record layout.
//!
//! ```text
//! size_t  n            0 for a null string, content length + 1 otherwise
//! u8[n-1] content      no terminator is stored
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
    if size.value() == 0 {
        return Ok(LString::Null);
    }
    parser.ensure_remaining(size.to_usize()? - 1)?;

    // The first count only accounts for the implicit terminator
    scratch.clear();
    size.iterate(|index| {
        if index > 0 {
            scratch.push(parser.read_le::<u8>()?);
        }
        Ok(())
    })?;

    Ok(LString::new(scratch.as_slice()))
}

pub(super) fn write<W: Write + ?Sized>(
    out: &mut W,
    config: &ChunkConfig,
    value: &LString,
) -> Result<()> {
    match value.content() {
        None => SizeT::from_len(0, config)?.write(out, config),
        Some(content) => {
            SizeT::from_len(content.len() + 1, config)?.write(out, config)?;
            out.write_all(content)?;
            Ok(())
        }
    }
}

pub(super) fn encoded_len(config: &ChunkConfig, value: &LString) -> usize {
    usize::from(config.size_t()) + value.content().map_or(0, <[u8]>::len)
}
